//! Shake cue played on the gallows after a wrong guess.

use std::time::{Duration, Instant};
use tracing::instrument;

/// Horizontal offsets at evenly spaced points of the animation.
const KEYFRAMES: [f64; 11] = [
    0.0, -10.0, 10.0, -10.0, 10.0, -5.0, 5.0, -2.0, 2.0, 0.0, 0.0,
];

/// A running shake animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shake {
    started: Instant,
    duration: Duration,
}

impl Shake {
    /// Starts a shake at `now`.
    #[instrument]
    pub fn start(now: Instant, duration: Duration) -> Self {
        Self {
            started: now,
            duration,
        }
    }

    /// Horizontal offset at `now`, interpolated linearly between keyframes.
    ///
    /// Zero before the start and once the animation has finished.
    pub fn offset_at(&self, now: Instant) -> f64 {
        if self.is_finished(now) {
            return 0.0;
        }

        let elapsed = now.saturating_duration_since(self.started).as_secs_f64();
        let position = elapsed / self.duration.as_secs_f64() * (KEYFRAMES.len() - 1) as f64;
        let index = (position.floor() as usize).min(KEYFRAMES.len() - 2);
        let fraction = position - index as f64;

        KEYFRAMES[index] + (KEYFRAMES[index + 1] - KEYFRAMES[index]) * fraction
    }

    /// Returns true once the animation has run its course.
    pub fn is_finished(&self, now: Instant) -> bool {
        self.duration.is_zero() || now.saturating_duration_since(self.started) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(shake: &Shake, start: Instant, millis: u64) -> f64 {
        shake.offset_at(start + Duration::from_millis(millis))
    }

    #[test]
    fn test_keyframes_are_hit() {
        let start = Instant::now();
        let shake = Shake::start(start, Duration::from_millis(1000));

        assert_eq!(at(&shake, start, 0), 0.0);
        assert!((at(&shake, start, 100) - -10.0).abs() < 1e-6);
        assert!((at(&shake, start, 200) - 10.0).abs() < 1e-6);
        assert!((at(&shake, start, 500) - -5.0).abs() < 1e-6);
        assert!((at(&shake, start, 800) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_interpolates_between_keyframes() {
        let start = Instant::now();
        let shake = Shake::start(start, Duration::from_millis(1000));
        // Halfway from -10 to 10.
        assert!(at(&shake, start, 150).abs() < 1e-6);
        // Halfway from 0 to -10.
        assert!((at(&shake, start, 50) - -5.0).abs() < 1e-6);
    }

    #[test]
    fn test_finishes_at_rest() {
        let start = Instant::now();
        let shake = Shake::start(start, Duration::from_millis(400));
        assert!(!shake.is_finished(start));
        assert!(shake.is_finished(start + Duration::from_millis(400)));
        assert_eq!(at(&shake, start, 400), 0.0);
        assert_eq!(at(&shake, start, 5000), 0.0);
    }

    #[test]
    fn test_zero_duration_never_moves() {
        let start = Instant::now();
        let shake = Shake::start(start, Duration::ZERO);
        assert!(shake.is_finished(start));
        assert_eq!(shake.offset_at(start), 0.0);
    }
}
