//! Gallows drawing.
//!
//! Geometry is given on a 150 x 200 drawing with the origin at the top
//! left and is flipped onto the canvas, whose y axis points up. The frame
//! is always drawn; one body part is added per wrong guess.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        Widget,
        canvas::{Canvas, Circle, Line as CanvasLine},
    },
};
use strum::IntoEnumIterator;

/// Drawing width.
pub const WIDTH: f64 = 150.0;
/// Drawing height.
pub const HEIGHT: f64 = 200.0;

const FRAME_COLOR: Color = Color::Gray;
const BODY_COLOR: Color = Color::LightRed;

/// A straight stroke between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start point.
    pub from: (f64, f64),
    /// End point.
    pub to: (f64, f64),
}

const fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
    Segment {
        from: (x1, y1),
        to: (x2, y2),
    }
}

/// Base, post, beam, and rope.
pub const FRAME: [Segment; 4] = [
    segment(10.0, 180.0, 100.0, 180.0),
    segment(55.0, 180.0, 55.0, 40.0),
    segment(55.0, 40.0, 120.0, 40.0),
    segment(120.0, 40.0, 120.0, 60.0),
];

/// A stroke of the figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Straight stroke.
    Line(Segment),
    /// Circle outline.
    Circle {
        /// Center point.
        center: (f64, f64),
        /// Radius.
        radius: f64,
    },
}

/// Body parts in the order they are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum BodyPart {
    /// First wrong guess.
    Head,
    /// Second wrong guess.
    Torso,
    /// Third wrong guess.
    LeftArm,
    /// Fourth wrong guess.
    RightArm,
    /// Fifth wrong guess.
    LeftLeg,
    /// Sixth wrong guess.
    RightLeg,
}

impl BodyPart {
    /// Geometry of this part.
    pub fn shape(self) -> Shape {
        match self {
            BodyPart::Head => Shape::Circle {
                center: (120.0, 80.0),
                radius: 20.0,
            },
            BodyPart::Torso => Shape::Line(segment(120.0, 100.0, 120.0, 140.0)),
            BodyPart::LeftArm => Shape::Line(segment(120.0, 110.0, 100.0, 130.0)),
            BodyPart::RightArm => Shape::Line(segment(120.0, 110.0, 140.0, 130.0)),
            BodyPart::LeftLeg => Shape::Line(segment(120.0, 140.0, 100.0, 160.0)),
            BodyPart::RightLeg => Shape::Line(segment(120.0, 140.0, 140.0, 160.0)),
        }
    }
}

/// Parts drawn after `mistakes` wrong guesses.
pub fn visible_parts(mistakes: usize) -> Vec<BodyPart> {
    BodyPart::iter().take(mistakes).collect()
}

/// Gallows widget for one stage, shifted horizontally by the shake offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gallows {
    mistakes: usize,
    offset: f64,
}

impl Gallows {
    /// Gallows for the given number of wrong guesses.
    pub fn new(mistakes: usize) -> Self {
        Self {
            mistakes,
            offset: 0.0,
        }
    }

    /// Shifts the drawing right by `offset` drawing units (left if negative).
    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }
}

fn canvas_line(segment: Segment, color: Color) -> CanvasLine {
    CanvasLine {
        x1: segment.from.0,
        y1: HEIGHT - segment.from.1,
        x2: segment.to.0,
        y2: HEIGHT - segment.to.1,
        color,
    }
}

impl Widget for Gallows {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let parts = visible_parts(self.mistakes);
        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-self.offset, WIDTH - self.offset])
            .y_bounds([0.0, HEIGHT])
            .paint(move |ctx| {
                for segment in FRAME {
                    ctx.draw(&canvas_line(segment, FRAME_COLOR));
                }
                for part in &parts {
                    match part.shape() {
                        Shape::Line(segment) => ctx.draw(&canvas_line(segment, BODY_COLOR)),
                        Shape::Circle { center, radius } => ctx.draw(&Circle {
                            x: center.0,
                            y: HEIGHT - center.1,
                            radius,
                            color: BODY_COLOR,
                        }),
                    }
                }
            })
            .render(area, buf);
    }
}
