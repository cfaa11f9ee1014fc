//! Letter slots for the secret word.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use strictly_hangman::RoundSnapshot;

/// One underlined slot per letter; guessed letters are shown.
pub fn word_line(snapshot: &RoundSnapshot) -> Line<'static> {
    let slot_style = Style::default()
        .fg(Color::LightBlue)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

    let mut spans = Vec::with_capacity(snapshot.slots().len() * 2);
    for (i, slot) in snapshot.slots().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let text = match slot {
            Some(letter) => format!(" {} ", letter.as_char()),
            None => "   ".to_string(),
        };
        spans.push(Span::styled(text, slot_style));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_hangman::{Letter, Round, SecretWord};

    #[test]
    fn test_hidden_slots_are_blank() {
        let mut round = Round::new(SecretWord::new("KIWI").expect("valid word"));
        round.guess(Letter::I);
        let line = word_line(&round.snapshot());

        let slots: Vec<_> = line
            .spans
            .iter()
            .filter(|s| s.content != " ")
            .map(|s| s.content.to_string())
            .collect();
        assert_eq!(slots, vec!["   ", " I ", "   ", " I "]);
    }
}
