//! Raw input parsing for the human player.

use crate::players::Command;

/// Parses a submitted line into a command.
///
/// Recognized forms are a decimal cell number and a case-insensitive `q`,
/// with surrounding whitespace tolerated. Numbers are not range-checked
/// here; an out-of-range pick is rejected when the mark is placed, so the
/// re-prompt message can name the bad position. Anything else is `None`.
pub fn parse(raw: &str) -> Option<Command> {
    let token = raw.trim();
    if token.eq_ignore_ascii_case("q") {
        return Some(Command::Quit);
    }
    token.parse::<usize>().ok().map(Command::Place)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cell_numbers() {
        assert_eq!(parse("5"), Some(Command::Place(5)));
        assert_eq!(parse(" 9 "), Some(Command::Place(9)));
        assert_eq!(parse("1"), Some(Command::Place(1)));
    }

    #[test]
    fn parses_quit_token() {
        assert_eq!(parse("q"), Some(Command::Quit));
        assert_eq!(parse("Q"), Some(Command::Quit));
        assert_eq!(parse("  q  "), Some(Command::Quit));
    }

    #[test]
    fn out_of_range_numbers_still_parse() {
        // The board rejects these as invalid positions on placement.
        assert_eq!(parse("0"), Some(Command::Place(0)));
        assert_eq!(parse("12"), Some(Command::Place(12)));
    }

    #[test]
    fn rejects_everything_else() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("   "), None);
        assert_eq!(parse("abc"), None);
        assert_eq!(parse("q3"), None);
        assert_eq!(parse("-1"), None);
        assert_eq!(parse("3.5"), None);
    }
}
