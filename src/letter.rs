use crate::cursor::TextCursor;
use crate::error::Failure;
use crate::parser::{Parsed, Parser};

/// Parser that consumes a single alphabetic character.
pub struct Letter;

impl<'text> Parser<'text> for Letter {
    type Output = char;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        match cursor.value() {
            Some(c) if c.is_alphabetic() => Ok((c, cursor.next())),
            _ => Err(Failure::new(cursor.position(), "a letter")),
        }
    }
}

/// Convenience function to create a Letter parser
pub fn letter() -> Letter {
    Letter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_matches_alphabetic() {
        assert_eq!(letter().parse_text("a").unwrap(), 'a');
        assert_eq!(letter().parse_text("Z").unwrap(), 'Z');
        assert_eq!(letter().parse_text("ñ").unwrap(), 'ñ');
        assert_eq!(letter().parse_text("中").unwrap(), '中');
    }

    #[test]
    fn test_letter_rejects_others() {
        assert!(letter().parse_text("1").is_err());
        assert!(letter().parse_text("!").is_err());
        assert!(letter().parse_text(" ").is_err());
        assert!(letter().parse_text("").is_err());
    }

    #[test]
    fn test_letter_expectation() {
        let failure = letter().parse_text("1").unwrap_err();
        assert_eq!(failure.expected(), "a letter");
        assert_eq!(failure.index(), 0);
    }
}
