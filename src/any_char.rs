use crate::cursor::TextCursor;
use crate::error::Failure;
use crate::parser::{Parsed, Parser};

/// Parser that consumes and returns a single character, whatever it is.
/// Fails only at end of input.
pub struct AnyChar;

impl<'text> Parser<'text> for AnyChar {
    type Output = char;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        match cursor.value() {
            Some(c) => Ok((c, cursor.next())),
            None => Err(Failure::new(cursor.position(), "any character")),
        }
    }
}

/// Convenience function to create an AnyChar parser
pub fn any_char() -> AnyChar {
    AnyChar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_char_consumes_one() {
        let parser = any_char();
        let (c, rest) = parser.parse_partial("abc").unwrap();
        assert_eq!(c, 'a');
        assert_eq!(rest, "bc");
    }

    #[test]
    fn test_any_char_multibyte() {
        let parser = any_char();
        let (c, rest) = parser.parse_partial("中x").unwrap();
        assert_eq!(c, '中');
        assert_eq!(rest, "x");
    }

    #[test]
    fn test_any_char_fails_at_end_of_input() {
        let parser = any_char();
        let failure = parser.parse_text("").unwrap_err();
        assert_eq!(failure.expected(), "any character");
        assert_eq!(failure.index(), 0);
    }
}
