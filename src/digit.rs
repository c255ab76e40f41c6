use crate::cursor::TextCursor;
use crate::error::Failure;
use crate::parser::{Parsed, Parser};

/// Parser that consumes a single decimal digit (`0`-`9`).
pub struct Digit;

impl<'text> Parser<'text> for Digit {
    type Output = char;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        match cursor.value() {
            Some(c) if c.is_ascii_digit() => Ok((c, cursor.next())),
            _ => Err(Failure::new(cursor.position(), "a digit")),
        }
    }
}

/// Convenience function to create a Digit parser
pub fn digit() -> Digit {
    Digit
}
