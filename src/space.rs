use crate::cursor::TextCursor;
use crate::error::Failure;
use crate::parser::{Parsed, Parser};
use crate::times::Times;

/// Parser that consumes a single whitespace character.
pub struct Space;

impl<'text> Parser<'text> for Space {
    type Output = char;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        match cursor.value() {
            Some(c) if c.is_whitespace() => Ok((c, cursor.next())),
            _ => Err(Failure::new(cursor.position(), "whitespace")),
        }
    }
}

/// Convenience function to create a Space parser
pub fn space() -> Space {
    Space
}

/// Zero or more whitespace characters.
pub fn spaces() -> Times<Space> {
    Times::new(Space, 0, None)
}
