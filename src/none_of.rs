use std::borrow::Cow;

use crate::cursor::TextCursor;
use crate::error::Failure;
use crate::parser::{Parsed, Parser};

/// Parser that consumes a single character *not* in a given set.
/// Fails at end of input.
pub struct NoneOf {
    set: Cow<'static, str>,
}

impl NoneOf {
    pub fn new(set: impl Into<Cow<'static, str>>) -> Self {
        NoneOf { set: set.into() }
    }
}

impl<'text> Parser<'text> for NoneOf {
    type Output = char;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        match cursor.value() {
            Some(c) if !self.set.contains(c) => Ok((c, cursor.next())),
            _ => Err(Failure::new(
                cursor.position(),
                format!("none of {}", self.set),
            )),
        }
    }
}

/// Convenience function to create a NoneOf parser
pub fn none_of(set: impl Into<Cow<'static, str>>) -> NoneOf {
    NoneOf::new(set)
}
