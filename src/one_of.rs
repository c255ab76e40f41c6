use std::borrow::Cow;

use crate::cursor::TextCursor;
use crate::error::Failure;
use crate::parser::{Parsed, Parser};

/// Parser that consumes a single character drawn from a given set.
pub struct OneOf {
    set: Cow<'static, str>,
}

impl OneOf {
    pub fn new(set: impl Into<Cow<'static, str>>) -> Self {
        OneOf { set: set.into() }
    }
}

impl<'text> Parser<'text> for OneOf {
    type Output = char;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        match cursor.value() {
            Some(c) if self.set.contains(c) => Ok((c, cursor.next())),
            _ => Err(Failure::new(
                cursor.position(),
                format!("one of {}", self.set),
            )),
        }
    }
}

/// Convenience function to create a OneOf parser
pub fn one_of(set: impl Into<Cow<'static, str>>) -> OneOf {
    OneOf::new(set)
}
