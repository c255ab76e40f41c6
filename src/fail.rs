use std::borrow::Cow;
use std::marker::PhantomData;

use crate::cursor::TextCursor;
use crate::error::Failure;
use crate::parser::{Parsed, Parser};

/// A parser that always fails at the current position with a fixed
/// expectation. Useful as the dead branch of a choice and for signalling
/// "no such alternative" from hand-written logic.
pub struct Fail<T> {
    expected: Cow<'static, str>,
    _output: PhantomData<fn() -> T>,
}

impl<T> Fail<T> {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Fail {
            expected: expected.into(),
            _output: PhantomData,
        }
    }
}

impl<'text, T> Parser<'text> for Fail<T> {
    type Output = T;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        Err(Failure::new(cursor.position(), self.expected.clone()))
    }
}

/// Convenience function to create a Fail parser
pub fn fail<T>(expected: impl Into<Cow<'static, str>>) -> Fail<T> {
    Fail::new(expected)
}
