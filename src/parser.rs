use std::rc::Rc;

use crate::cursor::TextCursor;
use crate::error::{Failure, ParseFailure};

/// The outcome of one parse attempt.
///
/// `Ok((value, cursor))` is a success: `cursor` sits immediately after the
/// consumed text (equal to the starting cursor for a zero-width match).
/// `Err(failure)` is the recoverable kind of failure that combinators
/// inspect to drive choice and repetition.
pub type Parsed<'text, T> = Result<(T, TextCursor<'text>), Failure>;

/// Core trait for parser combinators.
///
/// A parser is an immutable, stateless value: `parse` may be invoked
/// repeatedly and concurrently without aliasing hazards, and composition
/// never mutates an operand. Failures must leave no trace — the caller's
/// cursor is `Copy`, so a failed attempt simply never replaces it.
pub trait Parser<'text> {
    type Output;

    /// Attempt to parse from the given cursor position.
    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output>;

    /// Parse a prefix of `text` and return the produced value.
    fn parse_text(&self, text: &'text str) -> Result<Self::Output, ParseFailure> {
        self.parse_partial(text).map(|(value, _)| value)
    }

    /// Parse a prefix of `text` and return the produced value together with
    /// the unconsumed remainder.
    fn parse_partial(&self, text: &'text str) -> Result<(Self::Output, &'text str), ParseFailure> {
        match self.parse(TextCursor::new(text)) {
            Ok((value, cursor)) => Ok((value, cursor.rest())),
            Err(failure) => Err(ParseFailure::new(failure, text)),
        }
    }

    /// Parse `text` and require that the match reaches end of input.
    fn parse_strict(&self, text: &'text str) -> Result<Self::Output, ParseFailure> {
        match self.parse(TextCursor::new(text)) {
            Ok((value, cursor)) if cursor.eos() => Ok(value),
            Ok((_, cursor)) => Err(ParseFailure::new(
                Failure::new(cursor.position(), "end of input"),
                text,
            )),
            Err(failure) => Err(ParseFailure::new(failure, text)),
        }
    }
}

impl<'text, P: Parser<'text> + ?Sized> Parser<'text> for &P {
    type Output = P::Output;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'text, P: Parser<'text> + ?Sized> Parser<'text> for Box<P> {
    type Output = P::Output;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'text, P: Parser<'text> + ?Sized> Parser<'text> for Rc<P> {
    type Output = P::Output;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        (**self).parse(cursor)
    }
}
