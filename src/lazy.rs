use std::marker::PhantomData;

use crate::cursor::TextCursor;
use crate::parser::{Parsed, Parser};

/// A lazy parser that defers the construction of the actual parser until
/// parse time. Useful for breaking mutual recursion between parser-building
/// functions; for a single self-referential grammar, [`fix`](crate::fix::fix)
/// avoids rebuilding the body on every invocation.
pub struct Lazy<F, P> {
    factory: F,
    _parser: PhantomData<fn() -> P>,
}

impl<F, P> Lazy<F, P>
where
    F: Fn() -> P,
{
    pub fn new(factory: F) -> Self {
        Lazy {
            factory,
            _parser: PhantomData,
        }
    }
}

impl<'text, F, P> Parser<'text> for Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser<'text>,
{
    type Output = P::Output;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        (self.factory)().parse(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<F, P>(factory: F) -> Lazy<F, P>
where
    F: Fn() -> P,
{
    Lazy::new(factory)
}
