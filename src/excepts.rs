use std::fmt;

use crate::cursor::TextCursor;
use crate::error::Failure;
use crate::parser::{Parsed, Parser};

/// Parser combinator that performs negative lookahead *after* a match.
///
/// `excepts(p, excluded)` runs `p`; if it succeeds, `excluded` is attempted
/// from the resulting position. If `excluded` matches, the whole combinator
/// fails at `p`'s original starting index — consumption-free, so an
/// enclosing [`or`](crate::or::or) may still try an alternative. Otherwise
/// `p`'s result is returned unchanged.
pub struct Excepts<P, X> {
    parser: P,
    excluded: X,
}

impl<P, X> Excepts<P, X> {
    pub fn new(parser: P, excluded: X) -> Self {
        Excepts { parser, excluded }
    }
}

impl<'text, P, X> Parser<'text> for Excepts<P, X>
where
    P: Parser<'text>,
    X: Parser<'text>,
    X::Output: fmt::Debug,
{
    type Output = P::Output;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        let start = cursor.position();
        let (value, after) = self.parser.parse(cursor)?;
        match self.excluded.parse(after) {
            Ok((unwanted, _)) => Err(Failure::new(start, format!("should not be {unwanted:?}"))),
            Err(_) => Ok((value, after)),
        }
    }
}

/// Convenience function to create an Excepts parser
pub fn excepts<'text, P, X>(parser: P, excluded: X) -> Excepts<P, X>
where
    P: Parser<'text>,
    X: Parser<'text>,
{
    Excepts::new(parser, excluded)
}

/// Extension trait to add .excepts() method support for parsers
pub trait ExceptsExt<'text>: Parser<'text> + Sized {
    fn excepts<X>(self, excluded: X) -> Excepts<Self, X>
    where
        X: Parser<'text>,
    {
        Excepts::new(self, excluded)
    }
}

impl<'text, P> ExceptsExt<'text> for P where P: Parser<'text> {}
