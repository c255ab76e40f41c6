use crate::cursor::TextCursor;
use crate::parser::{Parsed, Parser};

/// Parser combinator that transforms the output of a parser using a mapping
/// function. Position and failures are untouched.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'text, P, F, U> Parser<'text> for Map<P, F>
where
    P: Parser<'text>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok(((self.mapper)(value), cursor))
    }
}

/// Convenience function to create a Map parser
pub fn map<'text, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'text>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'text>: Parser<'text> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

impl<'text, P> MapExt<'text> for P where P: Parser<'text> {}
