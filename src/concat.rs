use crate::cursor::TextCursor;
use crate::parser::{Parsed, Parser};

/// Values that can be joined end to end by [`Concat`].
pub trait Concatenate {
    fn concatenate(self, other: Self) -> Self;
}

impl Concatenate for String {
    fn concatenate(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Concatenate for Vec<T> {
    fn concatenate(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// Parser combinator that runs two parsers in sequence and concatenates
/// their values. The first failure encountered wins; on success the
/// position is the second parser's end position.
///
/// For keeping both values separate, use [`and`](crate::and::and) instead —
/// tuple combination covers most sequencing; `concat` exists for grammars
/// that accumulate one flat string or list.
pub struct Concat<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Concat<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Concat { parser1, parser2 }
    }
}

impl<'text, P1, P2, O> Parser<'text> for Concat<P1, P2>
where
    P1: Parser<'text, Output = O>,
    P2: Parser<'text, Output = O>,
    O: Concatenate,
{
    type Output = O;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        let (value1, cursor) = self.parser1.parse(cursor)?;
        let (value2, cursor) = self.parser2.parse(cursor)?;
        Ok((value1.concatenate(value2), cursor))
    }
}

/// Convenience function to create a Concat parser
pub fn concat<'text, P1, P2, O>(parser1: P1, parser2: P2) -> Concat<P1, P2>
where
    P1: Parser<'text, Output = O>,
    P2: Parser<'text, Output = O>,
    O: Concatenate,
{
    Concat::new(parser1, parser2)
}

/// Extension trait to add .concat() method support for parsers
pub trait ConcatExt<'text>: Parser<'text> + Sized {
    fn concat<P>(self, other: P) -> Concat<Self, P>
    where
        P: Parser<'text, Output = Self::Output>,
        Self::Output: Concatenate,
    {
        Concat::new(self, other)
    }
}

impl<'text, P> ConcatExt<'text> for P where P: Parser<'text> {}
