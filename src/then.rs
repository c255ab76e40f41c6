use crate::cursor::TextCursor;
use crate::parser::{Parsed, Parser};

/// Parser combinator that sequences two parsers and discards the first
/// parser's value: `then(p, q)` runs `p`, then runs `q` from the resulting
/// position and produces `q`'s value. Fails if either fails.
pub struct Then<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Then<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Then { parser1, parser2 }
    }
}

impl<'text, P1, P2> Parser<'text> for Then<P1, P2>
where
    P1: Parser<'text>,
    P2: Parser<'text>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        let (_, cursor) = self.parser1.parse(cursor)?;
        self.parser2.parse(cursor)
    }
}

/// Convenience function to create a Then parser
pub fn then<'text, P1, P2>(parser1: P1, parser2: P2) -> Then<P1, P2>
where
    P1: Parser<'text>,
    P2: Parser<'text>,
{
    Then::new(parser1, parser2)
}

/// Extension trait to add .then() method support for parsers
pub trait ThenExt<'text>: Parser<'text> + Sized {
    fn then<P>(self, other: P) -> Then<Self, P>
    where
        P: Parser<'text>,
    {
        Then::new(self, other)
    }
}

impl<'text, P> ThenExt<'text> for P where P: Parser<'text> {}
