use crate::cursor::TextCursor;
use crate::parser::{Parsed, Parser};

/// Parser combinator that sequences two parsers and returns both results as
/// a tuple. The first failure encountered wins; on success the position is
/// the second parser's end position.
///
/// Note: chaining multiple `.and()` calls produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples. This is due to Rust's lack
/// of variadic generics; the nested form is general and the destructuring
/// pattern makes the parsing order explicit.
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'text, P1, P2> Parser<'text> for And<P1, P2>
where
    P1: Parser<'text>,
    P2: Parser<'text>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        let (value1, cursor) = self.parser1.parse(cursor)?;
        let (value2, cursor) = self.parser2.parse(cursor)?;
        Ok(((value1, value2), cursor))
    }
}

/// Convenience function to create an And parser
pub fn and<'text, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'text>,
    P2: Parser<'text>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'text>: Parser<'text> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'text>,
    {
        And::new(self, other)
    }
}

impl<'text, P> AndExt<'text> for P where P: Parser<'text> {}
