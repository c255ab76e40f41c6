use crate::cursor::TextCursor;
use crate::error::Failure;
use crate::parser::{Parsed, Parser};

/// Parser combinator that requires a trailing terminator without consuming
/// it.
///
/// `ends_with(p, q)` runs `p`, then checks that `q` matches from the
/// resulting position; on success the position stays at the end of `p`'s
/// match (a lookahead-style termination check). If the terminator fails,
/// the combined parser fails at the terminator's failure index.
pub struct EndsWith<P1, P2> {
    parser: P1,
    terminator: P2,
}

impl<P1, P2> EndsWith<P1, P2> {
    pub fn new(parser: P1, terminator: P2) -> Self {
        EndsWith { parser, terminator }
    }
}

impl<'text, P1, P2> Parser<'text> for EndsWith<P1, P2>
where
    P1: Parser<'text>,
    P2: Parser<'text>,
{
    type Output = P1::Output;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        match self.terminator.parse(cursor) {
            Ok(_) => Ok((value, cursor)),
            Err(failure) => Err(Failure::new(
                failure.at,
                format!("ends with {}", failure.expected),
            )),
        }
    }
}

/// Convenience function to create an EndsWith parser
pub fn ends_with<'text, P1, P2>(parser: P1, terminator: P2) -> EndsWith<P1, P2>
where
    P1: Parser<'text>,
    P2: Parser<'text>,
{
    EndsWith::new(parser, terminator)
}

/// Extension trait to add .ends_with() method support for parsers
pub trait EndsWithExt<'text>: Parser<'text> + Sized {
    fn ends_with<P>(self, terminator: P) -> EndsWith<Self, P>
    where
        P: Parser<'text>,
    {
        EndsWith::new(self, terminator)
    }
}

impl<'text, P> EndsWithExt<'text> for P where P: Parser<'text> {}
