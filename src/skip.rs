use crate::cursor::TextCursor;
use crate::error::Failure;
use crate::parser::{Parsed, Parser};

/// Parser combinator that requires a trailing terminator and consumes it.
///
/// `skip(p, q)` runs `p`, then runs `q` from the resulting position purely
/// to validate a terminator: `q`'s value is discarded but its consumption
/// is kept, and `p`'s value is produced. If the terminator fails, the
/// combined parser fails at the terminator's failure index.
pub struct Skip<P1, P2> {
    parser: P1,
    terminator: P2,
}

impl<P1, P2> Skip<P1, P2> {
    pub fn new(parser: P1, terminator: P2) -> Self {
        Skip { parser, terminator }
    }
}

impl<'text, P1, P2> Parser<'text> for Skip<P1, P2>
where
    P1: Parser<'text>,
    P2: Parser<'text>,
{
    type Output = P1::Output;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        match self.terminator.parse(cursor) {
            Ok((_, cursor)) => Ok((value, cursor)),
            Err(failure) => Err(Failure::new(
                failure.at,
                format!("ends with {}", failure.expected),
            )),
        }
    }
}

/// Convenience function to create a Skip parser
pub fn skip<'text, P1, P2>(parser: P1, terminator: P2) -> Skip<P1, P2>
where
    P1: Parser<'text>,
    P2: Parser<'text>,
{
    Skip::new(parser, terminator)
}

/// Extension trait to add .skip() method support for parsers
pub trait SkipExt<'text>: Parser<'text> + Sized {
    fn skip<P>(self, terminator: P) -> Skip<Self, P>
    where
        P: Parser<'text>,
    {
        Skip::new(self, terminator)
    }
}

impl<'text, P> SkipExt<'text> for P where P: Parser<'text> {}
