use crate::cursor::TextCursor;
use crate::parser::{Parsed, Parser};

/// Parser combinator implementing ordered choice without backtracking.
///
/// `or(p, q)` first applies `p`. If `p` succeeds, its result is returned.
/// If `p` fails *without consuming any input* (its failure index equals the
/// starting index), `q` is tried from the same position. If `p` failed
/// after consuming input, that failure is returned as-is and `q` is never
/// tried: partial consumption commits to the branch. Callers that need full
/// backtracking wrap the branch in [`attempt`](crate::attempt::attempt) or
/// use [`or_backtrack`](crate::or_backtrack::or_backtrack).
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'text, P1, P2, O> Parser<'text> for Or<P1, P2>
where
    P1: Parser<'text, Output = O>,
    P2: Parser<'text, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        match self.parser1.parse(cursor) {
            Ok(result) => Ok(result),
            Err(failure) if failure.at == cursor.position() => self.parser2.parse(cursor),
            Err(failure) => Err(failure),
        }
    }
}

/// Convenience function to create an Or parser
pub fn or<'text, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'text, Output = O>,
    P2: Parser<'text, Output = O>,
{
    Or::new(parser1, parser2)
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'text>: Parser<'text> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'text, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

impl<'text, P> OrExt<'text> for P where P: Parser<'text> {}
