use crate::cursor::TextCursor;
use crate::parser::{Parsed, Parser};

/// Parser combinator that re-reports any failure at the starting index.
///
/// `attempt(p)` behaves exactly like `p` on success. On failure the
/// expectation is kept but the index is reset to where the attempt began,
/// so the failure reads as consumption-free. `attempt(p).or(q)` therefore
/// behaves like [`or_backtrack`](crate::or_backtrack::or_backtrack) for
/// that one branch.
pub struct Attempt<P> {
    parser: P,
}

impl<P> Attempt<P> {
    pub fn new(parser: P) -> Self {
        Attempt { parser }
    }
}

impl<'text, P> Parser<'text> for Attempt<P>
where
    P: Parser<'text>,
{
    type Output = P::Output;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        self.parser
            .parse(cursor)
            .map_err(|failure| failure.at_index(cursor.position()))
    }
}

/// Convenience function to create an Attempt parser
pub fn attempt<'text, P>(parser: P) -> Attempt<P>
where
    P: Parser<'text>,
{
    Attempt::new(parser)
}

/// Extension trait to add .attempt() method support for parsers
pub trait AttemptExt<'text>: Parser<'text> + Sized {
    fn attempt(self) -> Attempt<Self> {
        Attempt::new(self)
    }
}

impl<'text, P> AttemptExt<'text> for P where P: Parser<'text> {}
