use std::fmt;

use crate::cursor::TextCursor;
use crate::error::Failure;
use crate::parser::{Parsed, Parser};

/// Parser combinator that performs negative lookahead *before* a match.
///
/// `exclude(p, banned)` first attempts `banned` at the current position;
/// if it matches, the whole combinator fails there without consuming
/// anything. Otherwise `p` runs normally. Useful for carving exceptions
/// out of a broad parser, e.g. identifiers that must not be keywords.
pub struct Exclude<P, X> {
    parser: P,
    banned: X,
}

impl<P, X> Exclude<P, X> {
    pub fn new(parser: P, banned: X) -> Self {
        Exclude { parser, banned }
    }
}

impl<'text, P, X> Parser<'text> for Exclude<P, X>
where
    P: Parser<'text>,
    X: Parser<'text>,
    X::Output: fmt::Debug,
{
    type Output = P::Output;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        match self.banned.parse(cursor) {
            Ok((unwanted, _)) => Err(Failure::new(
                cursor.position(),
                format!("something other than {unwanted:?}"),
            )),
            Err(_) => self.parser.parse(cursor),
        }
    }
}

/// Convenience function to create an Exclude parser
pub fn exclude<'text, P, X>(parser: P, banned: X) -> Exclude<P, X>
where
    P: Parser<'text>,
    X: Parser<'text>,
{
    Exclude::new(parser, banned)
}
