use std::borrow::Cow;

use crate::cursor::TextCursor;
use crate::error::Failure;
use crate::parser::{Parsed, Parser};

/// Parser combinator that attaches a description to a parser.
///
/// When the wrapped parser fails without consuming input, the failure's
/// expectation is replaced by the description. A failure that consumed
/// input keeps its own, more precise expectation — the same asymmetry as
/// [`or`](crate::or::or), of which this is the `or(p, fail(text))`
/// special case.
pub struct Desc<P> {
    parser: P,
    description: Cow<'static, str>,
}

impl<P> Desc<P> {
    pub fn new(parser: P, description: impl Into<Cow<'static, str>>) -> Self {
        Desc {
            parser,
            description: description.into(),
        }
    }
}

impl<'text, P> Parser<'text> for Desc<P>
where
    P: Parser<'text>,
{
    type Output = P::Output;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        match self.parser.parse(cursor) {
            Err(failure) if failure.at == cursor.position() => {
                Err(Failure::new(cursor.position(), self.description.clone()))
            }
            other => other,
        }
    }
}

/// Convenience function to create a Desc parser
pub fn desc<'text, P>(parser: P, description: impl Into<Cow<'static, str>>) -> Desc<P>
where
    P: Parser<'text>,
{
    Desc::new(parser, description)
}

/// Extension trait to add .desc() method support for parsers
pub trait DescExt<'text>: Parser<'text> + Sized {
    fn desc(self, description: impl Into<Cow<'static, str>>) -> Desc<Self> {
        Desc::new(self, description)
    }
}

impl<'text, P> DescExt<'text> for P where P: Parser<'text> {}
