use crate::cursor::TextCursor;
use crate::parser::{Parsed, Parser};

/// Parser combinator that runs a parser for its consumption only and
/// produces a fixed value on success.
pub struct WithValue<P, T> {
    parser: P,
    value: T,
}

impl<P, T> WithValue<P, T> {
    pub fn new(parser: P, value: T) -> Self {
        WithValue { parser, value }
    }
}

impl<'text, P, T> Parser<'text> for WithValue<P, T>
where
    P: Parser<'text>,
    T: Clone,
{
    type Output = T;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        let (_, cursor) = self.parser.parse(cursor)?;
        Ok((self.value.clone(), cursor))
    }
}

/// Convenience function to create a WithValue parser
pub fn with_value<'text, P, T>(parser: P, value: T) -> WithValue<P, T>
where
    P: Parser<'text>,
    T: Clone,
{
    WithValue::new(parser, value)
}

/// Extension trait to add .with_value() method support for parsers
pub trait WithValueExt<'text>: Parser<'text> + Sized {
    fn with_value<T>(self, value: T) -> WithValue<Self, T>
    where
        T: Clone,
    {
        WithValue::new(self, value)
    }
}

impl<'text, P> WithValueExt<'text> for P where P: Parser<'text> {}
