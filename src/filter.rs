use std::borrow::Cow;

use crate::cursor::TextCursor;
use crate::error::Failure;
use crate::parser::{Parsed, Parser};

/// Parser combinator that applies a predicate to the output of another
/// parser. When the predicate rejects the value, the failure is reported
/// at the starting index with the caller-supplied expectation, so an
/// enclosing choice can still try an alternative.
pub struct Filter<P, F> {
    parser: P,
    predicate: F,
    expected: Cow<'static, str>,
}

impl<P, F> Filter<P, F> {
    pub fn new(parser: P, predicate: F, expected: Cow<'static, str>) -> Self {
        Filter {
            parser,
            predicate,
            expected,
        }
    }
}

impl<'text, P, F> Parser<'text> for Filter<P, F>
where
    P: Parser<'text>,
    F: Fn(&P::Output) -> bool,
{
    type Output = P::Output;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        let (value, next) = self.parser.parse(cursor)?;
        if (self.predicate)(&value) {
            Ok((value, next))
        } else {
            Err(Failure::new(cursor.position(), self.expected.clone()))
        }
    }
}

/// Convenience function to create a Filter parser
pub fn filter<'text, P, F>(
    parser: P,
    predicate: F,
    expected: impl Into<Cow<'static, str>>,
) -> Filter<P, F>
where
    P: Parser<'text>,
    F: Fn(&P::Output) -> bool,
{
    Filter::new(parser, predicate, expected.into())
}

/// Extension trait to add .filter() method support for parsers
pub trait FilterExt<'text>: Parser<'text> + Sized {
    fn filter<F>(self, predicate: F, expected: impl Into<Cow<'static, str>>) -> Filter<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        Filter::new(self, predicate, expected.into())
    }
}

impl<'text, P> FilterExt<'text> for P where P: Parser<'text> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::any_char::any_char;

    #[test]
    fn test_filter_accepts() {
        let parser = any_char().filter(|c| c.is_uppercase(), "an uppercase letter");
        assert_eq!(parser.parse_text("A").unwrap(), 'A');
    }

    #[test]
    fn test_filter_rejects_at_start() {
        let parser = any_char().filter(|c| c.is_uppercase(), "an uppercase letter");
        let failure = parser.parse_text("a").unwrap_err();
        assert_eq!(failure.expected(), "an uppercase letter");
        assert_eq!(failure.index(), 0);
    }

    #[test]
    fn test_filter_chained() {
        let parser = any_char()
            .filter(|c| c.is_alphabetic(), "a letter")
            .filter(|c| c.is_uppercase(), "an uppercase letter");

        assert_eq!(parser.parse_text("A").unwrap(), 'A');

        let failure = parser.parse_text("a").unwrap_err();
        assert_eq!(failure.expected(), "an uppercase letter");

        let failure = parser.parse_text("1").unwrap_err();
        assert_eq!(failure.expected(), "a letter");
    }

    #[test]
    fn test_filter_parser_failure_passes_through() {
        let parser = filter(any_char(), |_| true, "anything");
        let failure = parser.parse_text("").unwrap_err();
        assert_eq!(failure.expected(), "any character");
    }
}
