use crate::cursor::TextCursor;
use crate::parser::{Parsed, Parser};

/// Parser combinator that makes a parser optional.
///
/// On success the value is wrapped in `Some`; on failure — no matter how
/// much input the attempt consumed — the result is `None` at the original
/// position. `optional` never fails and never consumes input on failure.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'text, P> Parser<'text> for Optional<P>
where
    P: Parser<'text>,
{
    type Output = Option<P::Output>;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        match self.parser.parse(cursor) {
            Ok((value, cursor)) => Ok((Some(value), cursor)),
            Err(_) => Ok((None, cursor)),
        }
    }
}

/// Like [`Optional`] but produces a caller-supplied default instead of
/// `None` when the parser fails.
pub struct OptionalOr<P, T> {
    parser: P,
    default: T,
}

impl<P, T> OptionalOr<P, T> {
    pub fn new(parser: P, default: T) -> Self {
        OptionalOr { parser, default }
    }
}

impl<'text, P, T> Parser<'text> for OptionalOr<P, T>
where
    P: Parser<'text, Output = T>,
    T: Clone,
{
    type Output = T;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        match self.parser.parse(cursor) {
            Ok(result) => Ok(result),
            Err(_) => Ok((self.default.clone(), cursor)),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'text, P>(parser: P) -> Optional<P>
where
    P: Parser<'text>,
{
    Optional::new(parser)
}

/// Convenience function to create an OptionalOr parser
pub fn optional_or<'text, P, T>(parser: P, default: T) -> OptionalOr<P, T>
where
    P: Parser<'text, Output = T>,
    T: Clone,
{
    OptionalOr::new(parser, default)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt<'text>: Parser<'text> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    fn optional_or(self, default: Self::Output) -> OptionalOr<Self, Self::Output>
    where
        Self::Output: Clone,
    {
        OptionalOr::new(self, default)
    }
}

impl<'text, P> OptionalExt<'text> for P where P: Parser<'text> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;

    #[test]
    fn test_optional_success() {
        let parser = optional(literal("xx"));
        assert_eq!(parser.parse_text("xx").unwrap(), Some("xx"));
    }

    #[test]
    fn test_optional_failure_yields_none_unconsumed() {
        let parser = optional(literal("xx"));
        let (value, rest) = parser.parse_partial("xy").unwrap();
        assert_eq!(value, None);
        // Even though the attempt consumed an 'x' before failing, the
        // position is unchanged.
        assert_eq!(rest, "xy");
    }

    #[test]
    fn test_optional_or_default() {
        let parser = optional_or(literal("xx"), "k");
        assert_eq!(parser.parse_text("xx").unwrap(), "xx");
        assert_eq!(parser.parse_text("xy").unwrap(), "k");
    }

    #[test]
    fn test_optional_never_fails_on_empty_input() {
        let parser = literal("x").optional();
        assert_eq!(parser.parse_text("").unwrap(), None);
    }
}
