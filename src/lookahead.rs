use crate::cursor::TextCursor;
use crate::parser::{Parsed, Parser};

/// Parser combinator that matches without consuming.
///
/// `lookahead(p)` runs `p`; on success the value is produced but the
/// position stays where it was. Failures pass through unchanged, keeping
/// their furthest-reached index.
pub struct Lookahead<P> {
    parser: P,
}

impl<P> Lookahead<P> {
    pub fn new(parser: P) -> Self {
        Lookahead { parser }
    }
}

impl<'text, P> Parser<'text> for Lookahead<P>
where
    P: Parser<'text>,
{
    type Output = P::Output;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        let (value, _) = self.parser.parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Convenience function to create a Lookahead parser
pub fn lookahead<'text, P>(parser: P) -> Lookahead<P>
where
    P: Parser<'text>,
{
    Lookahead::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;

    #[test]
    fn test_lookahead_consumes_nothing() {
        let parser = lookahead(literal("ab"));
        let (value, rest) = parser.parse_partial("abc").unwrap();
        assert_eq!(value, "ab");
        assert_eq!(rest, "abc");
    }

    #[test]
    fn test_lookahead_failure_keeps_furthest_index() {
        let parser = lookahead(literal("abc"));
        let failure = parser.parse_text("abx").unwrap_err();
        assert_eq!(failure.index(), 2);
    }
}
