use crate::cursor::TextCursor;
use crate::parser::{Parsed, Parser};

/// Parser combinator implementing choice with backtracking.
///
/// `or_backtrack(p, q)` first applies `p`; on success its result is
/// returned. On *any* failure — regardless of how much input `p` consumed —
/// `q` is retried from the original starting position. More expensive than
/// [`or`](crate::or::or) but grammar-agnostic.
pub struct OrBacktrack<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> OrBacktrack<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        OrBacktrack { parser1, parser2 }
    }
}

impl<'text, P1, P2, O> Parser<'text> for OrBacktrack<P1, P2>
where
    P1: Parser<'text, Output = O>,
    P2: Parser<'text, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        match self.parser1.parse(cursor) {
            Ok(result) => Ok(result),
            Err(_) => self.parser2.parse(cursor),
        }
    }
}

/// Convenience function to create an OrBacktrack parser
pub fn or_backtrack<'text, P1, P2, O>(parser1: P1, parser2: P2) -> OrBacktrack<P1, P2>
where
    P1: Parser<'text, Output = O>,
    P2: Parser<'text, Output = O>,
{
    OrBacktrack::new(parser1, parser2)
}

/// Extension trait to add .or_backtrack() method support for parsers
pub trait OrBacktrackExt<'text>: Parser<'text> + Sized {
    fn or_backtrack<P>(self, other: P) -> OrBacktrack<Self, P>
    where
        P: Parser<'text, Output = Self::Output>,
    {
        OrBacktrack::new(self, other)
    }
}

impl<'text, P> OrBacktrackExt<'text> for P where P: Parser<'text> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;

    #[test]
    fn test_or_backtrack_first_succeeds() {
        let parser = literal("x").or_backtrack(literal("y"));
        assert_eq!(parser.parse_text("x").unwrap(), "x");
    }

    #[test]
    fn test_or_backtrack_retries_after_consumption() {
        let parser = literal("xy").or_backtrack(literal("xz"));
        assert_eq!(parser.parse_text("xy").unwrap(), "xy");
        assert_eq!(parser.parse_text("xz").unwrap(), "xz");
    }

    #[test]
    fn test_or_backtrack_both_fail() {
        let parser = literal("x").or_backtrack(literal("y"));
        assert!(parser.parse_text("z").is_err());
    }

    #[test]
    fn test_or_backtrack_function_syntax() {
        let parser = or_backtrack(literal("ab"), literal("ac"));
        assert_eq!(parser.parse_text("ac").unwrap(), "ac");
    }
}
