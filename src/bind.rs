use crate::cursor::TextCursor;
use crate::parser::{Parsed, Parser};

/// The monadic bind: run a parser and feed its value to a function that
/// builds the parser to continue with.
///
/// Every other sequencing combinator can be expressed through `bind`; it is
/// the one to reach for when a later parser genuinely depends on an earlier
/// value (for straight-line chains of dependent steps, see
/// [`steps`](crate::steps::steps)).
pub struct Bind<P, F> {
    parser: P,
    continuation: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, continuation: F) -> Self {
        Bind {
            parser,
            continuation,
        }
    }
}

impl<'text, P, F, Q> Parser<'text> for Bind<P, F>
where
    P: Parser<'text>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'text>,
{
    type Output = Q::Output;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.continuation)(value).parse(cursor)
    }
}

/// Convenience function to create a Bind parser
pub fn bind<'text, P, F, Q>(parser: P, continuation: F) -> Bind<P, F>
where
    P: Parser<'text>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'text>,
{
    Bind::new(parser, continuation)
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt<'text>: Parser<'text> + Sized {
    fn bind<F, Q>(self, continuation: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'text>,
    {
        Bind::new(self, continuation)
    }
}

impl<'text, P> BindExt<'text> for P where P: Parser<'text> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;
    use crate::times::count;

    #[test]
    fn test_bind_passes_value_to_continuation() {
        // The length of the first token decides how many 'y's to expect.
        let parser = literal("x").bind(|x| count(literal("y"), x.len()));

        let (values, rest) = parser.parse_partial("xyz").unwrap();
        assert_eq!(values, vec!["y"]);
        assert_eq!(rest, "z");
    }

    #[test]
    fn test_bind_first_failure_short_circuits() {
        let parser = literal("x").bind(|_| literal("y"));
        assert!(parser.parse_text("zy").is_err());
    }

    #[test]
    fn test_bind_second_failure_propagates() {
        let parser = literal("x").bind(|_| literal("y"));
        let failure = parser.parse_text("xz").unwrap_err();
        assert_eq!(failure.index(), 1);
    }

    #[test]
    fn test_bind_function_syntax() {
        let parser = bind(literal("a"), |_| literal("b"));
        assert_eq!(parser.parse_text("ab").unwrap(), "b");
    }
}
