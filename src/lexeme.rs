use crate::cursor::TextCursor;
use crate::parser::{Parsed, Parser};

/// Parser combinator that consumes trailing whitespace after a match.
///
/// The standard tokenizing wrapper: build every token-level parser as a
/// lexeme and composed grammars never need to mention whitespace between
/// tokens. Equivalent to `skip(p, many(space()))`.
pub struct Lexeme<P> {
    parser: P,
}

impl<P> Lexeme<P> {
    pub fn new(parser: P) -> Self {
        Lexeme { parser }
    }
}

impl<'text, P> Parser<'text> for Lexeme<P>
where
    P: Parser<'text>,
{
    type Output = P::Output;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        let (value, mut cursor) = self.parser.parse(cursor)?;
        while cursor.value().is_some_and(char::is_whitespace) {
            cursor = cursor.next();
        }
        Ok((value, cursor))
    }
}

/// Convenience function to create a Lexeme parser
pub fn lexeme<'text, P>(parser: P) -> Lexeme<P>
where
    P: Parser<'text>,
{
    Lexeme::new(parser)
}

/// Extension trait to add .lexeme() method support for parsers
pub trait LexemeExt<'text>: Parser<'text> + Sized {
    fn lexeme(self) -> Lexeme<Self> {
        Lexeme::new(self)
    }
}

impl<'text, P> LexemeExt<'text> for P where P: Parser<'text> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;
    use crate::many::many1;

    #[test]
    fn test_lexeme_consumes_trailing_whitespace() {
        let parser = literal("let").lexeme();
        let (value, rest) = parser.parse_partial("let   x").unwrap();
        assert_eq!(value, "let");
        assert_eq!(rest, "x");
    }

    #[test]
    fn test_lexeme_without_trailing_whitespace() {
        let parser = literal("let").lexeme();
        let (value, rest) = parser.parse_partial("letx").unwrap();
        assert_eq!(value, "let");
        assert_eq!(rest, "x");
    }

    #[test]
    fn test_lexeme_failure_passes_through() {
        let parser = lexeme(literal("let"));
        assert!(parser.parse_text("fn ").is_err());
    }

    #[test]
    fn test_lexeme_composed_grammar_ignores_gaps() {
        let word = many1(crate::letter::letter()).lexeme();
        let pair = crate::and::and(word, many1(crate::letter::letter()));
        let ((first, second), _) = pair.parse_partial("hello   world").unwrap();
        assert_eq!(first.len(), 5);
        assert_eq!(second.len(), 5);
    }
}
