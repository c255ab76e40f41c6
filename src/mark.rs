use crate::cursor::TextCursor;
use crate::error::locate;
use crate::parser::{Parsed, Parser};

/// Parser combinator that tags a successful parse with its location.
///
/// `mark(p)` produces `(start, value, end)` where `start` and `end` are
/// 0-based `(line, column)` pairs for the match boundaries — useful for
/// diagnostics and AST location tagging. The positions are computed on
/// demand from the source text; nothing is stored persistently.
pub struct Mark<P> {
    parser: P,
}

impl<P> Mark<P> {
    pub fn new(parser: P) -> Self {
        Mark { parser }
    }
}

impl<'text, P> Parser<'text> for Mark<P>
where
    P: Parser<'text>,
{
    type Output = ((usize, usize), P::Output, (usize, usize));

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        let start = locate(cursor.source(), cursor.position());
        let (value, cursor) = self.parser.parse(cursor)?;
        let end = locate(cursor.source(), cursor.position());
        Ok(((start, value, end), cursor))
    }
}

/// Convenience function to create a Mark parser
pub fn mark<'text, P>(parser: P) -> Mark<P>
where
    P: Parser<'text>,
{
    Mark::new(parser)
}

/// Extension trait to add .mark() method support for parsers
pub trait MarkExt<'text>: Parser<'text> + Sized {
    fn mark(self) -> Mark<Self> {
        Mark::new(self)
    }
}

impl<'text, P> MarkExt<'text> for P where P: Parser<'text> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letter::letter;
    use crate::literal::literal;
    use crate::many::many;
    use crate::skip::SkipExt;

    #[test]
    fn test_mark_single_line() {
        let parser = mark(literal("ab"));
        let ((start, value, end), rest) = parser.parse_partial("abc").unwrap();
        assert_eq!(start, (0, 0));
        assert_eq!(value, "ab");
        assert_eq!(end, (0, 2));
        assert_eq!(rest, "c");
    }

    #[test]
    fn test_mark_across_lines() {
        let parser = many(mark(many(letter())).skip(literal("\n")));
        let lines = parser.parse_text("asdf\nqwer\n").unwrap();
        assert_eq!(lines.len(), 2);

        let (start, letters, end) = &lines[0];
        assert_eq!(*start, (0, 0));
        assert_eq!(*letters, vec!['a', 's', 'd', 'f']);
        assert_eq!(*end, (0, 4));

        let (start, letters, end) = &lines[1];
        assert_eq!(*start, (1, 0));
        assert_eq!(*letters, vec!['q', 'w', 'e', 'r']);
        assert_eq!(*end, (1, 4));
    }

    #[test]
    fn test_mark_failure_passes_through() {
        let parser = literal("x").mark();
        assert!(parser.parse_text("y").is_err());
    }
}
