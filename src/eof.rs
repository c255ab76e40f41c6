use crate::cursor::TextCursor;
use crate::error::Failure;
use crate::parser::{Parsed, Parser};

/// Parser that succeeds with no value exactly at end of input.
pub struct Eof;

impl<'text> Parser<'text> for Eof {
    type Output = ();

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        if cursor.eos() {
            Ok(((), cursor))
        } else {
            Err(Failure::new(cursor.position(), "end of input"))
        }
    }
}

/// Convenience function to create an Eof parser
pub fn eof() -> Eof {
    Eof
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;
    use crate::skip::SkipExt;

    #[test]
    fn test_eof_at_end() {
        assert_eq!(eof().parse_text("").unwrap(), ());
    }

    #[test]
    fn test_eof_before_end() {
        let failure = eof().parse_text("x").unwrap_err();
        assert_eq!(failure.expected(), "end of input");
        assert_eq!(failure.index(), 0);
    }

    #[test]
    fn test_eof_as_terminator() {
        let parser = literal("done").skip(eof());
        assert_eq!(parser.parse_text("done").unwrap(), "done");
        assert!(parser.parse_text("donex").is_err());
    }
}
