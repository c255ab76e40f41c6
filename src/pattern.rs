use regex::Regex;

use crate::cursor::TextCursor;
use crate::error::Failure;
use crate::parser::{Parsed, Parser};

/// Parser that matches a regular expression anchored at the current
/// position and produces the matched slice of the input.
///
/// The match must begin exactly at the cursor; a match further into the
/// remainder does not count. On failure the expectation is the pattern's
/// source text. Build one once and share it — the compiled program lives
/// in the parser value, not in any global state.
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Wrap an already-compiled regular expression.
    pub fn new(regex: Regex) -> Self {
        Pattern { regex }
    }
}

impl<'text> Parser<'text> for Pattern {
    type Output = &'text str;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        let rest = cursor.rest();
        match self.regex.find(rest) {
            Some(found) if found.start() == 0 => {
                Ok((&rest[..found.end()], cursor.advance(found.end())))
            }
            _ => Err(Failure::new(
                cursor.position(),
                self.regex.as_str().to_owned(),
            )),
        }
    }
}

/// Compile `expression` into a [`Pattern`] parser.
///
/// # Panics
///
/// Panics if `expression` is not a valid regular expression — an invalid
/// pattern is a programmer error, not a parse failure. Use
/// [`Pattern::new`] with a pre-built [`Regex`] to handle compilation
/// errors explicitly.
pub fn pattern(expression: &str) -> Pattern {
    match Regex::new(expression) {
        Ok(regex) => Pattern::new(regex),
        Err(error) => panic!("invalid pattern {expression:?}: {error}"),
    }
}
