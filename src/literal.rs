use std::borrow::Cow;

use crate::cursor::TextCursor;
use crate::error::Failure;
use crate::parser::{Parsed, Parser};

/// Parser that matches an exact string and produces the matched slice of
/// the input.
///
/// On failure the reported index is the first *mismatching* character, not
/// the start of the attempt, so diagnostics point at the exact divergence.
/// This also means a partial match counts as consumption for
/// [`or`](crate::or::or)'s commit rule.
pub struct Literal {
    expected: Cow<'static, str>,
}

impl Literal {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Literal {
            expected: expected.into(),
        }
    }
}

impl<'text> Parser<'text> for Literal {
    type Output = &'text str;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        let rest = cursor.rest();
        if rest.starts_with(self.expected.as_ref()) {
            let matched = &rest[..self.expected.len()];
            Ok((matched, cursor.advance(self.expected.len())))
        } else {
            let matched = common_prefix_bytes(rest, &self.expected);
            Err(Failure::new(
                cursor.position() + matched,
                self.expected.clone(),
            ))
        }
    }
}

/// Length in bytes of the longest common character prefix of `a` and `b`.
fn common_prefix_bytes(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| x.len_utf8())
        .sum()
}

/// Convenience function to create a Literal parser
pub fn literal(expected: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_matches_exactly() {
        let parser = literal("hello");
        let (value, rest) = parser.parse_partial("hello world").unwrap();
        assert_eq!(value, "hello");
        assert_eq!(rest, " world");
    }

    #[test]
    fn test_literal_failure_at_first_mismatch() {
        let parser = literal("abc");
        let failure = parser.parse_text("abx").unwrap_err();
        assert_eq!(failure.index(), 2);
        assert_eq!(failure.expected(), "abc");
    }

    #[test]
    fn test_literal_failure_with_no_common_prefix() {
        let parser = literal("abc");
        let failure = parser.parse_text("xbc").unwrap_err();
        assert_eq!(failure.index(), 0);
    }

    #[test]
    fn test_literal_truncated_input() {
        let parser = literal("abcdef");
        let failure = parser.parse_text("abc").unwrap_err();
        assert_eq!(failure.index(), 3);
    }

    #[test]
    fn test_literal_empty_matches_anywhere() {
        let parser = literal("");
        let (value, rest) = parser.parse_partial("xyz").unwrap();
        assert_eq!(value, "");
        assert_eq!(rest, "xyz");
    }

    #[test]
    fn test_literal_multibyte() {
        let parser = literal("中文");
        assert_eq!(parser.parse_text("中文").unwrap(), "中文");

        let failure = parser.parse_text("中x").unwrap_err();
        assert_eq!(failure.index(), 3);
    }

    #[test]
    fn test_literal_owned_string() {
        let parser = literal(String::from("dyn"));
        assert_eq!(parser.parse_text("dynamic").unwrap(), "dyn");
    }
}
