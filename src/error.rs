use std::borrow::Cow;

use thiserror::Error;

/// The recoverable outcome of a parser that did not match.
///
/// Failures drive choice, repetition bounds and optional defaults inside the
/// engine and are never surfaced to entry-point callers directly. `at` is
/// the furthest index the failing parser reached, so that when several
/// alternatives fail the reported diagnostic points at the deepest attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected: {expected} at index {at}")]
pub struct Failure {
    /// Furthest byte index reached before the parser gave up.
    pub at: usize,
    /// Human-readable description of what was expected there.
    pub expected: Cow<'static, str>,
}

impl Failure {
    pub fn new(at: usize, expected: impl Into<Cow<'static, str>>) -> Self {
        Failure {
            at,
            expected: expected.into(),
        }
    }

    /// A copy of this failure reported at a different index.
    pub fn at_index(self, at: usize) -> Self {
        Failure { at, ..self }
    }
}

/// The unrecoverable failure returned by the entry points
/// ([`parse_text`](crate::Parser::parse_text),
/// [`parse_partial`](crate::Parser::parse_partial),
/// [`parse_strict`](crate::Parser::parse_strict)).
///
/// Carries the expectation, the full original text and the failure index,
/// which is enough to render a precise line/column diagnostic. The engine
/// never consumes one of these itself; callers catch it at the boundary of
/// their own parsing logic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected: {} at {}", .expected, display_location(.text, .index))]
pub struct ParseFailure {
    expected: String,
    text: String,
    index: usize,
}

impl ParseFailure {
    pub(crate) fn new(failure: Failure, text: &str) -> Self {
        ParseFailure {
            expected: failure.expected.into_owned(),
            text: text.to_owned(),
            index: failure.at,
        }
    }

    /// What the failing parser expected to find.
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// The full text that was being parsed.
    pub fn source_text(&self) -> &str {
        &self.text
    }

    /// The byte index at which parsing failed.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The `(line, column)` of the failure, both 0-based.
    pub fn locate(&self) -> (usize, usize) {
        locate(&self.text, self.index)
    }
}

/// Locate `index` in `text` as a 0-based `(line, column)` pair.
///
/// The line is the number of newline characters before `index`; the column
/// counts characters since the last newline (simple character counting, no
/// width arithmetic).
///
/// # Panics
///
/// Panics if `index` is past the end of `text`. An out-of-range index is a
/// programmer error, not a parse failure.
pub fn locate(text: &str, index: usize) -> (usize, usize) {
    assert!(
        index <= text.len(),
        "index {index} is out of bounds for text of length {}",
        text.len()
    );
    let before = &text[..index];
    let line = before.matches('\n').count();
    let column = match before.rfind('\n') {
        Some(newline) => before[newline + 1..].chars().count(),
        None => before.chars().count(),
    };
    (line, column)
}

fn display_location(text: &str, index: &usize) -> String {
    let (line, column) = locate(text, *index);
    format!("{line},{column}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_first_line() {
        assert_eq!(locate("hello", 0), (0, 0));
        assert_eq!(locate("hello", 3), (0, 3));
        assert_eq!(locate("hello", 5), (0, 5));
    }

    #[test]
    fn test_locate_later_lines() {
        let text = "one\ntwo\nthree";
        assert_eq!(locate(text, 4), (1, 0));
        assert_eq!(locate(text, 6), (1, 2));
        assert_eq!(locate(text, 8), (2, 0));
        assert_eq!(locate(text, 13), (2, 5));
    }

    #[test]
    fn test_locate_at_newline() {
        // The newline itself still belongs to the line it terminates.
        assert_eq!(locate("ab\ncd", 2), (0, 2));
        assert_eq!(locate("ab\ncd", 3), (1, 0));
    }

    #[test]
    fn test_locate_counts_characters_not_bytes() {
        let text = "ñ中x";
        assert_eq!(locate(text, 5), (0, 2));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_locate_out_of_range_panics() {
        locate("abc", 4);
    }

    #[test]
    fn test_failure_at_index() {
        let failure = Failure::new(7, "a digit");
        let moved = failure.clone().at_index(0);
        assert_eq!(moved.at, 0);
        assert_eq!(moved.expected, failure.expected);
    }

    #[test]
    fn test_parse_failure_display() {
        let failure = ParseFailure::new(Failure::new(6, "a digit"), "ab\ncdef");
        assert_eq!(failure.to_string(), "expected: a digit at 1,3");
        assert_eq!(failure.locate(), (1, 3));
        assert_eq!(failure.expected(), "a digit");
        assert_eq!(failure.source_text(), "ab\ncdef");
        assert_eq!(failure.index(), 6);
    }
}
