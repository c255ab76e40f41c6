use crate::cursor::TextCursor;
use crate::error::Failure;
use crate::parser::{Parsed, Parser};

/// Parser combinator that repeats a parser between `min` and `max` times,
/// collecting the produced values.
///
/// Repetition stops when `max` values are collected or the inner parser
/// fails; a failure before `min` successes fails the whole combinator with
/// the inner parser's failure. Two guards keep the loop honest:
///
/// - With an unbounded `max`, a success that consumes nothing terminates
///   the loop immediately (without collecting the value) instead of
///   spinning forever.
/// - When the position reaches end of input before `min`, the inner parser
///   is probed once more; if the probe fails without consuming, the
///   combinator fails with an end-of-input expectation. Any other probe
///   outcome lets the loop continue, so zero-width element parsers can
///   still satisfy `min` at the end of the text.
///
/// The loop is iterative: recursion depth does not grow with the
/// repetition count.
pub struct Times<P> {
    parser: P,
    min: usize,
    max: Option<usize>,
}

impl<P> Times<P> {
    /// `max` of `None` means unbounded.
    pub fn new(parser: P, min: usize, max: Option<usize>) -> Self {
        debug_assert!(max.is_none_or(|max| min <= max), "min must not exceed max");
        Times { parser, min, max }
    }
}

impl<'text, P> Parser<'text> for Times<P>
where
    P: Parser<'text>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, start: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        let mut values = Vec::new();
        let mut cursor = start;

        loop {
            if self.max.is_some_and(|max| values.len() >= max) {
                break;
            }

            match self.parser.parse(cursor) {
                Ok((value, next)) => {
                    if self.max.is_none() && next.position() == cursor.position() {
                        // Zero-width match under unbounded repetition.
                        break;
                    }
                    values.push(value);
                    cursor = next;
                }
                Err(failure) => {
                    if values.len() >= self.min {
                        break;
                    }
                    return Err(failure);
                }
            }

            if self.max.is_some_and(|max| values.len() >= max) {
                break;
            }

            if cursor.eos() {
                if values.len() >= self.min {
                    break;
                }
                // One probe decides whether looping at the end can still
                // make progress towards `min`.
                if let Err(failure) = self.parser.parse(cursor) {
                    if failure.at == cursor.position() {
                        return Err(Failure::new(cursor.position(), "more input"));
                    }
                }
            }
        }

        Ok((values, cursor))
    }
}

/// Repeat `parser` between `min` and `max` times (both inclusive).
pub fn times<'text, P>(parser: P, min: usize, max: usize) -> Times<P>
where
    P: Parser<'text>,
{
    Times::new(parser, min, Some(max))
}

/// Repeat `parser` exactly `n` times.
pub fn count<'text, P>(parser: P, n: usize) -> Times<P>
where
    P: Parser<'text>,
{
    Times::new(parser, n, Some(n))
}
