use std::borrow::Cow;

use crate::cursor::TextCursor;
use crate::error::Failure;
use crate::parser::{Parsed, Parser};

/// Driver state for a [`Steps`] body: the current position threaded through
/// an ordered sequence of dependent sub-parses.
pub struct StepRunner<'text> {
    cursor: TextCursor<'text>,
}

impl<'text> StepRunner<'text> {
    /// Execute one step from the current position.
    ///
    /// Advances only on success and returns the step's value; on failure
    /// the position is untouched and the failure is handed back for the
    /// body to propagate with `?`.
    pub fn run<P>(&mut self, parser: P) -> Result<P::Output, Failure>
    where
        P: Parser<'text>,
    {
        let (value, cursor) = parser.parse(self.cursor)?;
        self.cursor = cursor;
        Ok(value)
    }

    /// The current byte index into the text.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

/// A parser written as straight-line code: an ordered series of dependent
/// steps instead of nested combinator calls.
///
/// The body receives a [`StepRunner`] and calls [`run`](StepRunner::run)
/// for each step, so each step's parser can be computed from the values of
/// the previous ones. A failed step aborts the whole sequence — the `?`
/// operator guarantees no later step executes — and the sequence finishes
/// by returning `Ok(value)` (wrapped into a success at the current
/// position) or by running one final parser whose result propagates as-is.
/// Finishing and failing are distinct `Result` arms and cannot be
/// confused.
///
/// ```
/// use textcomb::{literal, many1, digit, steps, Parser};
///
/// let pair = steps(|s| {
///     let key = s.run(many1(digit()))?;
///     s.run(literal("="))?;
///     let value = s.run(many1(digit()))?;
///     Ok((key, value))
/// });
/// assert!(pair.parse_text("12=34").is_ok());
/// ```
pub struct Steps<F> {
    body: F,
    description: Option<Cow<'static, str>>,
}

impl<F> Steps<F> {
    pub fn new(body: F, description: Option<Cow<'static, str>>) -> Self {
        Steps { body, description }
    }
}

impl<'text, F, T> Parser<'text> for Steps<F>
where
    F: Fn(&mut StepRunner<'text>) -> Result<T, Failure>,
{
    type Output = T;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        let start = cursor.position();
        let mut runner = StepRunner { cursor };
        match (self.body)(&mut runner) {
            Ok(value) => Ok((value, runner.cursor)),
            Err(failure) => match &self.description {
                Some(description) if failure.at == start => {
                    Err(Failure::new(start, description.clone()))
                }
                _ => Err(failure),
            },
        }
    }
}

/// Convenience function to create a Steps parser
pub fn steps<'text, F, T>(body: F) -> Steps<F>
where
    F: Fn(&mut StepRunner<'text>) -> Result<T, Failure>,
{
    Steps::new(body, None)
}

/// A [`Steps`] parser with an attached description: a failure that
/// consumed nothing from the sequence's starting position is re-labeled
/// with it.
pub fn steps_named<'text, F, T>(description: impl Into<Cow<'static, str>>, body: F) -> Steps<F>
where
    F: Fn(&mut StepRunner<'text>) -> Result<T, Failure>,
{
    Steps::new(body, Some(description.into()))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::digit::digit;
    use crate::literal::literal;
    use crate::many::many1;
    use crate::one_of::one_of;
    use crate::or::OrExt;
    use crate::times::count;

    #[test]
    fn test_steps_dependent_parsing() {
        // The digit decides how many letters follow it.
        let parser = steps(|s| {
            let n = s.run(digit())?;
            let width = n.to_digit(10).unwrap() as usize;
            s.run(count(one_of("abc"), width))
        });

        assert_eq!(parser.parse_text("2ab").unwrap(), vec!['a', 'b']);
        assert_eq!(parser.parse_text("3abc").unwrap(), vec!['a', 'b', 'c']);
        assert!(parser.parse_text("3ab").is_err());
    }

    #[test]
    fn test_steps_final_value() {
        let parser = steps(|s| {
            s.run(literal("x"))?;
            let ys = s.run(many1(literal("y")))?;
            Ok(ys.len())
        });

        assert_eq!(parser.parse_text("xyy").unwrap(), 2);
    }

    #[test]
    fn test_steps_aborts_on_first_failure() {
        let reached_second_step = Cell::new(false);
        let parser = steps(|s| {
            s.run(literal("x"))?;
            reached_second_step.set(true);
            s.run(literal("y"))
        });

        assert!(parser.parse_text("zy").is_err());
        assert!(!reached_second_step.get());
    }

    #[test]
    fn test_steps_in_choice_after_clean_failure() {
        let parser = steps(|s| {
            s.run(literal("x"))?;
            s.run(literal("y"))
        })
        .or(literal("z"));

        assert_eq!(parser.parse_text("z").unwrap(), "z");
    }

    #[test]
    fn test_steps_named_relabels_clean_failure() {
        let parser = steps_named("a key-value pair", |s| {
            let key = s.run(many1(digit()))?;
            s.run(literal("="))?;
            let value = s.run(many1(digit()))?;
            Ok((key, value))
        });

        let failure = parser.parse_text("x").unwrap_err();
        assert_eq!(failure.expected(), "a key-value pair");
        assert_eq!(failure.index(), 0);

        // A failure after consumption keeps the precise expectation.
        let failure = parser.parse_text("12x").unwrap_err();
        assert_eq!(failure.expected(), "=");
        assert_eq!(failure.index(), 2);
    }

    #[test]
    fn test_steps_failure_position_is_furthest() {
        let parser = steps(|s| {
            s.run(literal("ab"))?;
            s.run(literal("cd"))
        });

        let failure = parser.parse_text("abcx").unwrap_err();
        assert_eq!(failure.index(), 3);
    }
}
