use std::cell::OnceCell;
use std::rc::Rc;

use crate::cursor::TextCursor;
use crate::parser::{Parsed, Parser};

type BodyCell<'text, T> = Rc<OnceCell<Rc<dyn Parser<'text, Output = T> + 'text>>>;

/// A reference to a parser that is being (or has been) defined in terms of
/// itself. Produced by [`fix`]; cloning it inside the builder is how the
/// grammar refers to itself.
///
/// The reference reads through a lazily-initialized cell at *invocation*
/// time, never at construction time, so building the recursive body does
/// not recurse.
pub struct FixRef<'text, T> {
    cell: BodyCell<'text, T>,
}

impl<'text, T> Clone for FixRef<'text, T> {
    fn clone(&self) -> Self {
        FixRef {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<'text, T> Parser<'text> for FixRef<'text, T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if invoked before [`fix`] has finished building the parser —
    /// that is, if the builder itself tries to parse with the reference it
    /// was handed. Recursion must happen against real input, not during
    /// construction.
    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        match self.cell.get() {
            Some(parser) => parser.parse(cursor),
            None => panic!("recursive parser invoked before fix() finished building it"),
        }
    }
}

/// Build a self-referential parser for a recursive grammar.
///
/// The builder receives a [`FixRef`] standing for the parser being defined
/// and returns the parser body; recursive positions in the body use clones
/// of the reference. No forward-declare/assign two-step is needed:
///
/// ```
/// use textcomb::{any_char, fix, literal, or, then, Parser, SkipExt};
///
/// // expr := "(" expr ")" | any character
/// let expr = fix(|expr| or(then(literal("("), expr.clone().skip(literal(")"))), any_char()));
/// assert_eq!(expr.parse_text("((x))").unwrap(), 'x');
/// ```
///
/// Recursion depth is bounded only by the host call stack; a grammar that
/// recurses without consuming input (left recursion) will overflow it.
pub fn fix<'text, T, P, F>(build: F) -> FixRef<'text, T>
where
    P: Parser<'text, Output = T> + 'text,
    F: FnOnce(FixRef<'text, T>) -> P,
{
    let cell: BodyCell<'text, T> = Rc::new(OnceCell::new());
    let reference = FixRef {
        cell: Rc::clone(&cell),
    };
    let body = build(reference);
    // The cell was created empty above, so this set cannot be rejected.
    let _ = cell.set(Rc::new(body));
    FixRef { cell }
}
