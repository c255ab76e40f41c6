use crate::cursor::TextCursor;
use crate::parser::{Parsed, Parser};

/// What to make of a separator after the final element of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trailing {
    /// A trailing separator may be present; if it is, it belongs to the
    /// list (the reported position moves past it).
    Optional,
    /// Every element must be followed by a separator; an element whose
    /// separator is missing is not part of the list.
    Required,
    /// A trailing separator is never credited to the list: the reported
    /// position stays at the end of the last element even when a further
    /// separator had to be consumed to keep looping.
    Forbidden,
}

/// Parser combinator for lists of elements separated by a separator, with
/// an explicit trailing-separator policy and `min`/`max` element bounds.
///
/// The loop maintains a *stable snapshot* — the last `(position, values)`
/// pair known to be valid under the policy — and reports it whenever the
/// list ends, so that a dangling element or separator the policy rejects
/// is handed back to the caller unconsumed:
///
/// - element fails before `min` elements: the element's failure;
/// - element fails at or past `min`: the snapshot so far;
/// - separator fails below `min`, or exactly at `min` under `Required`:
///   the separator's failure;
/// - separator fails otherwise: under `Required` the just-parsed element
///   is dropped (its required terminator is missing) and the previous
///   snapshot returned; under `Optional`/`Forbidden` the element is kept
///   and the position is its end;
/// - separator succeeds: looping continues, and the snapshot moves past
///   the separator only under `Optional`/`Required`.
///
/// Like [`Times`](crate::times::Times), the loop is iterative.
pub struct Separated<P, S> {
    parser: P,
    separator: S,
    min: usize,
    max: Option<usize>,
    trailing: Trailing,
}

impl<P, S> Separated<P, S> {
    /// `max` of `None` means unbounded.
    pub fn new(parser: P, separator: S, min: usize, max: Option<usize>, trailing: Trailing) -> Self {
        debug_assert!(max.is_none_or(|max| min <= max), "min must not exceed max");
        Separated {
            parser,
            separator,
            min,
            max,
            trailing,
        }
    }
}

impl<'text, P, S> Parser<'text> for Separated<P, S>
where
    P: Parser<'text>,
    S: Parser<'text>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, start: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        let mut values = Vec::new();
        let mut stable = start;
        let mut cursor = start;

        loop {
            if self.max.is_some_and(|max| values.len() >= max) {
                break;
            }

            let (value, after_element) = match self.parser.parse(cursor) {
                Ok(ok) => ok,
                Err(failure) => {
                    if values.len() < self.min {
                        return Err(failure);
                    }
                    return Ok((values, stable));
                }
            };
            cursor = after_element;
            // Where this element would leave the list if it turns out to
            // be the last one; a consumed separator extends it under the
            // policies that credit separators to the list.
            let mut snapshot = after_element;
            let count = values.len() + 1;

            match self.separator.parse(cursor) {
                Ok((_, after_separator)) => {
                    cursor = after_separator;
                    if matches!(self.trailing, Trailing::Optional | Trailing::Required) {
                        snapshot = after_separator;
                    }
                }
                Err(failure) => {
                    if count < self.min
                        || (count == self.min && self.trailing == Trailing::Required)
                    {
                        return Err(failure);
                    }
                    if self.trailing == Trailing::Required {
                        // The element's required terminator is missing, so
                        // the element is dropped.
                        return Ok((values, stable));
                    }
                    values.push(value);
                    return Ok((values, snapshot));
                }
            }

            stable = snapshot;
            values.push(value);
        }

        Ok((values, stable))
    }
}

/// Elements separated by `min`..=`max` occurrences under `trailing` policy.
pub fn separated<'text, P, S>(
    parser: P,
    separator: S,
    min: usize,
    max: usize,
    trailing: Trailing,
) -> Separated<P, S>
where
    P: Parser<'text>,
    S: Parser<'text>,
{
    Separated::new(parser, separator, min, Some(max), trailing)
}

/// Zero or more `parser` separated by `separator`; no trailing separator.
pub fn sep_by<'text, P, S>(parser: P, separator: S) -> Separated<P, S>
where
    P: Parser<'text>,
    S: Parser<'text>,
{
    Separated::new(parser, separator, 0, None, Trailing::Forbidden)
}

/// One or more `parser` separated by `separator`; no trailing separator.
pub fn sep_by1<'text, P, S>(parser: P, separator: S) -> Separated<P, S>
where
    P: Parser<'text>,
    S: Parser<'text>,
{
    Separated::new(parser, separator, 1, None, Trailing::Forbidden)
}

/// Zero or more `parser`, each followed by `separator`.
pub fn end_by<'text, P, S>(parser: P, separator: S) -> Separated<P, S>
where
    P: Parser<'text>,
    S: Parser<'text>,
{
    Separated::new(parser, separator, 0, None, Trailing::Required)
}

/// One or more `parser`, each followed by `separator`.
pub fn end_by1<'text, P, S>(parser: P, separator: S) -> Separated<P, S>
where
    P: Parser<'text>,
    S: Parser<'text>,
{
    Separated::new(parser, separator, 1, None, Trailing::Required)
}

/// Zero or more `parser` separated and optionally ended by `separator`.
pub fn sep_end_by<'text, P, S>(parser: P, separator: S) -> Separated<P, S>
where
    P: Parser<'text>,
    S: Parser<'text>,
{
    Separated::new(parser, separator, 0, None, Trailing::Optional)
}

/// One or more `parser` separated and optionally ended by `separator`.
pub fn sep_end_by1<'text, P, S>(parser: P, separator: S) -> Separated<P, S>
where
    P: Parser<'text>,
    S: Parser<'text>,
{
    Separated::new(parser, separator, 1, None, Trailing::Optional)
}
