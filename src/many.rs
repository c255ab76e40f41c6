use crate::parser::Parser;
use crate::times::Times;

/// Repeat a parser zero or more times, matching as much as it can.
///
/// Equivalent to unbounded [`Times`] with a minimum of zero; inherits its
/// zero-width-match guard, so `many` over a parser that can succeed
/// without consuming terminates instead of looping forever.
pub fn many<'text, P>(parser: P) -> Times<P>
where
    P: Parser<'text>,
{
    Times::new(parser, 0, None)
}

/// Repeat a parser one or more times, matching as much as it can.
pub fn many1<'text, P>(parser: P) -> Times<P>
where
    P: Parser<'text>,
{
    Times::new(parser, 1, None)
}
