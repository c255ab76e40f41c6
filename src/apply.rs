use crate::cursor::TextCursor;
use crate::parser::{Parsed, Parser};

/// Parser combinator for function application lifted into the parser
/// context: run a parser that produces a function, run a parser that
/// produces an argument, and apply one to the other.
pub struct Apply<PF, PA> {
    function: PF,
    argument: PA,
}

impl<PF, PA> Apply<PF, PA> {
    pub fn new(function: PF, argument: PA) -> Self {
        Apply { function, argument }
    }
}

impl<'text, PF, PA, F, U> Parser<'text> for Apply<PF, PA>
where
    PF: Parser<'text, Output = F>,
    PA: Parser<'text>,
    F: FnOnce(PA::Output) -> U,
{
    type Output = U;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        let (function, cursor) = self.function.parse(cursor)?;
        let (argument, cursor) = self.argument.parse(cursor)?;
        Ok((function(argument), cursor))
    }
}

/// Convenience function to create an Apply parser
pub fn apply<'text, PF, PA, F, U>(function: PF, argument: PA) -> Apply<PF, PA>
where
    PF: Parser<'text, Output = F>,
    PA: Parser<'text>,
    F: FnOnce(PA::Output) -> U,
{
    Apply::new(function, argument)
}

/// Extension trait to add .apply() method support for parsers
pub trait ApplyExt<'text>: Parser<'text> + Sized {
    fn apply<PA, U>(self, argument: PA) -> Apply<Self, PA>
    where
        PA: Parser<'text>,
        Self::Output: FnOnce(PA::Output) -> U,
    {
        Apply::new(self, argument)
    }
}

impl<'text, P> ApplyExt<'text> for P where P: Parser<'text> {}
