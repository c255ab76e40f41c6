use crate::cursor::TextCursor;
use crate::parser::{Parsed, Parser};

/// Parser that matches content between opening and closing delimiters,
/// returning just the content value with the delimiters discarded.
///
/// Does not handle whitespace automatically; wrap the pieces in
/// [`lexeme`](crate::lexeme::lexeme) for that.
pub struct Between<POpen, P, PClose> {
    open: POpen,
    content: P,
    close: PClose,
}

impl<POpen, P, PClose> Between<POpen, P, PClose> {
    pub fn new(open: POpen, content: P, close: PClose) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'text, POpen, P, PClose> Parser<'text> for Between<POpen, P, PClose>
where
    POpen: Parser<'text>,
    P: Parser<'text>,
    PClose: Parser<'text>,
{
    type Output = P::Output;

    fn parse(&self, cursor: TextCursor<'text>) -> Parsed<'text, Self::Output> {
        let (_, cursor) = self.open.parse(cursor)?;
        let (value, cursor) = self.content.parse(cursor)?;
        let (_, cursor) = self.close.parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Creates a parser that matches content between opening and closing
/// delimiters
pub fn between<'text, POpen, P, PClose>(
    open: POpen,
    content: P,
    close: PClose,
) -> Between<POpen, P, PClose>
where
    POpen: Parser<'text>,
    P: Parser<'text>,
    PClose: Parser<'text>,
{
    Between::new(open, content, close)
}
