use crate::parser::Parser;
use crate::reader::Reader;
use crate::result::{Failure, ParseResult, Parsed};
use std::borrow::Cow;

/// Parser combinator that performs negative lookahead.
///
/// Succeeds with `()` and consumes nothing if the inner parser fails at
/// the current position. If the inner parser succeeds, the negation fails
/// with a message naming what unexpectedly matched, inheriting the
/// successful result's `can_backtrack` flag; the reader is left where the
/// unexpected match ended, for the enclosing choice to rewind.
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<'src, P> Parser<'src> for Not<P>
where
    P: Parser<'src>,
{
    type Output = ();

    fn parse(&self, reader: &mut Reader<'src>) -> ParseResult<'src, ()> {
        let mut guard = reader.mark();
        match self.parser.parse(guard.reader()) {
            Ok(parsed) => Err(Failure::new(
                guard.reader().source(),
                format!("unexpected {}", self.parser.describe()),
                parsed.start,
            )
            .with_backtrack(parsed.can_backtrack)),
            Err(_) => {
                guard.reset();
                let position = guard.reader().position();
                Ok(Parsed::new((), position, position))
            }
        }
    }

    fn describe(&self) -> Cow<'static, str> {
        Cow::Owned(format!("anything but {}", self.parser.describe()))
    }
}

/// Convenience function to create a Not parser for negative lookahead
pub fn not<'src, P>(parser: P) -> Not<P>
where
    P: Parser<'src>,
{
    Not::new(parser)
}

/// Extension trait to add .not() method support for parsers
pub trait NotExt<'src>: Parser<'src> + Sized {
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

/// Implement NotExt for all parsers
impl<'src, P> NotExt<'src> for P where P: Parser<'src> {}
