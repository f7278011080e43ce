use crate::parser::Parser;
use crate::reader::Reader;
use crate::result::{ParseResult, Parsed};
use std::borrow::Cow;

/// Parser combinator that replaces the inner parser's output with the
/// exact substring it consumed.
///
/// The output borrows from the source, so no text is copied. Whatever the
/// inner parser produces is discarded; only its span and `can_backtrack`
/// flag carry through. On failure the reader stays where the inner parser
/// stopped.
pub struct Capture<P> {
    parser: P,
}

impl<P> Capture<P> {
    pub fn new(parser: P) -> Self {
        Capture { parser }
    }
}

impl<'src, P> Parser<'src> for Capture<P>
where
    P: Parser<'src>,
{
    type Output = &'src str;

    fn parse(&self, reader: &mut Reader<'src>) -> ParseResult<'src, &'src str> {
        let mut guard = reader.mark();
        let parsed = self.parser.parse(guard.reader())?;
        let text = guard.captured();
        Ok(Parsed::new(text, parsed.start, parsed.end).with_backtrack(parsed.can_backtrack))
    }

    fn describe(&self) -> Cow<'static, str> {
        self.parser.describe()
    }
}

/// Extension trait to add .capture() method support for parsers
pub trait CaptureExt<'src>: Parser<'src> + Sized {
    fn capture(self) -> Capture<Self> {
        Capture::new(self)
    }
}

/// Implement CaptureExt for all parsers
impl<'src, P> CaptureExt<'src> for P where P: Parser<'src> {}

/// Convenience function to create a Capture parser
pub fn capture<'src, P>(parser: P) -> Capture<P>
where
    P: Parser<'src>,
{
    Capture::new(parser)
}
