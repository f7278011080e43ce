use crate::char_class::CharClass;
use crate::parser::Parser;
use crate::reader::Reader;
use crate::result::{ParseResult, Parsed};
use std::borrow::Cow;

/// Parser combinator that discards characters from a class before
/// running the wrapped parser.
///
/// Typically wrapped around token parsers with the
/// [`whitespace`](CharClass::whitespace) class, so tokens can be composed
/// without spelling out the space between them. The skipped characters
/// count toward the result's span, which keeps
/// [`Capture`](crate::capture::Capture) exact: wrap the capture inside
/// the skip (`skip(ws, capture(p))`) to capture the token text alone.
pub struct Skip<P> {
    class: CharClass,
    parser: P,
}

impl<P> Skip<P> {
    pub fn new(class: CharClass, parser: P) -> Self {
        Skip { class, parser }
    }
}

impl<'src, P> Parser<'src> for Skip<P>
where
    P: Parser<'src>,
{
    type Output = P::Output;

    fn parse(&self, reader: &mut Reader<'src>) -> ParseResult<'src, Self::Output> {
        let start = reader.position();
        while let Some(ch) = reader.peek() {
            if !self.class.contains(ch) {
                break;
            }
            reader.read();
        }
        let parsed = self.parser.parse(reader)?;
        Ok(Parsed::new(parsed.value, start, parsed.end).with_backtrack(parsed.can_backtrack))
    }

    fn describe(&self) -> Cow<'static, str> {
        self.parser.describe()
    }
}

/// Extension trait to add .auto_skip() method support for parsers
pub trait SkipExt<'src>: Parser<'src> + Sized {
    /// Discards characters from `class` before this parser runs.
    fn auto_skip(self, class: CharClass) -> Skip<Self> {
        Skip::new(class, self)
    }
}

/// Implement SkipExt for all parsers
impl<'src, P> SkipExt<'src> for P where P: Parser<'src> {}

/// Convenience function to create a Skip parser
pub fn skip<'src, P>(class: CharClass, parser: P) -> Skip<P>
where
    P: Parser<'src>,
{
    Skip::new(class, parser)
}
