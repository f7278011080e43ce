use crate::reader::Reader;
use crate::result::ParseResult;
use std::borrow::Cow;

/// Core trait for parsers over a source string.
///
/// A parser reads characters from the [`Reader`] and either succeeds with
/// a [`Parsed`](crate::result::Parsed) value spanning the consumed text,
/// or fails with a [`Failure`](crate::result::Failure) describing what was
/// expected and where.
///
/// On success the reader sits just past the consumed text. On failure the
/// reader is left wherever the parser stopped; callers that want to try an
/// alternative are responsible for marking beforehand and rewinding, which
/// is what [`Or`](crate::or::Or) does. Both outcomes carry a
/// `can_backtrack` flag: once a parser commits (see
/// [`Cut`](crate::cut::Cut)), a failure with the flag cleared tells
/// enclosing choices to report the failure instead of trying other
/// branches.
///
/// Every parser must leave the reader's mark stack exactly as it found it,
/// on every path. Combinators in this crate use [`Reader::mark`] guards
/// for that.
pub trait Parser<'src> {
    type Output;

    /// Attempts to parse at the reader's current position.
    fn parse(&self, reader: &mut Reader<'src>) -> ParseResult<'src, Self::Output>;

    /// Short description of what this parser matches, for error messages
    /// and trace output.
    fn describe(&self) -> Cow<'static, str>;
}

/// A heap-allocated parser with its concrete type erased. Recursive
/// grammars return this from their production functions so the type does
/// not contain itself; see [`lazy`](crate::lazy::lazy).
pub type BoxedParser<'src, T> = Box<dyn Parser<'src, Output = T> + 'src>;

impl<'src, P> Parser<'src> for &P
where
    P: Parser<'src> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, reader: &mut Reader<'src>) -> ParseResult<'src, Self::Output> {
        (**self).parse(reader)
    }

    fn describe(&self) -> Cow<'static, str> {
        (**self).describe()
    }
}

impl<'src, P> Parser<'src> for Box<P>
where
    P: Parser<'src> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, reader: &mut Reader<'src>) -> ParseResult<'src, Self::Output> {
        (**self).parse(reader)
    }

    fn describe(&self) -> Cow<'static, str> {
        (**self).describe()
    }
}
