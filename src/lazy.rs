use crate::parser::Parser;
use crate::reader::Reader;
use crate::result::ParseResult;
use std::borrow::Cow;
use std::marker::PhantomData;

/// A lazy parser that defers construction of the actual parser until
/// parse time. This breaks recursion: a grammar production can refer to
/// itself (or a later production) through a factory function instead of
/// containing itself as a value.
///
/// Recursive productions return [`BoxedParser`](crate::parser::BoxedParser)
/// so the parser type does not contain itself:
///
/// ```
/// use charcomb::chars::is_char;
/// use charcomb::lazy::lazy;
/// use charcomb::map::MapExt;
/// use charcomb::or::OrExt;
/// use charcomb::then::ThenExt;
/// use charcomb::value::succeed;
/// use charcomb::{BoxedParser, Parser, Reader};
///
/// fn nesting<'src>() -> BoxedParser<'src, usize> {
///     Box::new(
///         is_char('(')
///             .ignore_then(lazy(nesting))
///             .then_ignore(is_char(')'))
///             .map(|depth| depth + 1)
///             .or(succeed(0)),
///     )
/// }
///
/// let mut reader = Reader::new("(())");
/// assert_eq!(nesting().parse(&mut reader).unwrap().value, 2);
/// ```
pub struct Lazy<'src, F, P>
where
    F: Fn() -> P,
    P: Parser<'src>,
{
    factory: F,
    _phantom: PhantomData<&'src ()>,
}

impl<'src, F, P> Lazy<'src, F, P>
where
    F: Fn() -> P,
    P: Parser<'src>,
{
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            _phantom: PhantomData,
        }
    }
}

impl<'src, F, P> Parser<'src> for Lazy<'src, F, P>
where
    F: Fn() -> P,
    P: Parser<'src>,
{
    type Output = P::Output;

    fn parse(&self, reader: &mut Reader<'src>) -> ParseResult<'src, Self::Output> {
        let parser = (self.factory)();
        parser.parse(reader)
    }

    fn describe(&self) -> Cow<'static, str> {
        (self.factory)().describe()
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'src, F, P>(factory: F) -> Lazy<'src, F, P>
where
    F: Fn() -> P,
    P: Parser<'src>,
{
    Lazy::new(factory)
}
