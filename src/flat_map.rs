use crate::parser::Parser;
use crate::reader::Reader;
use crate::result::{ParseResult, Parsed};
use std::borrow::Cow;

/// Parser combinator that builds the next parser from the previous
/// parser's output, then runs it.
///
/// This is the monadic bind over parsers: the grammar that follows can
/// depend on a value already parsed, which plain sequencing cannot
/// express. Flags and spans combine exactly like a sequence.
pub struct FlatMap<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> FlatMap<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        FlatMap { parser, binder }
    }
}

impl<'src, P, F, P2> Parser<'src> for FlatMap<P, F>
where
    P: Parser<'src>,
    F: Fn(P::Output) -> P2,
    P2: Parser<'src>,
{
    type Output = P2::Output;

    fn parse(&self, reader: &mut Reader<'src>) -> ParseResult<'src, Self::Output> {
        let first = self.parser.parse(reader)?;
        let next = (self.binder)(first.value);
        match next.parse(reader) {
            Ok(second) => {
                let flag = first.can_backtrack && second.can_backtrack;
                Ok(Parsed::new(second.value, first.start, second.end).with_backtrack(flag))
            }
            Err(failure) => {
                let flag = first.can_backtrack && failure.can_backtrack();
                Err(failure.with_backtrack(flag))
            }
        }
    }

    fn describe(&self) -> Cow<'static, str> {
        self.parser.describe()
    }
}

/// Convenience function to create a FlatMap parser
pub fn flat_map<'src, P, F, P2>(parser: P, binder: F) -> FlatMap<P, F>
where
    P: Parser<'src>,
    F: Fn(P::Output) -> P2,
    P2: Parser<'src>,
{
    FlatMap::new(parser, binder)
}

/// Extension trait to add .flat_map() method support for parsers
pub trait FlatMapExt<'src>: Parser<'src> + Sized {
    fn flat_map<F, P2>(self, binder: F) -> FlatMap<Self, F>
    where
        F: Fn(Self::Output) -> P2,
        P2: Parser<'src>,
    {
        FlatMap::new(self, binder)
    }
}

/// Implement FlatMapExt for all parsers
impl<'src, P> FlatMapExt<'src> for P where P: Parser<'src> {}
