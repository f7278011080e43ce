use crate::parser::Parser;
use crate::reader::Reader;
use crate::result::{Failure, ParseResult, Parsed};
use std::borrow::Cow;
use std::fmt;

/// Parser combinator that transforms the output of a parser with a
/// fallible function.
///
/// When the function returns an error, the error's display text becomes a
/// parse failure positioned at the start of the consumed span, with the
/// span's `can_backtrack` flag preserved. The reader is not rewound; the
/// enclosing choice decides whether to backtrack, exactly as for any
/// other failure.
pub struct TryMap<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> TryMap<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        TryMap { parser, mapper }
    }
}

impl<'src, P, F, T, U, E> Parser<'src> for TryMap<P, F>
where
    P: Parser<'src, Output = T>,
    F: Fn(T) -> Result<U, E>,
    E: fmt::Display,
{
    type Output = U;

    fn parse(&self, reader: &mut Reader<'src>) -> ParseResult<'src, U> {
        let parsed = self.parser.parse(reader)?;
        match (self.mapper)(parsed.value) {
            Ok(value) => {
                Ok(Parsed::new(value, parsed.start, parsed.end)
                    .with_backtrack(parsed.can_backtrack))
            }
            Err(error) => Err(Failure::new(reader.source(), error.to_string(), parsed.start)
                .with_backtrack(parsed.can_backtrack)),
        }
    }

    fn describe(&self) -> Cow<'static, str> {
        self.parser.describe()
    }
}

/// Convenience function to create a TryMap parser
pub fn try_map<'src, P, F, T, U, E>(parser: P, mapper: F) -> TryMap<P, F>
where
    P: Parser<'src, Output = T>,
    F: Fn(T) -> Result<U, E>,
    E: fmt::Display,
{
    TryMap::new(parser, mapper)
}

/// Extension trait to add .try_map() method support for parsers
pub trait TryMapExt<'src>: Parser<'src> + Sized {
    fn try_map<F, U, E>(self, mapper: F) -> TryMap<Self, F>
    where
        F: Fn(Self::Output) -> Result<U, E>,
        E: fmt::Display,
    {
        TryMap::new(self, mapper)
    }
}

/// Implement TryMapExt for all parsers
impl<'src, P> TryMapExt<'src> for P where P: Parser<'src> {}
