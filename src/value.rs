use crate::parser::Parser;
use crate::reader::Reader;
use crate::result::{Failure, ParseResult, Parsed};
use std::borrow::Cow;

/// Parser combinator that replaces a parser's output with a fixed value.
pub struct To<P, V> {
    parser: P,
    value: V,
}

impl<P, V> To<P, V> {
    pub fn new(parser: P, value: V) -> Self {
        To { parser, value }
    }
}

impl<'src, P, V> Parser<'src> for To<P, V>
where
    P: Parser<'src>,
    V: Clone,
{
    type Output = V;

    fn parse(&self, reader: &mut Reader<'src>) -> ParseResult<'src, V> {
        let parsed = self.parser.parse(reader)?;
        Ok(Parsed::new(self.value.clone(), parsed.start, parsed.end)
            .with_backtrack(parsed.can_backtrack))
    }

    fn describe(&self) -> Cow<'static, str> {
        self.parser.describe()
    }
}

/// Parser that consumes nothing and succeeds with a fixed value.
pub struct Succeed<V> {
    value: V,
}

impl<V> Succeed<V> {
    pub fn new(value: V) -> Self {
        Succeed { value }
    }
}

impl<'src, V> Parser<'src> for Succeed<V>
where
    V: Clone,
{
    type Output = V;

    fn parse(&self, reader: &mut Reader<'src>) -> ParseResult<'src, V> {
        let position = reader.position();
        Ok(Parsed::new(self.value.clone(), position, position))
    }

    fn describe(&self) -> Cow<'static, str> {
        Cow::Borrowed("nothing")
    }
}

/// Parser that consumes nothing and always fails with a fixed message.
pub struct Fail {
    message: Cow<'static, str>,
}

impl Fail {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Fail {
            message: message.into(),
        }
    }
}

impl<'src> Parser<'src> for Fail {
    type Output = ();

    fn parse(&self, reader: &mut Reader<'src>) -> ParseResult<'src, ()> {
        Err(Failure::new(
            reader.source(),
            self.message.clone(),
            reader.position(),
        ))
    }

    fn describe(&self) -> Cow<'static, str> {
        self.message.clone()
    }
}

/// Extension trait to add .to() method support for parsers
pub trait ToExt<'src>: Parser<'src> + Sized {
    fn to<V>(self, value: V) -> To<Self, V>
    where
        V: Clone,
    {
        To::new(self, value)
    }
}

/// Implement ToExt for all parsers
impl<'src, P> ToExt<'src> for P where P: Parser<'src> {}

/// Convenience function to create a Succeed parser
pub fn succeed<V>(value: V) -> Succeed<V>
where
    V: Clone,
{
    Succeed::new(value)
}

/// Convenience function to create a Fail parser
pub fn fail(message: impl Into<Cow<'static, str>>) -> Fail {
    Fail::new(message)
}
