use crate::parser::Parser;
use crate::reader::Reader;
use crate::result::{ParseResult, Parsed};
use std::borrow::Cow;

/// Parser combinator that runs two parsers in sequence and pairs their
/// outputs.
///
/// A failure of the first parser propagates with its `can_backtrack` flag
/// untouched. Once the first parser has succeeded, the second runs from
/// where it stopped, and the combined flag is the logical AND of both
/// sides: a cut anywhere in a sequence commits the whole sequence. The
/// sequence itself never rewinds; enclosing choices own the marks.
pub struct Then<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Then<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Then { parser1, parser2 }
    }
}

impl<'src, P1, P2> Parser<'src> for Then<P1, P2>
where
    P1: Parser<'src>,
    P2: Parser<'src>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, reader: &mut Reader<'src>) -> ParseResult<'src, Self::Output> {
        let first = self.parser1.parse(reader)?;
        match self.parser2.parse(reader) {
            Ok(second) => {
                let flag = first.can_backtrack && second.can_backtrack;
                Ok(
                    Parsed::new((first.value, second.value), first.start, second.end)
                        .with_backtrack(flag),
                )
            }
            Err(failure) => {
                let flag = first.can_backtrack && failure.can_backtrack();
                Err(failure.with_backtrack(flag))
            }
        }
    }

    fn describe(&self) -> Cow<'static, str> {
        Cow::Owned(format!(
            "{} then {}",
            self.parser1.describe(),
            self.parser2.describe()
        ))
    }
}

/// Sequence that keeps only the first parser's output.
pub struct ThenIgnore<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> ThenIgnore<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        ThenIgnore { parser1, parser2 }
    }
}

impl<'src, P1, P2> Parser<'src> for ThenIgnore<P1, P2>
where
    P1: Parser<'src>,
    P2: Parser<'src>,
{
    type Output = P1::Output;

    fn parse(&self, reader: &mut Reader<'src>) -> ParseResult<'src, Self::Output> {
        let first = self.parser1.parse(reader)?;
        match self.parser2.parse(reader) {
            Ok(second) => {
                let flag = first.can_backtrack && second.can_backtrack;
                Ok(Parsed::new(first.value, first.start, second.end).with_backtrack(flag))
            }
            Err(failure) => {
                let flag = first.can_backtrack && failure.can_backtrack();
                Err(failure.with_backtrack(flag))
            }
        }
    }

    fn describe(&self) -> Cow<'static, str> {
        Cow::Owned(format!(
            "{} then {}",
            self.parser1.describe(),
            self.parser2.describe()
        ))
    }
}

/// Sequence that keeps only the second parser's output.
pub struct IgnoreThen<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> IgnoreThen<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        IgnoreThen { parser1, parser2 }
    }
}

impl<'src, P1, P2> Parser<'src> for IgnoreThen<P1, P2>
where
    P1: Parser<'src>,
    P2: Parser<'src>,
{
    type Output = P2::Output;

    fn parse(&self, reader: &mut Reader<'src>) -> ParseResult<'src, Self::Output> {
        let first = self.parser1.parse(reader)?;
        match self.parser2.parse(reader) {
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
        Cow::Owned(format!(
            "{} then {}",
            self.parser1.describe(),
            self.parser2.describe()
        ))
    }
}

/// Extension trait to add sequencing method support for parsers
pub trait ThenExt<'src>: Parser<'src> + Sized {
    /// Runs `other` after this parser and pairs the outputs.
    fn then<P>(self, other: P) -> Then<Self, P>
    where
        P: Parser<'src>,
    {
        Then::new(self, other)
    }

    /// Runs `other` after this parser and keeps only this parser's output.
    fn then_ignore<P>(self, other: P) -> ThenIgnore<Self, P>
    where
        P: Parser<'src>,
    {
        ThenIgnore::new(self, other)
    }

    /// Runs `other` after this parser and keeps only `other`'s output.
    fn ignore_then<P>(self, other: P) -> IgnoreThen<Self, P>
    where
        P: Parser<'src>,
    {
        IgnoreThen::new(self, other)
    }
}

/// Implement ThenExt for all parsers
impl<'src, P> ThenExt<'src> for P where P: Parser<'src> {}

/// Convenience function to create a Then parser
pub fn then<'src, P1, P2>(parser1: P1, parser2: P2) -> Then<P1, P2>
where
    P1: Parser<'src>,
    P2: Parser<'src>,
{
    Then::new(parser1, parser2)
}
