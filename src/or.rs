use crate::parser::Parser;
use crate::reader::Reader;
use crate::result::ParseResult;
use std::borrow::Cow;

/// Parser combinator that tries the first parser, and if it fails, rewinds
/// and tries the second parser.
///
/// A failure of the first parser with backtracking disallowed (a cut fired
/// inside it) is returned as is: the second parser is never attempted and
/// the reader stays at the failure position. In every other outcome the
/// result's `can_backtrack` flag is forced back to `true`, so a cut inside
/// one branch does not leak into enclosing choices. Chains built with
/// `.or()` associate to the left, which keeps a cut inside any branch
/// scoped to exactly the alternatives that follow it in the same chain.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'src, P1, P2, O> Parser<'src> for Or<P1, P2>
where
    P1: Parser<'src, Output = O>,
    P2: Parser<'src, Output = O>,
{
    type Output = O;

    fn parse(&self, reader: &mut Reader<'src>) -> ParseResult<'src, O> {
        let mut guard = reader.mark();
        match self.parser1.parse(guard.reader()) {
            Ok(parsed) => Ok(parsed.with_backtrack(true)),
            Err(failure) if !failure.can_backtrack() => Err(failure),
            Err(_) => {
                guard.reset();
                match self.parser2.parse(guard.reader()) {
                    Ok(parsed) => Ok(parsed.with_backtrack(true)),
                    Err(failure) => Err(failure.with_backtrack(true)),
                }
            }
        }
    }

    fn describe(&self) -> Cow<'static, str> {
        Cow::Owned(format!(
            "{} or {}",
            self.parser1.describe(),
            self.parser2.describe()
        ))
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'src>: Parser<'src> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'src, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'src, P> OrExt<'src> for P where P: Parser<'src> {}

/// Convenience function to create an Or parser
pub fn or<'src, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'src, Output = O>,
    P2: Parser<'src, Output = O>,
{
    Or::new(parser1, parser2)
}
