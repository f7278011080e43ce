use crate::parser::Parser;
use crate::reader::Reader;
use crate::result::ParseResult;
use std::borrow::Cow;

/// Parser combinator that commits to the current branch once the inner
/// parser succeeds.
///
/// On success the result's `can_backtrack` flag is cleared, so a later
/// failure in the same sequence becomes non-recoverable and enclosing
/// choices stop trying alternatives. On failure the flag is forced back to
/// `true`: failing before the commit point is always recoverable. Placing
/// a cut after a recognizable prefix is how a grammar commits to a branch
/// and gets the branch's own error instead of a distant fallback error.
pub struct Cut<P> {
    parser: P,
}

impl<P> Cut<P> {
    pub fn new(parser: P) -> Self {
        Cut { parser }
    }
}

impl<'src, P> Parser<'src> for Cut<P>
where
    P: Parser<'src>,
{
    type Output = P::Output;

    fn parse(&self, reader: &mut Reader<'src>) -> ParseResult<'src, Self::Output> {
        match self.parser.parse(reader) {
            Ok(parsed) => Ok(parsed.with_backtrack(false)),
            Err(failure) => Err(failure.with_backtrack(true)),
        }
    }

    fn describe(&self) -> Cow<'static, str> {
        self.parser.describe()
    }
}

/// Extension trait to add .cut() method support for parsers
pub trait CutExt<'src>: Parser<'src> + Sized {
    fn cut(self) -> Cut<Self> {
        Cut::new(self)
    }
}

/// Implement CutExt for all parsers
impl<'src, P> CutExt<'src> for P where P: Parser<'src> {}

/// Convenience function to create a Cut parser
pub fn cut<'src, P>(parser: P) -> Cut<P>
where
    P: Parser<'src>,
{
    Cut::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::is_char;
    use crate::keyword::keyword_cut;

    #[test]
    fn test_cut_locks_in_success() {
        let mut reader = Reader::new("a");
        let parsed = is_char('a').cut().parse(&mut reader).unwrap();
        assert_eq!(parsed.value, 'a');
        assert!(!parsed.can_backtrack);
    }

    #[test]
    fn test_cut_failure_stays_recoverable() {
        let mut reader = Reader::new("b");
        let failure = is_char('a').cut().parse(&mut reader).unwrap_err();
        assert!(failure.can_backtrack());
    }

    #[test]
    fn test_cut_overrides_committed_inner_failure() {
        let mut reader = Reader::new("ax");
        let failure = cut(keyword_cut("ab", 0)).parse(&mut reader).unwrap_err();
        assert!(failure.can_backtrack());
    }
}
