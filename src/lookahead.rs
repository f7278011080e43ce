use crate::parser::Parser;
use crate::reader::Reader;
use crate::result::ParseResult;
use std::borrow::Cow;

/// Parser combinator that runs the inner parser without consuming input.
///
/// The reader is rewound after the attempt whether it succeeded or failed;
/// the inner result itself (output, span, message, `can_backtrack`) passes
/// through unchanged. The span still reports where the match would have
/// been.
pub struct Lookahead<P> {
    parser: P,
}

impl<P> Lookahead<P> {
    pub fn new(parser: P) -> Self {
        Lookahead { parser }
    }
}

impl<'src, P> Parser<'src> for Lookahead<P>
where
    P: Parser<'src>,
{
    type Output = P::Output;

    fn parse(&self, reader: &mut Reader<'src>) -> ParseResult<'src, Self::Output> {
        let mut guard = reader.mark();
        let result = self.parser.parse(guard.reader());
        guard.reset();
        result
    }

    fn describe(&self) -> Cow<'static, str> {
        self.parser.describe()
    }
}

/// Extension trait to add .lookahead() method support for parsers
pub trait LookaheadExt<'src>: Parser<'src> + Sized {
    fn lookahead(self) -> Lookahead<Self> {
        Lookahead::new(self)
    }
}

/// Implement LookaheadExt for all parsers
impl<'src, P> LookaheadExt<'src> for P where P: Parser<'src> {}

/// Convenience function to create a Lookahead parser
pub fn lookahead<'src, P>(parser: P) -> Lookahead<P>
where
    P: Parser<'src>,
{
    Lookahead::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyword::{keyword, keyword_cut};

    #[test]
    fn test_lookahead_success_consumes_nothing() {
        let mut reader = Reader::new("let x");
        let parsed = lookahead(keyword("let")).parse(&mut reader).unwrap();
        assert_eq!(parsed.value, "let");
        assert_eq!(reader.position().index(), 0);
        assert_eq!(parsed.end.index(), 3);
        assert_eq!(reader.mark_depth(), 0);
    }

    #[test]
    fn test_lookahead_failure_consumes_nothing() {
        let mut reader = Reader::new("lex");
        let failure = lookahead(keyword("let")).parse(&mut reader).unwrap_err();
        assert_eq!(reader.position().index(), 0);
        assert_eq!(failure.position().index(), 2);
        assert_eq!(reader.mark_depth(), 0);
    }

    #[test]
    fn test_lookahead_passes_flags_through() {
        let mut reader = Reader::new("abx");
        let failure = lookahead(keyword_cut("abc", 1)).parse(&mut reader).unwrap_err();
        assert!(!failure.can_backtrack());
        assert_eq!(reader.position().index(), 0);
    }

    #[test]
    fn test_lookahead_then_consume() {
        use crate::then::ThenExt;

        let mut reader = Reader::new("abc");
        let parser = lookahead(keyword("ab")).ignore_then(keyword("abc"));
        let parsed = parser.parse(&mut reader).unwrap();
        assert_eq!(parsed.value, "abc");
        assert!(reader.at_end());
    }
}
