use crate::parser::Parser;
use crate::reader::Reader;
use crate::result::{Failure, ParseResult, Parsed};
use std::borrow::Cow;

/// Parser that consumes an exact string, character by character.
///
/// On a mismatch the reader is left at the first character that differs,
/// so the failure points at the exact spot. An optional cut offset marks
/// failures as committed once that many characters have already matched:
/// `Keyword::with_cut("while", 2)` fails fatally on `"whxle"`, because
/// after `"wh"` no other alternative could be meant.
pub struct Keyword {
    expected: Cow<'static, str>,
    cut_at: Option<usize>,
}

impl Keyword {
    /// A keyword parser with no cut offset.
    ///
    /// # Panics
    ///
    /// Panics if `expected` is empty.
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        let expected = expected.into();
        assert!(!expected.is_empty(), "keyword must not be empty");
        Keyword {
            expected,
            cut_at: None,
        }
    }

    /// A keyword parser that commits after `cut_at` characters have
    /// matched: any later mismatch fails with backtracking disallowed.
    ///
    /// # Panics
    ///
    /// Panics if `expected` is empty or `cut_at` is not below its length
    /// in characters.
    pub fn with_cut(expected: impl Into<Cow<'static, str>>, cut_at: usize) -> Self {
        let expected = expected.into();
        assert!(!expected.is_empty(), "keyword must not be empty");
        let length = expected.chars().count();
        assert!(
            cut_at < length,
            "cut offset {} outside keyword '{}'",
            cut_at,
            expected
        );
        Keyword {
            expected,
            cut_at: Some(cut_at),
        }
    }
}

impl<'src> Parser<'src> for Keyword {
    type Output = Cow<'static, str>;

    fn parse(&self, reader: &mut Reader<'src>) -> ParseResult<'src, Cow<'static, str>> {
        let start = reader.position();
        for (matched, expected_ch) in self.expected.chars().enumerate() {
            match reader.peek() {
                Some(ch) if ch == expected_ch => {
                    reader.read();
                }
                found => {
                    let committed = self.cut_at.is_some_and(|cut| matched >= cut);
                    let message = match found {
                        Some(ch) => format!(
                            "expected '{}', found '{}' while matching '{}'",
                            expected_ch.escape_default(),
                            ch.escape_default(),
                            self.expected
                        ),
                        None => format!(
                            "expected '{}', found end of input while matching '{}'",
                            expected_ch.escape_default(),
                            self.expected
                        ),
                    };
                    return Err(Failure::new(reader.source(), message, reader.position())
                        .with_backtrack(!committed));
                }
            }
        }
        Ok(Parsed::new(self.expected.clone(), start, reader.position()))
    }

    fn describe(&self) -> Cow<'static, str> {
        Cow::Owned(format!("'{}'", self.expected))
    }
}

/// Convenience function to create a Keyword parser
pub fn keyword(expected: impl Into<Cow<'static, str>>) -> Keyword {
    Keyword::new(expected)
}

/// Convenience function to create a Keyword parser with a cut offset
pub fn keyword_cut(expected: impl Into<Cow<'static, str>>, cut_at: usize) -> Keyword {
    Keyword::with_cut(expected, cut_at)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_match() {
        let mut reader = Reader::new("let x");
        let parsed = keyword("let").parse(&mut reader).unwrap();
        assert_eq!(parsed.value, "let");
        assert_eq!(parsed.start.index(), 0);
        assert_eq!(parsed.end.index(), 3);
        assert_eq!(reader.peek(), Some(' '));
    }

    #[test]
    fn test_keyword_mismatch_stops_at_offending_char() {
        let mut reader = Reader::new("lex");
        let failure = keyword("let").parse(&mut reader).unwrap_err();
        assert_eq!(
            failure.message(),
            "expected 't', found 'x' while matching 'let'"
        );
        assert_eq!(failure.position().index(), 2);
        assert!(failure.can_backtrack());
        assert_eq!(reader.peek(), Some('x'));
    }

    #[test]
    fn test_keyword_end_of_input() {
        let mut reader = Reader::new("le");
        let failure = keyword("let").parse(&mut reader).unwrap_err();
        assert_eq!(
            failure.message(),
            "expected 't', found end of input while matching 'let'"
        );
    }

    #[test]
    fn test_cut_not_reached() {
        let mut reader = Reader::new("lx");
        let failure = keyword_cut("let", 2).parse(&mut reader).unwrap_err();
        assert!(failure.can_backtrack());
    }

    #[test]
    fn test_cut_reached_commits() {
        let mut reader = Reader::new("0123456789X");
        let failure = keyword_cut("01X", 2).parse(&mut reader).unwrap_err();
        assert!(!failure.can_backtrack());
        assert_eq!(failure.position().index(), 2);
        assert_eq!(reader.position().index(), 2);
    }

    #[test]
    fn test_cut_at_zero_commits_immediately() {
        let mut reader = Reader::new("x");
        let failure = keyword_cut("let", 0).parse(&mut reader).unwrap_err();
        assert!(!failure.can_backtrack());
    }

    #[test]
    fn test_keyword_multibyte() {
        let mut reader = Reader::new("αβx");
        let parsed = keyword("αβ").parse(&mut reader).unwrap();
        assert_eq!(parsed.value, "αβ");
        assert_eq!(reader.peek(), Some('x'));
    }

    #[test]
    #[should_panic(expected = "keyword must not be empty")]
    fn test_empty_keyword_panics() {
        let _ = keyword("");
    }

    #[test]
    #[should_panic(expected = "cut offset")]
    fn test_cut_outside_keyword_panics() {
        let _ = keyword_cut("ab", 2);
    }
}
