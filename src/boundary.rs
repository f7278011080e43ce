use crate::parser::Parser;
use crate::reader::Reader;
use crate::result::{Failure, ParseResult, Parsed};
use std::borrow::Cow;

/// Parser that succeeds with `()` only at the very beginning of the
/// source. Consumes nothing.
pub struct Bof;

impl<'src> Parser<'src> for Bof {
    type Output = ();

    fn parse(&self, reader: &mut Reader<'src>) -> ParseResult<'src, ()> {
        let position = reader.position();
        if position.index() == 0 {
            Ok(Parsed::new((), position, position))
        } else {
            Err(Failure::new(
                reader.source(),
                "expected beginning of input",
                position,
            ))
        }
    }

    fn describe(&self) -> Cow<'static, str> {
        Cow::Borrowed("beginning of input")
    }
}

/// Parser that succeeds with `()` only when the whole source has been
/// consumed. Consumes nothing.
pub struct Eof;

impl<'src> Parser<'src> for Eof {
    type Output = ();

    fn parse(&self, reader: &mut Reader<'src>) -> ParseResult<'src, ()> {
        let position = reader.position();
        match reader.peek() {
            None => Ok(Parsed::new((), position, position)),
            Some(ch) => Err(Failure::new(
                reader.source(),
                format!("expected end of input, found '{}'", ch.escape_default()),
                position,
            )),
        }
    }

    fn describe(&self) -> Cow<'static, str> {
        Cow::Borrowed("end of input")
    }
}

/// Convenience function to create a Bof parser
pub fn bof() -> Bof {
    Bof
}

/// Convenience function to create an Eof parser
pub fn eof() -> Eof {
    Eof
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyword::keyword;
    use crate::then::ThenExt;

    #[test]
    fn test_bof_at_start() {
        let mut reader = Reader::new("abc");
        let parsed = bof().parse(&mut reader).unwrap();
        assert_eq!(parsed.value, ());
        assert_eq!(reader.position().index(), 0);
    }

    #[test]
    fn test_bof_after_reading_fails() {
        let mut reader = Reader::new("abc");
        reader.read();
        let failure = bof().parse(&mut reader).unwrap_err();
        assert_eq!(failure.message(), "expected beginning of input");
    }

    #[test]
    fn test_eof_at_end() {
        let mut reader = Reader::new("a");
        reader.read();
        assert!(eof().parse(&mut reader).is_ok());
    }

    #[test]
    fn test_eof_on_empty_source() {
        let mut reader = Reader::new("");
        assert!(eof().parse(&mut reader).is_ok());
    }

    #[test]
    fn test_eof_with_remaining_input_fails() {
        let mut reader = Reader::new("ab");
        reader.read();
        let failure = eof().parse(&mut reader).unwrap_err();
        assert_eq!(failure.message(), "expected end of input, found 'b'");
    }

    #[test]
    fn test_anchored_parse() {
        let mut reader = Reader::new("word");
        let parser = bof().ignore_then(keyword("word")).then_ignore(eof());
        let parsed = parser.parse(&mut reader).unwrap();
        assert_eq!(parsed.value, "word");

        let mut reader = Reader::new("words");
        let parser = bof().ignore_then(keyword("word")).then_ignore(eof());
        let failure = parser.parse(&mut reader).unwrap_err();
        assert_eq!(failure.message(), "expected end of input, found 's'");
    }
}
