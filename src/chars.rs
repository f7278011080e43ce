use crate::capture::{Capture, capture};
use crate::char_class::CharClass;
use crate::parser::Parser;
use crate::reader::Reader;
use crate::repeat::{Repeat, repeat};
use crate::result::{Failure, ParseResult, Parsed};
use std::borrow::Cow;

/// Parser that consumes exactly one character, whatever it is.
pub struct AnyChar;

impl<'src> Parser<'src> for AnyChar {
    type Output = char;

    fn parse(&self, reader: &mut Reader<'src>) -> ParseResult<'src, char> {
        let start = reader.position();
        match reader.read() {
            Some(ch) => Ok(Parsed::new(ch, start, reader.position())),
            None => Err(Failure::new(
                reader.source(),
                "expected any character, found end of input",
                start,
            )),
        }
    }

    fn describe(&self) -> Cow<'static, str> {
        Cow::Borrowed("any character")
    }
}

/// Convenience function to create an AnyChar parser
pub fn any_char() -> AnyChar {
    AnyChar
}

/// Parser that consumes one specific character.
pub struct IsChar {
    expected: char,
}

impl IsChar {
    pub fn new(expected: char) -> Self {
        IsChar { expected }
    }
}

impl<'src> Parser<'src> for IsChar {
    type Output = char;

    fn parse(&self, reader: &mut Reader<'src>) -> ParseResult<'src, char> {
        let start = reader.position();
        match reader.peek() {
            Some(ch) if ch == self.expected => {
                reader.read();
                Ok(Parsed::new(ch, start, reader.position()))
            }
            Some(ch) => Err(Failure::new(
                reader.source(),
                format!(
                    "expected '{}', found '{}'",
                    self.expected.escape_default(),
                    ch.escape_default()
                ),
                start,
            )),
            None => Err(Failure::new(
                reader.source(),
                format!(
                    "expected '{}', found end of input",
                    self.expected.escape_default()
                ),
                start,
            )),
        }
    }

    fn describe(&self) -> Cow<'static, str> {
        Cow::Owned(format!("'{}'", self.expected.escape_default()))
    }
}

/// Convenience function to create an IsChar parser
pub fn is_char(expected: char) -> IsChar {
    IsChar::new(expected)
}

/// Parser that consumes one character belonging to a [`CharClass`].
pub struct CharIn {
    class: CharClass,
}

impl CharIn {
    pub fn new(class: CharClass) -> Self {
        CharIn { class }
    }
}

impl<'src> Parser<'src> for CharIn {
    type Output = char;

    fn parse(&self, reader: &mut Reader<'src>) -> ParseResult<'src, char> {
        let start = reader.position();
        match reader.peek() {
            Some(ch) if self.class.contains(ch) => {
                reader.read();
                Ok(Parsed::new(ch, start, reader.position()))
            }
            Some(ch) => Err(Failure::new(
                reader.source(),
                format!(
                    "expected {}, found '{}'",
                    self.class.description(),
                    ch.escape_default()
                ),
                start,
            )),
            None => Err(Failure::new(
                reader.source(),
                format!("expected {}, found end of input", self.class.description()),
                start,
            )),
        }
    }

    fn describe(&self) -> Cow<'static, str> {
        Cow::Owned(self.class.description().to_string())
    }
}

/// Convenience function to create a CharIn parser
pub fn char_in(class: CharClass) -> CharIn {
    CharIn::new(class)
}

/// One character in the inclusive range `lo..=hi`.
pub fn char_range(lo: char, hi: char) -> CharIn {
    CharIn::new(CharClass::range(lo, hi))
}

/// One character that is anything but `unexpected`.
pub fn not_char(unexpected: char) -> CharIn {
    CharIn::new(CharClass::single(unexpected).complement())
}

/// One character outside the given class.
pub fn char_not_in(class: CharClass) -> CharIn {
    CharIn::new(class.complement())
}

/// The longest run of characters from `class`, as a slice of the source.
/// Fails unless at least `min` characters match; a run of zero characters
/// succeeds with an empty slice when `min` is zero.
pub fn chars_while(class: CharClass, min: usize) -> Capture<Repeat<CharIn>> {
    capture(repeat(char_in(class), min, usize::MAX))
}

/// [`chars_while`] over the explicit character set `set`.
pub fn chars_while_in(set: &str, min: usize) -> Capture<Repeat<CharIn>> {
    chars_while(CharClass::any_of(set), min)
}
