use crate::capture::capture;
use crate::char_class::{Category, CharClass};
use crate::chars::char_in;
use crate::parser::Parser;
use crate::repeat::many;
use crate::then::ThenExt;

/// Parser for identifiers: an alphabetic or underscore head followed by
/// alphanumeric or underscore characters, returned as a slice of the
/// source.
pub fn identifier<'src>() -> impl Parser<'src, Output = &'src str> {
    let head = char_in(CharClass::category(Category::Alphabetic).plus('_'));
    let tail = many(char_in(CharClass::category(Category::Alphanumeric).plus('_')));
    capture(head.then(tail))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::Reader;

    #[test]
    fn test_plain_identifier() {
        let mut reader = Reader::new("count = 1");
        let parsed = identifier().parse(&mut reader).unwrap();
        assert_eq!(parsed.value, "count");
        assert_eq!(reader.peek(), Some(' '));
    }

    #[test]
    fn test_underscore_and_digits() {
        let mut reader = Reader::new("_tmp_2(");
        let parsed = identifier().parse(&mut reader).unwrap();
        assert_eq!(parsed.value, "_tmp_2");
    }

    #[test]
    fn test_single_character() {
        let mut reader = Reader::new("x");
        let parsed = identifier().parse(&mut reader).unwrap();
        assert_eq!(parsed.value, "x");
    }

    #[test]
    fn test_unicode_identifier() {
        let mut reader = Reader::new("café!");
        let parsed = identifier().parse(&mut reader).unwrap();
        assert_eq!(parsed.value, "café");
        assert_eq!(reader.peek(), Some('!'));
    }

    #[test]
    fn test_digit_head_fails() {
        let mut reader = Reader::new("2fast");
        assert!(identifier().parse(&mut reader).is_err());
    }
}
