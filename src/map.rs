use crate::parser::Parser;
use crate::reader::Reader;
use crate::result::ParseResult;
use std::borrow::Cow;

/// Parser combinator that transforms the output of a parser using a
/// mapping function.
///
/// Span and `can_backtrack` flag pass through untouched. The mapping
/// function is trusted not to fail; a panic inside it unwinds straight
/// out of `parse`. Use [`TryMap`](crate::try_map::TryMap) for transforms
/// that can reject their input with a parse failure instead.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'src, P, F, T, U> Parser<'src> for Map<P, F>
where
    P: Parser<'src, Output = T>,
    F: Fn(T) -> U,
{
    type Output = U;

    fn parse(&self, reader: &mut Reader<'src>) -> ParseResult<'src, U> {
        let parsed = self.parser.parse(reader)?;
        Ok(parsed.map_value(&self.mapper))
    }

    fn describe(&self) -> Cow<'static, str> {
        self.parser.describe()
    }
}

/// Convenience function to create a Map parser
pub fn map<'src, P, F, T, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'src, Output = T>,
    F: Fn(T) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'src>: Parser<'src> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'src, P> MapExt<'src> for P where P: Parser<'src> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char_class::CharClass;
    use crate::chars::{char_in, is_char};
    use crate::or::OrExt;
    use crate::repeat::some;

    #[derive(Debug, PartialEq)]
    enum Token {
        Letter(char),
        Digit(u32),
    }

    #[test]
    fn test_map_char_to_digit() {
        let mut reader = Reader::new("7");
        let parser = char_in(CharClass::numeric()).map(|ch| ch as u32 - '0' as u32);
        let parsed = parser.parse(&mut reader).unwrap();
        assert_eq!(parsed.value, 7);
    }

    #[test]
    fn test_map_to_enum() {
        let mut reader = Reader::new("x9");
        let parser = char_in(CharClass::alphabetic())
            .map(Token::Letter)
            .or(char_in(CharClass::numeric()).map(|ch| Token::Digit(ch as u32 - '0' as u32)));

        let parsed = parser.parse(&mut reader).unwrap();
        assert_eq!(parsed.value, Token::Letter('x'));
        let parsed = parser.parse(&mut reader).unwrap();
        assert_eq!(parsed.value, Token::Digit(9));
    }

    #[test]
    fn test_map_chaining() {
        let mut reader = Reader::new("5");
        let parser = is_char('5')
            .map(|ch| ch.to_digit(10).unwrap())
            .map(|digit| format!("digit {}", digit));
        let parsed = parser.parse(&mut reader).unwrap();
        assert_eq!(parsed.value, "digit 5");
    }

    #[test]
    fn test_map_preserves_span_and_failures() {
        let mut reader = Reader::new("abc!");
        let parser = some(char_in(CharClass::alphabetic())).map(|letters| letters.len());
        let parsed = parser.parse(&mut reader).unwrap();
        assert_eq!(parsed.value, 3);
        assert_eq!(parsed.start.index(), 0);
        assert_eq!(parsed.end.index(), 3);

        let failure = some(char_in(CharClass::alphabetic()))
            .map(|letters| letters.len())
            .parse(&mut reader)
            .unwrap_err();
        assert_eq!(failure.position().index(), 3);
    }

    #[test]
    fn test_function_syntax() {
        let mut reader = Reader::new("9");
        let parser = map(is_char('9'), |ch| ch as u8);
        let parsed = parser.parse(&mut reader).unwrap();
        assert_eq!(parsed.value, b'9');
    }
}
