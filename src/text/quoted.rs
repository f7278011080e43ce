use crate::capture::capture;
use crate::char_class::CharClass;
use crate::chars::{char_in, chars_while, is_char};
use crate::cut::CutExt;
use crate::or::OrExt;
use crate::parser::Parser;
use crate::reduce::reduce;
use crate::repeat::exactly;
use crate::then::ThenExt;
use crate::try_map::TryMapExt;
use crate::value::ToExt;
use thiserror::Error;

/// Conversion error for `\u` escapes whose hex value is not a valid
/// Unicode scalar (surrogates, values past `0x10FFFF`).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EscapeError {
    #[error("unicode escape '{0}' is not a valid code point")]
    InvalidCodePoint(String),
}

// `u{1F600}` or `u00e9`; the leading backslash is consumed by the caller.
fn unicode_escape<'src>() -> impl Parser<'src, Output = char> {
    let braced = is_char('{')
        .ignore_then(chars_while(CharClass::hex_digit(), 1))
        .then_ignore(is_char('}'));
    let fixed = capture(exactly(char_in(CharClass::hex_digit()), 4));
    is_char('u').ignore_then(braced.or(fixed)).try_map(|hex| {
        u32::from_str_radix(hex, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| EscapeError::InvalidCodePoint(hex.to_string()))
    })
}

fn escape_code<'src>() -> impl Parser<'src, Output = char> {
    is_char('"')
        .or(is_char('\\'))
        .or(is_char('n').to('\n'))
        .or(is_char('t').to('\t'))
        .or(is_char('r').to('\r'))
        .or(is_char('0').to('\0'))
        .or(unicode_escape())
}

/// Parser for a double-quoted string literal, producing the unescaped
/// content as a `String`.
///
/// Recognized escapes are `\"`, `\\`, `\n`, `\t`, `\r`, `\0`, and
/// unicode escapes in `\u{...}` or `\uXXXX` form. The parser commits
/// after the opening quote, so an unterminated literal fails without
/// handing control to sibling alternatives of an enclosing choice.
pub fn quoted_string<'src>() -> impl Parser<'src, Output = String> {
    let plain = char_in(
        CharClass::single('"')
            .union(&CharClass::single('\\'))
            .complement(),
    );
    let piece = plain.or(is_char('\\').ignore_then(escape_code()));
    is_char('"')
        .cut()
        .ignore_then(reduce(
            piece,
            0,
            usize::MAX,
            String::new,
            |text, ch| text.push(ch),
            |text| text,
        ))
        .then_ignore(is_char('"'))
}
