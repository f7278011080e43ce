use crate::capture::capture;
use crate::char_class::CharClass;
use crate::chars::{CharIn, char_in, chars_while, is_char};
use crate::map::MapExt;
use crate::or::OrExt;
use crate::parser::Parser;
use crate::repeat::{Repeat, repeat};
use crate::then::ThenExt;
use crate::try_map::TryMapExt;
use thiserror::Error;

/// Conversion errors for the numeric literal parsers. These surface as
/// parse failures through `try_map`, positioned at the start of the
/// offending literal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NumberError {
    #[error("integer '{0}' out of range for i64")]
    Integer(String),
    #[error("number '{0}' out of range for u64")]
    Unsigned(String),
    #[error("hex number '{0}' out of range for u64")]
    Hex(String),
    #[error("number '{0}' overflows f64")]
    Float(String),
}

/// Either of the two numeric literal shapes.
#[derive(Debug, PartialEq)]
pub enum Number {
    I64(i64),
    F64(f64),
}

// ASCII digits only; Unicode decimal digits would pass the class test
// but not `str::parse`.
fn digit_run() -> Repeat<CharIn> {
    repeat(char_in(CharClass::range('0', '9')), 1, usize::MAX)
}

fn optional_sign() -> Repeat<CharIn> {
    repeat(char_in(CharClass::any_of("+-")), 0, 1)
}

/// Parser for signed decimal integers (`-42`, `+7`, `1995`).
pub fn integer<'src>() -> impl Parser<'src, Output = i64> {
    capture(optional_sign().then(digit_run())).try_map(|text| {
        text.parse::<i64>()
            .map_err(|_| NumberError::Integer(text.to_string()))
    })
}

/// Parser for unsigned decimal integers.
pub fn unsigned<'src>() -> impl Parser<'src, Output = u64> {
    capture(digit_run()).try_map(|text| {
        text.parse::<u64>()
            .map_err(|_| NumberError::Unsigned(text.to_string()))
    })
}

/// Parser for a run of hexadecimal digits, without any `0x` prefix;
/// compose one in front where the grammar wants it.
pub fn hex_unsigned<'src>() -> impl Parser<'src, Output = u64> {
    chars_while(CharClass::hex_digit(), 1).try_map(|text| {
        u64::from_str_radix(text, 16).map_err(|_| NumberError::Hex(text.to_string()))
    })
}

/// Parser for floating point literals in `int.frac` form with an
/// optional exponent (`3.14`, `-2.5e-3`).
pub fn float<'src>() -> impl Parser<'src, Output = f64> {
    let exponent = char_in(CharClass::any_of("eE"))
        .then(optional_sign())
        .then(digit_run());
    let syntax = optional_sign()
        .then(digit_run())
        .then(is_char('.'))
        .then(digit_run())
        .then(repeat(exponent, 0, 1));
    capture(syntax).try_map(|text| {
        let value: f64 = text
            .parse()
            .map_err(|_| NumberError::Float(text.to_string()))?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(NumberError::Float(text.to_string()))
        }
    })
}

/// Parser that matches either a float or an integer and returns a
/// [`Number`]. Floats are tried first so `"3.14"` is not read as the
/// integer `3` with a stray dot behind it.
pub fn number<'src>() -> impl Parser<'src, Output = Number> {
    float().map(Number::F64).or(integer().map(Number::I64))
}
