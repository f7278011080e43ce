//! Ready-made parsers for common textual forms: identifiers, numeric
//! literals, and quoted strings. All of them are ordinary compositions
//! of the core combinators.

pub mod ident;
pub mod number;
pub mod quoted;

pub use ident::identifier;
pub use number::{Number, NumberError, float, hex_unsigned, integer, number, unsigned};
pub use quoted::{EscapeError, quoted_string};
