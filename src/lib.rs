//! # CharComb - Character Parser Combinators
//!
//! A parser combinator library over in-memory UTF-8 text, built around an
//! explicit backtracking protocol.
//!
//! Parsers are small values implementing [`Parser`]; combinators wrap them
//! into larger ones. The library emphasizes:
//!
//! - **Explicit backtracking**: every outcome carries a `can_backtrack` flag,
//!   and `cut` commits a grammar to a branch for precise error reporting
//! - **Zero panics**: parsing errors are handled through `Result` types, with
//!   line/column positions and rendered source context
//! - **Borrowed captures**: `capture` returns slices of the source text
//!   rather than allocating
//! - **Composability**: grammars grow from single-character parsers through
//!   choice, sequencing, and repetition combinators

pub mod boundary;
pub mod capture;
pub mod char_class;
pub mod chars;
pub mod cut;
pub mod flat_map;
pub mod keyword;
pub mod lazy;
pub mod lexer;
pub mod lookahead;
pub mod map;
pub mod not;
pub mod or;
pub mod parser;
pub mod position;
pub mod reader;
pub mod reduce;
pub mod repeat;
pub mod result;
pub mod skip;
pub mod text;
pub mod then;
pub mod trace;
pub mod try_map;
pub mod value;

pub use char_class::{Category, CharClass};
pub use parser::{BoxedParser, Parser};
pub use position::Position;
pub use reader::Reader;
pub use result::{Failure, ParseResult, Parsed};
