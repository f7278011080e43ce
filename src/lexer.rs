use crate::char_class::CharClass;
use crate::chars::{IsChar, is_char};
use crate::keyword::{Keyword, keyword};
use crate::parser::Parser;
use crate::skip::Skip;
use crate::trace::{Trace, TraceSink};
use std::borrow::Cow;

/// Factory bundling a default skip class (and optionally a trace sink)
/// so token parsers come out uniformly configured.
///
/// The lexer holds configuration only; it owns no parse state and every
/// call builds a fresh, independent parser. Parsers it hands out skip the
/// configured class before their own input, which is the usual
/// whitespace-between-tokens arrangement:
///
/// ```
/// use charcomb::lexer::Lexer;
/// use charcomb::then::ThenExt;
/// use charcomb::{Parser, Reader};
///
/// let lexer = Lexer::whitespace();
/// let parser = lexer.keyword("fn").ignore_then(lexer.symbol('('));
/// let mut reader = Reader::new("  fn  (");
/// assert!(parser.parse(&mut reader).is_ok());
/// ```
#[derive(Clone)]
pub struct Lexer {
    skip: CharClass,
    sink: Option<TraceSink>,
}

impl Lexer {
    /// A lexer skipping `skip` before each token.
    pub fn new(skip: CharClass) -> Self {
        Lexer { skip, sink: None }
    }

    /// A lexer skipping whitespace and control characters.
    pub fn whitespace() -> Self {
        Lexer::new(CharClass::whitespace())
    }

    /// Routes trace lines from [`traced`](Lexer::traced) parsers to `sink`
    /// instead of the `log` facade.
    pub fn with_sink(mut self, sink: TraceSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// The configured skip class.
    pub fn skip_class(&self) -> &CharClass {
        &self.skip
    }

    /// Wraps `parser` so the skip class is discarded before it runs.
    pub fn token<'src, P>(&self, parser: P) -> Skip<P>
    where
        P: Parser<'src>,
    {
        Skip::new(self.skip.clone(), parser)
    }

    /// A skip-wrapped [`Keyword`] for `text`.
    ///
    /// # Panics
    ///
    /// Panics if `text` is empty.
    pub fn keyword(&self, text: impl Into<Cow<'static, str>>) -> Skip<Keyword> {
        self.token(keyword(text))
    }

    /// A skip-wrapped single-character token.
    pub fn symbol(&self, ch: char) -> Skip<IsChar> {
        self.token(is_char(ch))
    }

    /// A skip-wrapped parser that also reports attempts under `label`,
    /// through the configured sink when one is set.
    pub fn traced<'src, P>(
        &self,
        label: impl Into<Cow<'static, str>>,
        parser: P,
    ) -> Trace<Skip<P>>
    where
        P: Parser<'src>,
    {
        let traced = Trace::new(label, self.token(parser));
        match &self.sink {
            Some(sink) => traced.with_sink(sink.clone()),
            None => traced,
        }
    }
}
