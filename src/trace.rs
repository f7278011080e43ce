use crate::parser::Parser;
use crate::reader::Reader;
use crate::result::ParseResult;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Destination for trace lines emitted by [`Trace`].
///
/// The default sink forwards to the `log` facade at trace level, so
/// parser diagnostics end up wherever the host application routes its
/// logs. A custom sink replaces that with an arbitrary callback, which
/// tests use to collect lines.
#[derive(Clone)]
pub enum TraceSink {
    Log,
    Custom(Arc<dyn Fn(&str) + Send + Sync>),
}

impl TraceSink {
    /// A sink from a plain callback.
    pub fn custom(callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        TraceSink::Custom(Arc::new(callback))
    }

    fn emit(&self, line: &str) {
        match self {
            TraceSink::Log => log::trace!("{}", line),
            TraceSink::Custom(callback) => callback(line),
        }
    }
}

impl fmt::Debug for TraceSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceSink::Log => f.write_str("Log"),
            TraceSink::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Parser decorator that reports each parse attempt to a [`TraceSink`].
///
/// One line goes out before the inner parser runs and one after, with the
/// label, positions and outcome. The inner result passes through
/// untouched; tracing observes, it never alters parse semantics.
pub struct Trace<P> {
    label: Cow<'static, str>,
    sink: TraceSink,
    parser: P,
}

impl<P> Trace<P> {
    /// A trace decorator reporting to the `log` facade.
    pub fn new(label: impl Into<Cow<'static, str>>, parser: P) -> Self {
        Trace {
            label: label.into(),
            sink: TraceSink::Log,
            parser,
        }
    }

    /// Replaces the sink.
    pub fn with_sink(mut self, sink: TraceSink) -> Self {
        self.sink = sink;
        self
    }
}

impl<'src, P> Parser<'src> for Trace<P>
where
    P: Parser<'src>,
{
    type Output = P::Output;

    fn parse(&self, reader: &mut Reader<'src>) -> ParseResult<'src, Self::Output> {
        self.sink.emit(&format!(
            "{} started at {}",
            self.label,
            reader.position()
        ));
        let result = self.parser.parse(reader);
        match &result {
            Ok(parsed) => self.sink.emit(&format!(
                "{} matched, now at {}",
                self.label,
                parsed.end
            )),
            Err(failure) => self.sink.emit(&format!(
                "{} failed at {}: {}",
                self.label,
                failure.position(),
                failure.message()
            )),
        }
        result
    }

    fn describe(&self) -> Cow<'static, str> {
        self.label.clone()
    }
}

/// Extension trait to add .trace() method support for parsers
pub trait TraceExt<'src>: Parser<'src> + Sized {
    /// Reports this parser's attempts to the `log` facade under `label`.
    fn trace(self, label: impl Into<Cow<'static, str>>) -> Trace<Self> {
        Trace::new(label, self)
    }
}

/// Implement TraceExt for all parsers
impl<'src, P> TraceExt<'src> for P where P: Parser<'src> {}

/// Convenience function to create a Trace parser
pub fn trace<'src, P>(label: impl Into<Cow<'static, str>>, parser: P) -> Trace<P>
where
    P: Parser<'src>,
{
    Trace::new(label, parser)
}
