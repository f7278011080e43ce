use crate::position::Position;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// Outcome of one parse attempt: a successful [`Parsed`] value or a
/// [`Failure`]. Both carry the backtrack-permission flag that ordered
/// choice consults before trying an alternative.
pub type ParseResult<'src, T> = Result<Parsed<T>, Failure<'src>>;

/// A successful parse: the captured value plus the span it consumed.
///
/// `can_backtrack` records whether an enclosing ordered choice is still
/// allowed to try its other alternative. It says nothing about retrying
/// this node; a [`crate::cut::Cut`] that ran inside this subtree clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parsed<T> {
    /// The captured value.
    pub value: T,
    /// Position of the first consumed character.
    pub start: Position,
    /// Position just past the last consumed character.
    pub end: Position,
    /// Whether an enclosing choice may still try its alternative.
    pub can_backtrack: bool,
}

impl<T> Parsed<T> {
    /// A success spanning `start..end` with backtracking permitted.
    pub fn new(value: T, start: Position, end: Position) -> Self {
        Parsed {
            value,
            start,
            end,
            can_backtrack: true,
        }
    }

    /// The same success with a different backtrack flag.
    pub fn with_backtrack(mut self, can_backtrack: bool) -> Self {
        self.can_backtrack = can_backtrack;
        self
    }

    /// The same span and flag around a transformed value.
    pub fn map_value<U>(self, f: impl FnOnce(T) -> U) -> Parsed<U> {
        Parsed {
            value: f(self.value),
            start: self.start,
            end: self.end,
            can_backtrack: self.can_backtrack,
        }
    }
}

/// A failed parse attempt.
///
/// Failures are ordinary values, never panics: they travel up through the
/// combinator tree by plain `Err` returns until the caller of the top-level
/// `parse` decides what to do. The failure keeps a reference to the source
/// so `Display` can render the offending line with a position marker, the
/// same way the reader itself locates characters.
#[derive(Debug, Clone)]
pub struct Failure<'src> {
    source: &'src str,
    message: Cow<'static, str>,
    position: Position,
    can_backtrack: bool,
}

impl<'src> Failure<'src> {
    /// A failure at `position` with backtracking permitted.
    pub fn new(source: &'src str, message: impl Into<Cow<'static, str>>, position: Position) -> Self {
        Failure {
            source,
            message: message.into(),
            position,
            can_backtrack: true,
        }
    }

    /// What went wrong, without the location.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Where the attempt died.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Whether an enclosing choice may still try its alternative.
    pub fn can_backtrack(&self) -> bool {
        self.can_backtrack
    }

    /// The source text this failure points into.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// The same failure with a different backtrack flag.
    pub fn with_backtrack(mut self, can_backtrack: bool) -> Self {
        self.can_backtrack = can_backtrack;
        self
    }

    /// Lines of source around the failure, with a pointer under the
    /// offending column. Up to two lines before and after are included.
    fn context_lines(&self) -> Vec<String> {
        let error_line = self.position.line() as usize;
        let first = error_line.saturating_sub(2);
        let mut lines = Vec::new();
        let mut marked = false;

        for (number, content) in self.source.lines().enumerate().map(|(i, l)| (i + 1, l)) {
            if number < first {
                continue;
            }
            if number > error_line + 2 {
                break;
            }
            let prefix = if number == error_line {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            lines.push(format!("{}{}", prefix, content));
            if number == error_line {
                let offset = prefix.chars().count() + self.position.column() as usize - 1;
                lines.push(format!("{}^--- here", " ".repeat(offset)));
                marked = true;
            }
        }

        // The cursor can sit on a line that only begins past the final
        // line break, or the source can be empty.
        if !marked {
            let prefix = format!("  > {} | ", error_line);
            let offset = prefix.chars().count() + self.position.column() as usize - 1;
            lines.push(prefix);
            lines.push(format!("{}^--- here", " ".repeat(offset)));
        }

        lines
    }
}

impl fmt::Display for Failure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "syntax error at line {}, column {}: {}",
            self.position.line(),
            self.position.column(),
            self.message
        )?;
        for line in self.context_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl Error for Failure<'_> {}
