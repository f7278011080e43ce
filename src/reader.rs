use crate::position::Position;

/// A saved reader state: byte offset plus the position bookkeeping that
/// goes with it.
#[derive(Debug, Clone, Copy)]
struct Mark {
    offset: usize,
    position: Position,
}

/// A character reader over a source string with marked backtracking.
///
/// The reader owns a byte offset into `source` and the matching
/// [`Position`]. Callers that may need to rewind push a mark with
/// [`mark`](Reader::mark), rewind to it any number of times with
/// [`reset`](Reader::reset), and discard it with [`unmark`](Reader::unmark).
/// Marks nest in LIFO order; `reset` and `unmark` are no-ops when no mark
/// is active, so unbalanced calls never panic.
///
/// Prefer the guard from [`mark`](Reader::mark) over raw
/// [`push_mark`](Reader::push_mark)/[`unmark`](Reader::unmark) pairs: the
/// guard discards its mark when dropped, which keeps the stack balanced
/// on every exit path.
#[derive(Debug)]
pub struct Reader<'src> {
    source: &'src str,
    offset: usize,
    position: Position,
    marks: Vec<Mark>,
}

impl<'src> Reader<'src> {
    /// A reader at the start of `source` with no marks.
    pub fn new(source: &'src str) -> Self {
        Reader {
            source,
            offset: 0,
            position: Position::start(),
            marks: Vec::new(),
        }
    }

    /// The entire source string.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// The current position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The next character, without consuming it. `None` at end of input.
    pub fn peek(&self) -> Option<char> {
        self.source[self.offset..].chars().next()
    }

    /// Consumes and returns the next character, advancing the position.
    /// Reading `'\n'` moves to the next line; every other character moves
    /// one column. At end of input returns `None` and changes nothing, so
    /// repeated reads at the end are safe.
    pub fn read(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.offset += ch.len_utf8();
        self.position = if ch == '\n' {
            self.position.next_line()
        } else {
            self.position.next_column()
        };
        Some(ch)
    }

    /// Whether the reader has consumed the entire source.
    pub fn at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Pushes a mark at the current state.
    pub fn mark(&mut self) -> MarkGuard<'_, 'src> {
        self.push_mark();
        MarkGuard { reader: self }
    }

    /// Pushes a mark without a guard. Pair with [`unmark`](Reader::unmark).
    pub fn push_mark(&mut self) {
        self.marks.push(Mark {
            offset: self.offset,
            position: self.position,
        });
    }

    /// Rewinds to the most recent mark. The mark stays active, so the
    /// reader can reset to it again. Does nothing when no mark is active.
    pub fn reset(&mut self) {
        if let Some(mark) = self.marks.last().copied() {
            self.offset = mark.offset;
            self.position = mark.position;
        }
    }

    /// Discards the most recent mark without moving. Does nothing when no
    /// mark is active.
    pub fn unmark(&mut self) {
        self.marks.pop();
    }

    /// The text consumed since the most recent mark, as a slice of the
    /// source. Empty when no mark is active.
    pub fn captured(&self) -> &'src str {
        match self.marks.last() {
            Some(mark) => &self.source[mark.offset..self.offset],
            None => "",
        }
    }

    /// How many marks are currently active.
    pub fn mark_depth(&self) -> usize {
        self.marks.len()
    }
}

/// Scope guard returned by [`Reader::mark`]. Dropping it discards the
/// mark, so every exit path out of a combinator leaves the stack balanced.
#[derive(Debug)]
pub struct MarkGuard<'r, 'src> {
    reader: &'r mut Reader<'src>,
}

impl<'r, 'src> MarkGuard<'r, 'src> {
    /// The underlying reader, for parsing past the mark.
    pub fn reader(&mut self) -> &mut Reader<'src> {
        self.reader
    }

    /// Rewinds the reader to this guard's mark.
    pub fn reset(&mut self) {
        self.reader.reset();
    }

    /// The text consumed since this guard's mark.
    pub fn captured(&self) -> &'src str {
        self.reader.captured()
    }
}

impl Drop for MarkGuard<'_, '_> {
    fn drop(&mut self) {
        self.reader.unmark();
    }
}
