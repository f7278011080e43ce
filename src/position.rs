use std::fmt;

/// A location in the character stream.
///
/// `index` counts characters from the start of the source (not bytes),
/// `line` and `column` are both 1-based. Positions are plain values: a
/// reader never mutates one in place, it replaces its current position
/// with the advanced copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    index: usize,
    line: u32,
    column: u32,
}

impl Position {
    /// The position of the very first character: index 0, line 1, column 1.
    pub fn start() -> Self {
        Position {
            index: 0,
            line: 1,
            column: 1,
        }
    }

    /// Character offset from the start of the source.
    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based line number.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column number.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// The position one character further on the same line.
    pub fn next_column(self) -> Self {
        Position {
            index: self.index + 1,
            line: self.line,
            column: self.column + 1,
        }
    }

    /// The position just past a line break: next line, column reset to 1.
    pub fn next_line(self) -> Self {
        Position {
            index: self.index + 1,
            line: self.line + 1,
            column: 1,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position() {
        let pos = Position::start();
        assert_eq!(pos.index(), 0);
        assert_eq!(pos.line(), 1);
        assert_eq!(pos.column(), 1);
    }

    #[test]
    fn test_next_column() {
        let pos = Position::start().next_column().next_column();
        assert_eq!(pos.index(), 2);
        assert_eq!(pos.line(), 1);
        assert_eq!(pos.column(), 3);
    }

    #[test]
    fn test_next_line_resets_column() {
        let pos = Position::start().next_column().next_line();
        assert_eq!(pos.index(), 2);
        assert_eq!(pos.line(), 2);
        assert_eq!(pos.column(), 1);
    }

    #[test]
    fn test_index_advances_across_lines() {
        let pos = Position::start().next_line().next_line().next_column();
        assert_eq!(pos.index(), 3);
        assert_eq!(pos.line(), 3);
        assert_eq!(pos.column(), 2);
    }

    #[test]
    fn test_display() {
        let pos = Position::start().next_line().next_column();
        assert_eq!(format!("{}", pos), "line 2, column 2");
    }
}
