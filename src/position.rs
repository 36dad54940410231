//! Cursor positions.

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

/// A position in a text buffer denoted by _line_, _column_, and the absolute
/// character _index_, all `0`-based.
///
/// `index` is authoritative; `line` and `column` are its row and column under
/// the buffer's current layout of `\n` separators. Either all three fields are
/// consistent with the live buffer or all three simultaneously hold the
/// sentinel that marks the position [invalid](Position::is_valid).
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub index: usize,
}

impl Position {
    /// A position of (`0`, `0`, `0`).
    pub const ORIGIN: Position = Position::new(0, 0, 0);

    /// The invalid position, with the sentinel in all three fields.
    pub const INVALID: Position = Position {
        line: u32::MAX,
        column: u32::MAX,
        index: usize::MAX,
    };

    pub const fn new(line: u32, column: u32, index: usize) -> Position {
        Position {
            line,
            column,
            index,
        }
    }

    /// Resets this position to [`INVALID`](Position::INVALID).
    pub fn invalidate(&mut self) {
        *self = Position::INVALID;
    }

    pub fn is_valid(&self) -> bool {
        self.index != Position::INVALID.index
    }
}

impl PartialOrd for Position {
    /// Orders by line, then column.
    ///
    /// Ordering is only meaningful between two valid positions derived from
    /// the same buffer.
    fn partial_cmp(&self, other: &Position) -> Option<Ordering> {
        debug_assert!(self.is_valid() && other.is_valid());
        Some((self.line, self.column).cmp(&(other.line, other.column)))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{},{}@{}", self.line, self.column, self.index)
        } else {
            write!(f, "invalid")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity() {
        let mut p = Position::new(1, 2, 5);
        assert!(p.is_valid());
        p.invalidate();
        assert!(!p.is_valid());
        assert_eq!(p, Position::INVALID);
        assert!(!Position::INVALID.is_valid());
        assert!(Position::ORIGIN.is_valid());
    }

    #[test]
    fn ordering() {
        let a = Position::new(0, 5, 5);
        let b = Position::new(1, 0, 6);
        let c = Position::new(1, 3, 9);
        assert!(a < b);
        assert!(b < c);
        assert!(a < c);
        assert!(!(c < c));
    }
}
