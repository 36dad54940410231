//! Line-oriented navigation over text buffers.
//!
//! Lines are the maximal runs of characters between `\n` separators. A cursor
//! sitting on a separator belongs to the line that separator terminates. All
//! functions clamp out-of-range inputs rather than fail.

use crate::buffer::TextBuffer;
use crate::position::Position;
use std::cmp;

/// Returns the position of the separator preceding the line containing `pos`,
/// or `0` if `pos` is on the first line.
///
/// When `pos` itself sits on a separator, the scan starts one character
/// earlier so the result refers to the line that separator terminates.
pub fn prev_break(buf: &dyn TextBuffer, pos: usize) -> usize {
    let from = if buf.get(pos) == Some('\n') {
        pos.saturating_sub(1)
    } else {
        pos
    };
    buf.rfind('\n', from).unwrap_or(0)
}

/// Returns `pos` when it sits on a separator, otherwise the position of the
/// next separator at or after `pos`, or the buffer size if there is none.
pub fn next_break(buf: &dyn TextBuffer, pos: usize) -> usize {
    if buf.get(pos) == Some('\n') {
        pos
    } else {
        buf.find('\n', pos).unwrap_or(buf.len())
    }
}

/// Returns the position of the first character of the line containing `pos`:
/// `0` on the first line, one past the preceding separator otherwise.
pub fn line_start(buf: &dyn TextBuffer, pos: usize) -> usize {
    if pos == 0 {
        0
    } else {
        buf.rfind('\n', pos - 1).map(|p| p + 1).unwrap_or(0)
    }
}

/// Returns the number of characters on the line containing `pos`, excluding
/// the terminating separator.
pub fn line_size(buf: &dyn TextBuffer, pos: usize) -> usize {
    next_break(buf, pos) - line_start(buf, pos)
}

/// Moves `from` by `lines` and `columns` and returns the resulting position,
/// leaving `from` unchanged when it is invalid or the move is pinned at a
/// buffer boundary.
///
/// The line delta is applied first by walking separators from the start of
/// the current line; the prior column is then clamped to the target line's
/// length, so vertical moves preserve the column unless the target line is
/// shorter. The column delta is applied last: each step covers the distance
/// to the nearest separator or line start, and a separator reached with no
/// remaining intra-line distance consumes exactly one unit of the delta while
/// carrying the line counter across the boundary.
pub fn advance(buf: &dyn TextBuffer, from: Position, lines: i32, columns: isize) -> Position {
    if !from.is_valid() {
        return from;
    }
    let len = buf.len();
    if (lines < 0 && from.line == 0)
        || (columns < 0 && from.index == 0)
        || (columns > 0 && from.index == len)
    {
        return from;
    }

    let mut new_line = from.line as i64;
    let mut new_column = from.column as i64;

    // Seek the start of the target line, one separator per step.
    let back = lines < 0;
    let mut line_index = line_start(buf, from.index);
    for _ in 0..lines.unsigned_abs() {
        if new_line < 0 {
            break;
        }
        let start = if back {
            line_index.saturating_sub(1)
        } else {
            line_index
        };
        let mut index = if back {
            prev_break(buf, start)
        } else {
            next_break(buf, start)
        };
        if index == len {
            break;
        } else if start == 0 && back {
            index = 0;
        } else if buf.get(index) == Some('\n') {
            index += 1;
        }
        new_line += if back { -1 } else { 1 };
        line_index = index;
    }

    new_column = cmp::min(new_column, line_size(buf, line_index) as i64);
    let mut new_index = line_index + new_column as usize;

    // Apply the column delta.
    let col_back = columns < 0;
    let mut remaining = columns.unsigned_abs();
    while remaining > 0 {
        let size = line_size(buf, new_index) as i64;
        let index = if col_back {
            prev_break(buf, new_index)
        } else {
            next_break(buf, new_index)
        };
        let mut step = cmp::min(new_index.abs_diff(index), remaining);
        if step == 0 {
            if buf.get(new_index) == Some('\n') {
                step = 1;
            } else {
                break;
            }
        }
        remaining -= step;
        if col_back {
            new_index = new_index.saturating_sub(step);
            new_column -= step as i64;
        } else {
            new_index = cmp::min(new_index + step, len);
            new_column += step as i64;
        }
        if new_column < 0 {
            new_line -= 1;
            new_column = line_size(buf, index) as i64;
        } else if new_column > size {
            new_line += 1;
            new_column = 0;
        }
    }

    Position::new(
        cmp::max(new_line, 0) as u32,
        cmp::max(new_column, 0) as u32,
        new_index,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::GapBuffer;

    fn buf(text: &str) -> GapBuffer {
        let mut buf = GapBuffer::new();
        buf.set_text(text);
        buf
    }

    #[test]
    fn breaks() {
        let buf = buf("ab\ncd\nef");
        assert_eq!(prev_break(&buf, 0), 0);
        assert_eq!(prev_break(&buf, 1), 0);
        assert_eq!(prev_break(&buf, 2), 0); // on the separator
        assert_eq!(prev_break(&buf, 3), 2);
        assert_eq!(prev_break(&buf, 5), 2); // on the separator
        assert_eq!(prev_break(&buf, 7), 5);
        assert_eq!(prev_break(&buf, 8), 5); // end of buffer

        assert_eq!(next_break(&buf, 0), 2);
        assert_eq!(next_break(&buf, 2), 2); // on the separator
        assert_eq!(next_break(&buf, 3), 5);
        assert_eq!(next_break(&buf, 6), 8); // last line has no separator
        assert_eq!(next_break(&buf, 8), 8);
    }

    #[test]
    fn line_starts() {
        let buf = buf("ab\ncd");
        assert_eq!(line_start(&buf, 0), 0);
        assert_eq!(line_start(&buf, 2), 0); // separator belongs to line 0
        assert_eq!(line_start(&buf, 3), 3);
        assert_eq!(line_start(&buf, 5), 3);
    }

    #[test]
    fn line_starts_with_leading_separator() {
        let buf = buf("\nab");
        assert_eq!(line_start(&buf, 0), 0); // empty first line
        assert_eq!(line_start(&buf, 1), 1);
        assert_eq!(line_start(&buf, 3), 1);
    }

    #[test]
    fn line_sizes() {
        let b = buf("ab\ncd");
        for pos in 0..=2 {
            assert_eq!(line_size(&b, pos), 2);
        }
        for pos in 3..=5 {
            assert_eq!(line_size(&b, pos), 2);
        }

        let b = buf("a\n\nb");
        assert_eq!(line_size(&b, 0), 1);
        assert_eq!(line_size(&b, 2), 0); // empty middle line
        assert_eq!(line_size(&b, 3), 1);
    }

    #[test]
    fn column_crosses_separator() {
        let buf = buf("ab\ncd");

        // From the end of line 0, one column consumes the separator.
        let p = advance(&buf, Position::new(0, 2, 2), 0, 1);
        assert_eq!(p, Position::new(1, 0, 3));

        // And back again.
        let p = advance(&buf, p, 0, -1);
        assert_eq!(p, Position::new(0, 2, 2));
    }

    #[test]
    fn column_fall_through() {
        let buf = buf("ab\ncd");
        let p = advance(&buf, Position::ORIGIN, 0, 4);
        assert_eq!(p, Position::new(1, 1, 4));
        let p = advance(&buf, p, 0, -4);
        assert_eq!(p, Position::ORIGIN);
    }

    #[test]
    fn vertical_preserves_column() {
        let buf = buf("ab\ncd");
        let p = advance(&buf, Position::new(0, 1, 1), 1, 0);
        assert_eq!(p, Position::new(1, 1, 4));
        let p = advance(&buf, Position::new(0, 2, 2), 1, 0);
        assert_eq!(p, Position::new(1, 2, 5));
        let p = advance(&buf, p, -1, 0);
        assert_eq!(p, Position::new(0, 2, 2));
    }

    #[test]
    fn vertical_clamps_to_shorter_line() {
        let buf = buf("abcd\nx\nefgh");
        let p = advance(&buf, Position::new(0, 3, 3), 1, 0);
        assert_eq!(p, Position::new(1, 1, 6));
        let p = advance(&buf, Position::new(0, 3, 3), 2, 0);
        assert_eq!(p, Position::new(2, 3, 10));
    }

    #[test]
    fn boundaries_are_no_ops() {
        let buf = buf("ab\ncd");
        let top = Position::new(0, 1, 1);
        assert_eq!(advance(&buf, top, -1, 0), top);
        assert_eq!(advance(&buf, Position::ORIGIN, 0, -1), Position::ORIGIN);
        let end = Position::new(1, 2, 5);
        assert_eq!(advance(&buf, end, 0, 1), end);
        assert_eq!(advance(&buf, end, 1, 0), end);
    }

    #[test]
    fn walks_empty_lines() {
        let buf = buf("a\n\nb");
        let mut p = Position::ORIGIN;
        let expected = [
            Position::new(0, 1, 1),
            Position::new(1, 0, 2),
            Position::new(2, 0, 3),
            Position::new(2, 1, 4),
        ];
        for e in expected {
            p = advance(&buf, p, 0, 1);
            assert_eq!(p, e);
        }
        for e in [
            Position::new(2, 0, 3),
            Position::new(1, 0, 2),
            Position::new(0, 1, 1),
            Position::ORIGIN,
        ] {
            p = advance(&buf, p, 0, -1);
            assert_eq!(p, e);
        }
    }

    #[test]
    fn vertical_through_empty_line() {
        let buf = buf("a\n\nb");
        let p = advance(&buf, Position::new(0, 1, 1), 1, 0);
        assert_eq!(p, Position::new(1, 0, 2));
        let p = advance(&buf, p, 1, 0);
        assert_eq!(p, Position::new(2, 0, 3));
        let p = advance(&buf, p, -2, 0);
        assert_eq!(p, Position::new(0, 0, 0));
    }

    #[test]
    fn oversized_deltas_clamp() {
        let buf = buf("ab\ncd");
        let p = advance(&buf, Position::ORIGIN, 0, 100);
        assert_eq!(p, Position::new(1, 2, 5));
        let p = advance(&buf, p, 0, -100);
        assert_eq!(p, Position::ORIGIN);
        let p = advance(&buf, Position::ORIGIN, 100, 0);
        assert_eq!(p, Position::new(1, 0, 3));
    }

    #[test]
    fn invalid_position_is_unchanged() {
        let buf = buf("ab\ncd");
        assert_eq!(advance(&buf, Position::INVALID, 1, 1), Position::INVALID);
    }
}
