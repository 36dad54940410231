//! Mapping between pixel points and buffer positions.

use crate::buffer::TextBuffer;
use crate::measure::Measure;
use crate::nav;
use crate::position::Position;
use crate::size::Point;

/// Returns the position nearest to `point`, which is in content space.
///
/// The target line is the one whose vertical span contains `point.y`; running
/// out of lines first yields the last line. Within the line, the result is
/// the first character whose right edge lies strictly beyond `point.x`, so a
/// point exactly on a glyph boundary selects the following character and the
/// mapping stays the exact inverse of [`location_of`]. Points beyond the end
/// of the line land on its separator, or the end of the buffer on the last
/// line.
pub fn position_at(buf: &dyn TextBuffer, measure: &dyn Measure, point: Point) -> Position {
    let line_height = measure.line_height();
    let mut line = 0;
    let mut column = 0;
    let mut start = 0;
    let mut bottom = line_height;
    let mut index = loop {
        if bottom > point.y {
            break start;
        }
        match buf.find('\n', start) {
            Some(pos) => {
                line += 1;
                start = pos + 1;
                bottom += line_height;
            }
            None => {
                column = (buf.len() - start) as u32;
                break buf.len();
            }
        }
    };

    let mut right = 0.0;
    while index < buf.len() {
        let c = match buf.get(index) {
            Some('\n') | None => break,
            Some(c) => c,
        };
        right += measure.char_width(c);
        if right > point.x {
            break;
        }
        index += 1;
        column += 1;
    }

    Position::new(line, column, index)
}

/// Returns the content-space location of `position`: the measured width of
/// the line's prefix and the line's top edge. An invalid position maps to the
/// origin.
pub fn location_of(buf: &dyn TextBuffer, measure: &dyn Measure, position: Position) -> Point {
    if !position.is_valid() {
        return Point::ORIGIN;
    }
    let start = nav::line_start(buf, position.index);
    let x = measure.width(&buf.text(start..position.index));
    let y = position.line as f32 * measure.line_height();
    Point::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::GapBuffer;
    use crate::measure::Monospace;

    const ADVANCE: f32 = 8.0;
    const LINE_HEIGHT: f32 = 16.0;

    fn fixture(text: &str) -> (GapBuffer, Monospace) {
        let mut buf = GapBuffer::new();
        buf.set_text(text);
        (buf, Monospace::new(ADVANCE, LINE_HEIGHT))
    }

    /// Walks every valid position of `text` by single-column moves and checks
    /// that `location_of` and `position_at` are exact inverses.
    fn assert_round_trip(text: &str) {
        let (buf, measure) = fixture(text);
        let mut p = Position::ORIGIN;
        loop {
            let loc = location_of(&buf, &measure, p);
            assert_eq!(position_at(&buf, &measure, loc), p, "at {p}");
            let next = nav::advance(&buf, p, 0, 1);
            if next == p {
                break;
            }
            p = next;
        }
    }

    #[test]
    fn round_trip() {
        assert_round_trip("ab\ncd");
        assert_round_trip("abcd\nx\n\nefgh");
        assert_round_trip("a");
        assert_round_trip("");
    }

    #[test]
    fn locations() {
        let (buf, measure) = fixture("ab\ncd");
        let loc = location_of(&buf, &measure, Position::ORIGIN);
        assert_eq!(loc, Point::ORIGIN);
        let loc = location_of(&buf, &measure, Position::new(0, 2, 2));
        assert_eq!(loc, Point::new(2.0 * ADVANCE, 0.0));
        let loc = location_of(&buf, &measure, Position::new(1, 1, 4));
        assert_eq!(loc, Point::new(ADVANCE, LINE_HEIGHT));
        assert_eq!(
            location_of(&buf, &measure, Position::INVALID),
            Point::ORIGIN
        );
    }

    #[test]
    fn hits_inside_glyphs() {
        let (buf, measure) = fixture("ab\ncd");

        // Middle of 'b' on line 0.
        let p = position_at(&buf, &measure, Point::new(1.5 * ADVANCE, 2.0));
        assert_eq!(p, Position::new(0, 1, 1));

        // Middle of 'd' on line 1.
        let p = position_at(&buf, &measure, Point::new(1.5 * ADVANCE, LINE_HEIGHT + 2.0));
        assert_eq!(p, Position::new(1, 1, 4));
    }

    #[test]
    fn hits_past_line_end() {
        let (buf, measure) = fixture("ab\ncd");

        // Far right on line 0 lands on the separator.
        let p = position_at(&buf, &measure, Point::new(100.0, 0.0));
        assert_eq!(p, Position::new(0, 2, 2));

        // Far right on the last line lands at the end of the buffer.
        let p = position_at(&buf, &measure, Point::new(100.0, LINE_HEIGHT));
        assert_eq!(p, Position::new(1, 2, 5));
    }

    #[test]
    fn hits_below_text() {
        let (buf, measure) = fixture("ab\ncd");
        let p = position_at(&buf, &measure, Point::new(0.0, 100.0 * LINE_HEIGHT));
        assert_eq!(p, Position::new(1, 2, 5));
    }

    #[test]
    fn hits_empty_buffer() {
        let (buf, measure) = fixture("");
        let p = position_at(&buf, &measure, Point::new(50.0, 50.0));
        assert_eq!(p, Position::ORIGIN);
    }
}
