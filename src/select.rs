//! Selection highlights.

use crate::color::Color;
use crate::position::Position;
use crate::theme::Theme;

/// A colored run of characters in the half-open range `[start, end)`.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Highlight {
    pub start: usize,
    pub end: usize,
    pub color: Color,
}

impl Highlight {
    pub fn new(start: usize, end: usize, color: Color) -> Highlight {
        Highlight { start, end, color }
    }
}

/// Rebuilds the highlight table for a buffer of `len` characters.
///
/// The table is ordered, non-overlapping, and covers `[0, len)` without gaps;
/// zero-length runs are omitted, so an empty buffer yields an empty table.
/// A selection exists when `anchor` is valid and differs from `position`, in
/// which case the selected run takes the theme's selection text color and the
/// remainder the plain text color.
pub fn table(anchor: Position, position: Position, len: usize, theme: &Theme) -> Vec<Highlight> {
    let mut table = Vec::new();
    if !anchor.is_valid() || anchor == position {
        if len > 0 {
            table.push(Highlight::new(0, len, theme.text));
        }
    } else {
        let (min, max) = if anchor < position {
            (anchor.index, position.index)
        } else {
            (position.index, anchor.index)
        };
        if min > 0 {
            table.push(Highlight::new(0, min, theme.text));
        }
        table.push(Highlight::new(min, max, theme.selection_text));
        if max < len {
            table.push(Highlight::new(max, len, theme.text));
        }
    }
    table
}
