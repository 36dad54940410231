//! Text measurement.

use std::rc::Rc;

/// Maps text to pixel geometry under the host's font.
///
/// The control re-measures on demand and never caches widths, so a host can
/// swap fonts at any time.
pub trait Measure {
    /// Returns the rendered width of `text` in pixels.
    fn width(&self, text: &str) -> f32;

    /// Returns the fixed height of a line in pixels.
    fn line_height(&self) -> f32;

    /// Returns the rendered width of the single character `c`.
    fn char_width(&self, c: char) -> f32 {
        self.width(c.encode_utf8(&mut [0; 4]))
    }
}

pub type MeasureRef = Rc<dyn Measure>;

/// Fixed-advance measurement, where every character is `advance` wide.
pub struct Monospace {
    advance: f32,
    line_height: f32,
}

impl Monospace {
    pub fn new(advance: f32, line_height: f32) -> Monospace {
        Monospace {
            advance,
            line_height,
        }
    }

    /// Turns this measurement into a [`MeasureRef`].
    pub fn to_ref(self) -> MeasureRef {
        Rc::new(self)
    }
}

impl Measure for Monospace {
    fn width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}
