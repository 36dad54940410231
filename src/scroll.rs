//! Scrollable containers.

use crate::size::{Point, Rect};
use std::cell::RefCell;
use std::rc::Rc;

/// The scrollable container a text control lives in.
///
/// The offset is the displacement of the content relative to the container's
/// viewport: a control-local point plus the offset yields a content-local
/// point.
pub trait Scroll {
    /// Returns the current scroll offset.
    fn offset(&self) -> Point;

    /// Requests that the content rectangle `rect` be brought into view.
    fn scroll_into_view(&mut self, rect: Rect);
}

pub type ScrollRef = Rc<RefCell<dyn Scroll>>;

/// A scroll container for hosts without scrolling; the offset is fixed and
/// scroll requests are ignored.
pub struct NullScroll {
    offset: Point,
}

impl NullScroll {
    pub fn new() -> NullScroll {
        NullScroll {
            offset: Point::ORIGIN,
        }
    }

    /// Turns this container into a [`ScrollRef`].
    pub fn to_ref(self) -> ScrollRef {
        Rc::new(RefCell::new(self))
    }
}

impl Default for NullScroll {
    fn default() -> NullScroll {
        NullScroll::new()
    }
}

impl Scroll for NullScroll {
    fn offset(&self) -> Point {
        self.offset
    }

    fn scroll_into_view(&mut self, _rect: Rect) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_offset() {
        let mut scroll = NullScroll::default();
        assert_eq!(scroll.offset(), Point::ORIGIN);
        scroll.scroll_into_view(Rect::new(10.0, 10.0, 2.0, 16.0));
        assert_eq!(scroll.offset(), Point::ORIGIN);
    }
}
