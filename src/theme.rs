//! Color themes.

use crate::color::{self, Color};
use std::rc::Rc;

/// The colors a text control draws with.
#[derive(Clone, Debug)]
pub struct Theme {
    /// Background of the control.
    pub background: Color,

    /// Text outside any selection.
    pub text: Color,

    /// Background of the selected range.
    pub selection: Color,

    /// Text inside the selected range.
    pub selection_text: Color,

    /// The cursor indicator.
    pub cursor: Color,

    /// Outline drawn while the control has focus.
    pub focused_outline: Color,
}

pub type ThemeRef = Rc<Theme>;

impl Theme {
    /// Turns this theme into a [`ThemeRef`].
    pub fn to_ref(self) -> ThemeRef {
        Rc::new(self)
    }
}

impl Default for Theme {
    fn default() -> Theme {
        Theme {
            background: Color::rgb(30, 30, 30),
            text: color::WHITE,
            selection: Color::rgb(38, 79, 120),
            selection_text: color::BRIGHT_WHITE,
            cursor: color::BRIGHT_WHITE,
            focused_outline: color::BRIGHT_BLUE,
        }
    }
}
