//! Colors and the registry of color names.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::fmt::{self, Display, Formatter};

/// An RGBA color with `8`-bit channels.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const ZERO: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Color {
        Color::ZERO
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

// predefined colors

pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const RED: Color = Color::rgb(205, 49, 49);
pub const GREEN: Color = Color::rgb(13, 188, 121);
pub const YELLOW: Color = Color::rgb(229, 229, 16);
pub const BLUE: Color = Color::rgb(36, 114, 200);
pub const MAGENTA: Color = Color::rgb(188, 63, 188);
pub const CYAN: Color = Color::rgb(17, 168, 205);
pub const WHITE: Color = Color::rgb(229, 229, 229);
pub const GRAY: Color = Color::rgb(102, 102, 102);
pub const BRIGHT_RED: Color = Color::rgb(241, 76, 76);
pub const BRIGHT_GREEN: Color = Color::rgb(35, 209, 139);
pub const BRIGHT_YELLOW: Color = Color::rgb(245, 245, 67);
pub const BRIGHT_BLUE: Color = Color::rgb(59, 142, 234);
pub const BRIGHT_MAGENTA: Color = Color::rgb(214, 112, 214);
pub const BRIGHT_CYAN: Color = Color::rgb(41, 184, 219);
pub const BRIGHT_WHITE: Color = Color::rgb(255, 255, 255);

/// A registry of color names that can be extended with user-defined names.
///
/// Insertion order is retained so user-facing enumerations of the registry
/// remain stable.
#[derive(Debug)]
pub struct Colors {
    colors: IndexMap<String, Color>,
}

impl Colors {
    /// Creates the registry populated with the predefined color names.
    pub fn new() -> Colors {
        let colors = [
            ("black", BLACK),
            ("red", RED),
            ("green", GREEN),
            ("yellow", YELLOW),
            ("blue", BLUE),
            ("magenta", MAGENTA),
            ("cyan", CYAN),
            ("white", WHITE),
            ("gray", GRAY),
            ("bright-red", BRIGHT_RED),
            ("bright-green", BRIGHT_GREEN),
            ("bright-yellow", BRIGHT_YELLOW),
            ("bright-blue", BRIGHT_BLUE),
            ("bright-magenta", BRIGHT_MAGENTA),
            ("bright-cyan", BRIGHT_CYAN),
            ("bright-white", BRIGHT_WHITE),
        ]
        .into_iter()
        .map(|(name, color)| (name.to_string(), color))
        .collect();

        Colors { colors }
    }

    /// Defines the color `name` as `color`, possibly shadowing a predefined name.
    pub fn define(&mut self, name: &str, color: Color) {
        self.colors.insert(name.to_string(), color);
    }

    /// Returns the color associated with `name`.
    pub fn lookup(&self, name: &str) -> Option<Color> {
        self.colors.get(name).copied()
    }

    /// Resolves `value` as either a registered color name or a hex literal of
    /// the form `#rrggbb` or `#rrggbbaa`, returning an error if neither applies.
    pub fn resolve(&self, value: &str) -> Result<Color> {
        if let Some(hex) = value.strip_prefix('#') {
            parse_hex(hex).ok_or_else(|| Error::invalid_color(value))
        } else {
            self.lookup(value)
                .ok_or_else(|| Error::invalid_color(value))
        }
    }
}

impl Default for Colors {
    fn default() -> Colors {
        Colors::new()
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let channel = |i: usize| u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).ok();
    if !hex.is_ascii() {
        None
    } else if hex.len() == 6 {
        Some(Color::rgb(channel(0)?, channel(1)?, channel(2)?))
    } else if hex.len() == 8 {
        Some(Color::rgba(channel(0)?, channel(1)?, channel(2)?, channel(3)?))
    } else {
        None
    }
}
