//! Keys and modifiers.

use std::fmt::{self, Display, Formatter};

/// The shift modifier.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Shift {
    Off,
    On,
}

impl Shift {
    pub fn is_on(&self) -> bool {
        *self == Shift::On
    }
}

impl Display for Shift {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_on() {
            write!(f, "shift-")
        } else {
            Ok(())
        }
    }
}

/// The set of keys recognized by text controls.
///
/// Printable input is not a key: hosts deliver it as text once their own
/// keymap and modifier handling have resolved a character.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Key {
    None,
    Up(Shift),
    Down(Shift),
    Left(Shift),
    Right(Shift),
    Home(Shift),
    End(Shift),
    Enter,
    Backspace,
    Delete,

    /// A control chord such as `ctrl-c`, carrying the lowercase letter.
    Ctrl(char),
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Key::None => write!(f, "none"),
            Key::Up(shift) => write!(f, "{shift}up"),
            Key::Down(shift) => write!(f, "{shift}down"),
            Key::Left(shift) => write!(f, "{shift}left"),
            Key::Right(shift) => write!(f, "{shift}right"),
            Key::Home(shift) => write!(f, "{shift}home"),
            Key::End(shift) => write!(f, "{shift}end"),
            Key::Enter => write!(f, "enter"),
            Key::Backspace => write!(f, "backspace"),
            Key::Delete => write!(f, "delete"),
            Key::Ctrl(c) => write!(f, "ctrl-{c}"),
        }
    }
}
