//! Control event surface.

use crate::key::Key;
use crate::size::Point;

/// A mouse button.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Button {
    Left,
    Right,
    Middle,
}

/// The event surface a host dispatcher drives.
///
/// The host owns focus routing and event delivery: it decides which control
/// receives keys and text, and delivers mouse events in control-local
/// coordinates. Handlers returning `bool` report whether the event was
/// consumed so the host can continue dispatch otherwise.
pub trait Control {
    /// Called when the control gains focus.
    fn on_focused(&mut self) {}

    /// Called when the control loses focus.
    fn on_unfocused(&mut self) {}

    /// Called when a key is pressed while the control has focus.
    fn on_key_pressed(&mut self, _key: Key) -> bool {
        false
    }

    /// Called when the host resolves printable text input.
    fn on_text(&mut self, _c: char) {}

    /// Called when a mouse button is pressed over the control.
    fn on_mouse_pressed(&mut self, _point: Point, _button: Button) -> bool {
        false
    }

    /// Called when the mouse moves over the control, or anywhere while a drag
    /// initiated on the control is in progress.
    fn on_mouse_moved(&mut self, _point: Point) {}

    /// Called when a mouse button is released.
    fn on_mouse_released(&mut self, _point: Point, _button: Button) {}
}
