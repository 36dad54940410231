//! Blink timer.

use std::cell::RefCell;
use std::rc::Rc;

/// A repeating, cancelable timer owned by the host's scheduler.
///
/// The control only arms and disarms the timer; the host invokes
/// [`TextInput::blink`](crate::input::TextInput::blink) on each tick. The
/// interval comes from [`Settings::blink_interval`](crate::config::Settings).
pub trait Timer {
    /// Arms the timer, restarting the interval if it is already armed.
    fn start(&mut self);

    /// Disarms the timer.
    fn stop(&mut self);
}

pub type TimerRef = Rc<RefCell<dyn Timer>>;

/// A timer for hosts without a scheduler, tracking only the armed state.
#[derive(Default)]
pub struct NullTimer {
    armed: bool,
}

impl NullTimer {
    pub fn new() -> NullTimer {
        NullTimer { armed: false }
    }

    /// Turns this timer into a [`TimerRef`].
    pub fn to_ref(self) -> TimerRef {
        Rc::new(RefCell::new(self))
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

impl Timer for NullTimer {
    fn start(&mut self) {
        self.armed = true;
    }

    fn stop(&mut self) {
        self.armed = false;
    }
}
