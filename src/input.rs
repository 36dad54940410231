//! Editable text control.

use crate::buffer::{BufferRef, GapBuffer};
use crate::clip::Clipboard;
use crate::config::ConfigurationRef;
use crate::control::{Button, Control};
use crate::hit;
use crate::key::Key;
use crate::measure::MeasureRef;
use crate::nav;
use crate::position::Position;
use crate::scroll::ScrollRef;
use crate::select::{self, Highlight};
use crate::size::{Point, Rect};
use crate::timer::TimerRef;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, trace};

/// An editable, optionally multi-line text control.
///
/// The control owns the cursor [`Position`], the selection anchor, and the
/// highlight table, and keeps them consistent with the shared buffer across
/// edits, navigation, and mouse interaction. Everything it draws from is
/// re-read on demand: the buffer through its [`BufferRef`] and geometry
/// through the measurement adapter.
///
/// Hosts drive the control through the [`Control`] event surface and observe
/// it through [`position`](TextInput::position), [`highlights`](TextInput::highlights),
/// [`cursor_location`](TextInput::cursor_location), and
/// [`take_damage`](TextInput::take_damage).
pub struct TextInput {
    buffer: BufferRef,
    measure: MeasureRef,
    scroll: ScrollRef,
    timer: TimerRef,
    config: ConfigurationRef,
    clipboard: Clipboard,
    position: Position,
    anchor: Position,
    highlights: Vec<Highlight>,
    multiline: bool,
    read_only: bool,
    focused: bool,
    drag: bool,
    draw_cursor: bool,
    damaged: bool,
}

pub type TextInputRef = Rc<RefCell<TextInput>>;

impl TextInput {
    /// Creates a control over a new empty buffer.
    pub fn new(
        measure: MeasureRef,
        scroll: ScrollRef,
        timer: TimerRef,
        config: ConfigurationRef,
    ) -> TextInput {
        Self::with_buffer(GapBuffer::new().to_ref(), measure, scroll, timer, config)
    }

    /// Creates a control over the shared `buffer`.
    pub fn with_buffer(
        buffer: BufferRef,
        measure: MeasureRef,
        scroll: ScrollRef,
        timer: TimerRef,
        config: ConfigurationRef,
    ) -> TextInput {
        TextInput {
            buffer,
            measure,
            scroll,
            timer,
            config,
            clipboard: Clipboard::new(),
            position: Position::INVALID,
            anchor: Position::INVALID,
            highlights: Vec::new(),
            multiline: false,
            read_only: false,
            focused: false,
            drag: false,
            draw_cursor: false,
            damaged: false,
        }
    }

    /// Turns this control into a [`TextInputRef`].
    pub fn to_ref(self) -> TextInputRef {
        Rc::new(RefCell::new(self))
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn anchor(&self) -> Position {
        self.anchor
    }

    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    pub fn multiline(&self) -> bool {
        self.multiline
    }

    pub fn set_multiline(&mut self, multiline: bool) {
        self.multiline = multiline;
    }

    pub fn read_only(&self) -> bool {
        self.read_only
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Returns the entire contents of the buffer.
    pub fn text(&self) -> String {
        self.buffer.borrow().to_text()
    }

    /// Replaces the contents of the buffer, resetting the cursor to the
    /// origin and discarding any selection.
    pub fn set_text(&mut self, text: &str) {
        debug!(chars = text.chars().count(), "set text");
        self.buffer.borrow_mut().set_text(text);
        self.anchor.invalidate();
        self.position = Position::ORIGIN;
        self.update_highlights();
        self.invalidate();
    }

    /// Gives the control focus, placing the cursor at the origin if it has
    /// never been placed.
    pub fn focus(&mut self) {
        if !self.position.is_valid() {
            self.position = Position::ORIGIN;
        }
        self.focused = true;
        debug!("focused");
        self.reset_blink();
    }

    /// Removes focus, stopping the blink timer. The selection survives.
    pub fn unfocus(&mut self) {
        self.focused = false;
        debug!("unfocused");
        self.timer.borrow_mut().stop();
        self.invalidate();
    }

    /// Moves the cursor by `lines` and `columns`, extending the selection
    /// when `extend` is `true` and discarding it otherwise.
    ///
    /// Regardless of whether the cursor actually moves, the control requests
    /// that the cursor be scrolled into view, rebuilds the highlight table,
    /// and marks itself damaged.
    pub fn move_position(&mut self, lines: i32, columns: isize, extend: bool) {
        if extend {
            if !self.anchor.is_valid() {
                self.anchor = self.position;
            }
        } else {
            self.anchor.invalidate();
        }
        self.position = {
            let buffer = self.buffer.borrow();
            nav::advance(&*buffer, self.position, lines, columns)
        };
        if self.anchor.is_valid() && self.anchor == self.position {
            // A selection collapsed onto its anchor is no selection at all.
            self.anchor.invalidate();
        }
        self.scroll_to_cursor();
        self.update_highlights();
        self.invalidate();
    }

    /// Moves the cursor to the first character of the current line.
    pub fn move_home(&mut self, extend: bool) {
        let home = {
            let buffer = self.buffer.borrow();
            nav::line_start(&*buffer, self.position.index)
        };
        let delta = home as isize - self.position.index as isize;
        self.move_position(0, delta, extend);
    }

    /// Moves the cursor past the last character of the current line.
    pub fn move_end(&mut self, extend: bool) {
        let end = {
            let buffer = self.buffer.borrow();
            nav::next_break(&*buffer, self.position.index)
        };
        let delta = end as isize - self.position.index as isize;
        self.move_position(0, delta, extend);
    }

    /// Inserts `c` at the cursor, first consuming any selection.
    ///
    /// Only alphanumeric characters, spaces, and separators are accepted, and
    /// separators only when the control is multi-line. Rejected characters
    /// and edits on a read-only control are silently dropped.
    pub fn add_text(&mut self, c: char) {
        if self.read_only {
            return;
        }
        if !c.is_alphanumeric() && c != ' ' && c != '\n' {
            trace!(?c, "rejected");
            return;
        }
        if c == '\n' && !self.multiline {
            return;
        }
        if self.anchor.is_valid() {
            let range = self.range_or(0);
            self.delete(range);
        }
        trace!(index = self.position.index, "insert");
        self.buffer.borrow_mut().insert(self.position.index, c);
        self.move_position(0, 1, false);
        self.reset_blink();
    }

    /// Deletes `range` characters relative to the cursor, where the sign of
    /// `range` gives the direction. Both ends of the affected span are
    /// clamped to the buffer.
    ///
    /// For a negative `range` the cursor first moves left over the span, so
    /// the characters removed are those between the cursor's original and
    /// final indexes; for a positive `range` the cursor stays put.
    pub fn delete(&mut self, range: isize) {
        if self.read_only {
            return;
        }
        let index = self.position.index as isize;
        let len = self.buffer.borrow().len() as isize;
        let min = (index + range.min(0)).clamp(0, len) as usize;
        let max = (index + range.max(0)).clamp(0, len) as usize;
        self.move_position(0, range.min(0), false);
        self.buffer.borrow_mut().remove(min..max);
        trace!(min, max, "delete");
        self.update_highlights();
        self.invalidate();
        self.reset_blink();
    }

    /// Returns the signed distance from the cursor to the selection anchor,
    /// or `value` when no selection exists. Feeding the result to
    /// [`delete`](TextInput::delete) removes the selected span.
    pub fn range_or(&self, value: isize) -> isize {
        if self.anchor.is_valid() {
            self.anchor.index as isize - self.position.index as isize
        } else {
            value
        }
    }

    /// Returns the selected text, or `None` when no selection exists.
    pub fn selected_text(&self) -> Option<String> {
        if self.anchor.is_valid() && self.anchor != self.position {
            let (min, max) = if self.anchor < self.position {
                (self.anchor.index, self.position.index)
            } else {
                (self.position.index, self.anchor.index)
            };
            Some(self.buffer.borrow().text(min..max))
        } else {
            None
        }
    }

    /// Copies the selected text to the clipboard.
    pub fn copy(&mut self) {
        if let Some(text) = self.selected_text() {
            self.clipboard.set_text(&text);
        }
    }

    /// Copies the selected text to the clipboard, then deletes it.
    pub fn cut(&mut self) {
        if let Some(text) = self.selected_text() {
            self.clipboard.set_text(&text);
            let range = self.range_or(0);
            self.delete(range);
        }
    }

    /// Inserts the clipboard text at the cursor, one character at a time, so
    /// the input filter and selection consumption apply.
    pub fn paste(&mut self) {
        if let Some(text) = self.clipboard.get_text() {
            debug!(chars = text.chars().count(), "paste");
            for c in text.chars() {
                self.add_text(c);
            }
        }
    }

    /// Toggles cursor visibility; the host calls this on each blink tick.
    pub fn blink(&mut self) {
        self.draw_cursor = !self.draw_cursor;
        self.invalidate();
    }

    pub fn cursor_visible(&self) -> bool {
        self.focused && self.draw_cursor
    }

    /// Returns the content-space location of the cursor.
    pub fn cursor_location(&self) -> Point {
        let buffer = self.buffer.borrow();
        hit::location_of(&*buffer, &*self.measure, self.position)
    }

    /// Returns whether the control needs repainting, clearing the flag.
    pub fn take_damage(&mut self) -> bool {
        std::mem::take(&mut self.damaged)
    }

    fn invalidate(&mut self) {
        self.damaged = true;
    }

    fn update_highlights(&mut self) {
        let len = self.buffer.borrow().len();
        self.highlights = select::table(self.anchor, self.position, len, &self.config.theme);
    }

    fn scroll_to_cursor(&mut self) {
        let rect = {
            let buffer = self.buffer.borrow();
            let loc = hit::location_of(&*buffer, &*self.measure, self.position);
            Rect::new(
                loc.x,
                loc.y,
                self.config.settings.cursor_width,
                self.measure.line_height(),
            )
        };
        self.scroll.borrow_mut().scroll_into_view(rect);
    }

    fn reset_blink(&mut self) {
        self.draw_cursor = true;
        self.timer.borrow_mut().start();
        self.invalidate();
    }

    /// Maps the control-local `point` to a buffer position, accounting for
    /// the scroll offset.
    fn hit_position(&self, point: Point) -> Position {
        let local = point + self.scroll.borrow().offset();
        let buffer = self.buffer.borrow();
        hit::position_at(&*buffer, &*self.measure, local)
    }
}

impl Control for TextInput {
    fn on_focused(&mut self) {
        self.focus();
    }

    fn on_unfocused(&mut self) {
        self.unfocus();
    }

    fn on_key_pressed(&mut self, key: Key) -> bool {
        let handled = match key {
            Key::Up(shift) => {
                self.move_position(-1, 0, shift.is_on());
                true
            }
            Key::Down(shift) => {
                self.move_position(1, 0, shift.is_on());
                true
            }
            Key::Left(shift) => {
                self.move_position(0, -1, shift.is_on());
                true
            }
            Key::Right(shift) => {
                self.move_position(0, 1, shift.is_on());
                true
            }
            Key::Home(shift) => {
                self.move_home(shift.is_on());
                true
            }
            Key::End(shift) => {
                self.move_end(shift.is_on());
                true
            }
            Key::Enter => {
                self.add_text('\n');
                true
            }
            Key::Backspace => {
                let range = self.range_or(-1);
                self.delete(range);
                true
            }
            Key::Delete => {
                let range = self.range_or(1);
                self.delete(range);
                true
            }
            Key::Ctrl('c') => {
                self.copy();
                true
            }
            Key::Ctrl('x') => {
                self.cut();
                true
            }
            Key::Ctrl('v') => {
                self.paste();
                true
            }
            _ => false,
        };
        if handled {
            self.reset_blink();
        }
        handled
    }

    fn on_text(&mut self, c: char) {
        self.add_text(c);
    }

    fn on_mouse_pressed(&mut self, point: Point, button: Button) -> bool {
        if button != Button::Left {
            return false;
        }
        self.position = self.hit_position(point);
        self.anchor = self.position;
        self.drag = true;
        self.update_highlights();
        self.reset_blink();
        true
    }

    fn on_mouse_moved(&mut self, point: Point) {
        if self.drag {
            self.position = self.hit_position(point);
            self.update_highlights();
            // Keep the cursor solid while the selection is being dragged.
            self.draw_cursor = true;
            self.timer.borrow_mut().stop();
            self.invalidate();
        }
    }

    fn on_mouse_released(&mut self, _point: Point, button: Button) {
        if button == Button::Left {
            if self.anchor.is_valid() && self.anchor == self.position {
                self.anchor.invalidate();
            }
            self.drag = false;
        }
    }
}
