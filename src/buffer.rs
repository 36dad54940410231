//! Gap buffer.

use std::cell::RefCell;
use std::cmp;
use std::ops::Range;
use std::rc::Rc;

/// A mutable buffer of characters addressed by absolute position.
///
/// Positions count `char` scalar values, not bytes. Implementations clamp
/// out-of-range positions rather than panic, which keeps every editing
/// operation total.
pub trait TextBuffer {
    /// Returns the number of characters.
    fn len(&self) -> usize;

    /// Returns the character at `pos`, or `None` if `pos` is out of range.
    fn get(&self, pos: usize) -> Option<char>;

    /// Inserts `c` at `pos`, where `pos` is clamped to the buffer size.
    fn insert(&mut self, pos: usize, c: char);

    /// Removes and returns the characters in `range`, where both bounds are
    /// clamped to the buffer size.
    fn remove(&mut self, range: Range<usize>) -> String;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the characters in `range`, clamped to the buffer size.
    fn text(&self, range: Range<usize>) -> String {
        let start = cmp::min(range.start, self.len());
        let end = range.end.clamp(start, self.len());
        (start..end).filter_map(|pos| self.get(pos)).collect()
    }

    /// Returns the entire contents.
    fn to_text(&self) -> String {
        self.text(0..self.len())
    }

    /// Replaces the entire contents with `text`.
    fn set_text(&mut self, text: &str) {
        self.remove(0..self.len());
        for (pos, c) in text.chars().enumerate() {
            self.insert(pos, c);
        }
    }

    /// Returns the position of the first occurrence of `c` at or after `from`.
    fn find(&self, c: char, from: usize) -> Option<usize> {
        (from..self.len()).find(|&pos| self.get(pos) == Some(c))
    }

    /// Returns the position of the last occurrence of `c` at or before `from`,
    /// where `from` is clamped to the last position.
    fn rfind(&self, c: char, from: usize) -> Option<usize> {
        if self.len() == 0 {
            None
        } else {
            let from = cmp::min(from, self.len() - 1);
            (0..=from).rev().find(|&pos| self.get(pos) == Some(c))
        }
    }
}

pub type BufferRef = Rc<RefCell<dyn TextBuffer>>;

/// The default [`TextBuffer`]: a gap buffer whose gap follows the point of
/// mutation, making runs of inserts and deletes at the cursor cheap.
pub struct GapBuffer {
    /// Backing storage whose length is the buffer capacity; the slots at
    /// `[gap, gap + gap_len)` are unoccupied.
    buf: Vec<char>,
    gap: usize,
    gap_len: usize,
}

impl GapBuffer {
    /// Initial capacity of the buffer.
    const INIT_CAPACITY: usize = 256;

    /// Lower bound on the number of slots added when the buffer grows.
    const GROW_CAPACITY: usize = 256;

    pub fn new() -> GapBuffer {
        GapBuffer::with_capacity(Self::INIT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> GapBuffer {
        GapBuffer {
            buf: vec!['\0'; capacity],
            gap: 0,
            gap_len: capacity,
        }
    }

    /// Turns this buffer into a [`BufferRef`].
    pub fn to_ref(self) -> BufferRef {
        Rc::new(RefCell::new(self))
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    fn size(&self) -> usize {
        self.buf.len() - self.gap_len
    }

    /// Maps the buffer position `pos` to its slot in the backing storage.
    fn index_of(&self, pos: usize) -> usize {
        if pos < self.gap {
            pos
        } else {
            pos + self.gap_len
        }
    }

    /// Moves the gap such that it begins at `pos`.
    fn set_pos(&mut self, pos: usize) {
        if pos < self.gap {
            // Shift [pos, gap) to the far side of the gap.
            self.buf.copy_within(pos..self.gap, pos + self.gap_len);
        } else if pos > self.gap {
            // Shift [gap + gap_len, pos + gap_len) to the near side.
            let tail = self.gap + self.gap_len;
            self.buf.copy_within(tail..pos + self.gap_len, self.gap);
        }
        self.gap = pos;
    }

    /// Adds slots to the gap, shifting the tail of the storage right.
    fn grow(&mut self) {
        let grow = cmp::max(self.buf.len(), Self::GROW_CAPACITY);
        let len = self.buf.len();
        let tail = self.gap + self.gap_len;
        self.buf.resize(len + grow, '\0');
        self.buf.copy_within(tail..len, tail + grow);
        self.gap_len += grow;
    }
}

impl TextBuffer for GapBuffer {
    fn len(&self) -> usize {
        self.size()
    }

    fn get(&self, pos: usize) -> Option<char> {
        if pos < self.size() {
            Some(self.buf[self.index_of(pos)])
        } else {
            None
        }
    }

    fn insert(&mut self, pos: usize, c: char) {
        let pos = cmp::min(pos, self.size());
        if self.gap_len == 0 {
            self.grow();
        }
        self.set_pos(pos);
        self.buf[self.gap] = c;
        self.gap += 1;
        self.gap_len -= 1;
    }

    fn remove(&mut self, range: Range<usize>) -> String {
        let start = cmp::min(range.start, self.size());
        let end = range.end.clamp(start, self.size());
        self.set_pos(start);
        let tail = self.gap + self.gap_len;
        let removed = self.buf[tail..tail + (end - start)].iter().collect();
        self.gap_len += end - start;
        removed
    }

    fn text(&self, range: Range<usize>) -> String {
        let start = cmp::min(range.start, self.size());
        let end = range.end.clamp(start, self.size());
        (start..end).map(|pos| self.buf[self.index_of(pos)]).collect()
    }

    fn set_text(&mut self, text: &str) {
        self.buf.clear();
        self.buf.extend(text.chars());
        self.gap = self.buf.len();
        self.gap_len = 0;
    }
}

impl Default for GapBuffer {
    fn default() -> GapBuffer {
        GapBuffer::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer() {
        let buf = GapBuffer::new();
        assert_eq!(buf.len(), 0);
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), GapBuffer::INIT_CAPACITY);
        assert_eq!(buf.get(0), None);
    }

    #[test]
    fn insert_and_get() {
        let mut buf = GapBuffer::new();
        for (pos, c) in "hello".chars().enumerate() {
            buf.insert(pos, c);
        }
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.get(0), Some('h'));
        assert_eq!(buf.get(4), Some('o'));
        assert_eq!(buf.get(5), None);
        assert_eq!(buf.to_text(), "hello");
    }

    #[test]
    fn insert_moves_gap() {
        let mut buf = GapBuffer::new();
        buf.set_text("ad");

        // Middle, then front, then back, each forcing the gap to move.
        buf.insert(1, 'b');
        buf.insert(0, 'z');
        buf.insert(4, 'e');
        buf.insert(3, 'c');
        assert_eq!(buf.to_text(), "zabcde");
    }

    #[test]
    fn insert_clamps_position() {
        let mut buf = GapBuffer::new();
        buf.set_text("ab");
        buf.insert(usize::MAX, 'c');
        assert_eq!(buf.to_text(), "abc");
    }

    #[test]
    fn remove_returns_removed_text() {
        let mut buf = GapBuffer::new();
        buf.set_text("hello world");
        let removed = buf.remove(5..11);
        assert_eq!(removed, " world");
        assert_eq!(buf.to_text(), "hello");
        assert_eq!(buf.len(), 5);
    }

    #[test]
    fn remove_clamps_range() {
        let mut buf = GapBuffer::new();
        buf.set_text("abc");
        assert_eq!(buf.remove(2..100), "c");
        assert_eq!(buf.remove(7..9), "");
        assert_eq!(buf.to_text(), "ab");
    }

    #[test]
    fn remove_then_insert() {
        let mut buf = GapBuffer::new();
        buf.set_text("ab\ncd");
        buf.remove(1..4);
        assert_eq!(buf.to_text(), "ad");
        buf.insert(1, 'x');
        assert_eq!(buf.to_text(), "axd");
    }

    #[test]
    fn growth() {
        let mut buf = GapBuffer::with_capacity(4);
        let text: String = ('a'..='z').collect();
        for (pos, c) in text.chars().enumerate() {
            buf.insert(pos, c);
        }
        assert_eq!(buf.to_text(), text);
        assert!(buf.capacity() >= 26);
    }

    #[test]
    fn growth_preserves_tail() {
        // Fill a small buffer, then keep inserting at the front so the tail
        // must survive each growth.
        let mut buf = GapBuffer::with_capacity(2);
        buf.set_text("yz");
        for c in "xwvu".chars() {
            buf.insert(0, c);
        }
        assert_eq!(buf.to_text(), "uvwxyz");
    }

    #[test]
    fn set_text_replaces_contents() {
        let mut buf = GapBuffer::new();
        buf.set_text("first");
        buf.insert(5, '!');
        buf.set_text("second");
        assert_eq!(buf.to_text(), "second");
        assert_eq!(buf.len(), 6);
    }

    #[test]
    fn text_of_range() {
        let mut buf = GapBuffer::new();
        buf.set_text("ab\ncd");
        buf.set_pos(1);
        assert_eq!(buf.text(0..2), "ab");
        assert_eq!(buf.text(3..5), "cd");
        assert_eq!(buf.text(3..100), "cd");
        assert_eq!(buf.text(4..2), "");
    }

    #[test]
    fn find_and_rfind() {
        let mut buf = GapBuffer::new();
        buf.set_text("ab\ncd\nef");
        assert_eq!(buf.find('\n', 0), Some(2));
        assert_eq!(buf.find('\n', 3), Some(5));
        assert_eq!(buf.find('\n', 6), None);
        assert_eq!(buf.rfind('\n', 7), Some(5));
        assert_eq!(buf.rfind('\n', 4), Some(2));
        assert_eq!(buf.rfind('\n', 1), None);
        assert_eq!(buf.rfind('\n', usize::MAX), Some(5));
        assert_eq!(GapBuffer::new().rfind('\n', 0), None);
    }

    #[test]
    fn unicode_characters() {
        let mut buf = GapBuffer::new();
        buf.set_text("déjà");
        assert_eq!(buf.len(), 4);
        assert_eq!(buf.get(1), Some('é'));
        buf.insert(4, '!');
        assert_eq!(buf.to_text(), "déjà!");
    }
}
