//! Cursor, selection, and navigation core for text-input controls.
//!
//! The crate is organized around [`input::TextInput`], a retained text control
//! that owns a cursor [`position::Position`], a selection anchor, and a table
//! of [`select::Highlight`] runs over a shared [`buffer::TextBuffer`]. Hosts
//! drive it through the [`control::Control`] event surface and supply geometry,
//! scrolling, and the blink timer through the [`measure`], [`scroll`], and
//! [`timer`] adapter traits.
//!
//! The navigation engine in [`nav`] and the point mapping in [`hit`] are plain
//! functions over the buffer and can be used without the control.

pub mod buffer;
pub mod clip;
pub mod color;
pub mod config;
pub mod control;
pub mod error;
pub mod hit;
pub mod input;
pub mod key;
pub mod measure;
pub mod nav;
pub mod position;
pub mod scroll;
pub mod select;
pub mod size;
pub mod theme;
pub mod timer;
