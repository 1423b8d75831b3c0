//! Editable buffers owned by the draft host.
//!
//! The anchor engine only reads text snapshots and returns ranges; the
//! buffers here are where those ranges get applied.
//!
//! - [`TextBuffer`] / [`TextBufferMut`]: Traits abstracting over buffer implementations
//! - [`StringBuffer`]: Buffer backed by `String`
//! - [`RopeBuffer`]: Buffer backed by `ropey::Rope`

mod buffer;

pub use buffer::{RopeBuffer, StringBuffer, TextBuffer, TextBufferMut};
