//! Anchor addressing engine
//!
//! Turns a text snapshot into labelled words ("anchors") and resolves labels
//! back to character ranges, so a control surface can say "select b to f"
//! instead of dealing in offsets.
//!
//! # Architecture
//!
//! - [`tokenize`]: whitespace state machine producing [`WordBounds`]
//! - [`Labels`]: the `a..z, aa..zz` label alphabet
//! - [`anchors`]: tokenization paired with labels
//! - [`resolve`], [`select_range`], [`position_caret`], [`change_case`],
//!   [`overlay`]: the label-relative operations
//!
//! Nothing is cached. Each call is a pure function of the text it receives,
//! which makes the engine safe to call from any thread with an immutable
//! snapshot.
//!
//! # Example
//!
//! ```
//! use draft_anchor::anchor::{change_case, select_range, CaseKind, Selection};
//!
//! let sel = select_range("one two three", "a", Some("b"), true).unwrap();
//! assert_eq!(sel, Selection::range(0, 8));
//!
//! let edit = change_case("abc def", "b", CaseKind::Upper).unwrap();
//! assert_eq!(edit.range, 4..7);
//! assert_eq!(edit.replacement, "DEF");
//! ```

mod error;
mod labels;
mod resolver;
mod selection;
mod tokenizer;

pub use error::AnchorError;
pub use labels::{label_at, Label, Labels, MAX_LABELS};
pub use resolver::{
    anchors, change_case, overlay, position_caret, resolve, select_range, Anchors, CaseEdit,
    CaseKind, OverlayLabel, WordSpan,
};
pub use selection::Selection;
pub use tokenizer::{tokenize, Tokens, WordBounds};
