//! Message types for the Elm-style architecture
//!
//! All draft state changes flow through these message types.

use std::ops::Range;

/// Messages handled by [`crate::update::update`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftMsg {
    /// Show the draft, replacing its contents when text is given
    Show(Option<String>),
    /// Hide the draft
    Hide,
    /// Replace the whole contents
    SetText(String),
    /// Replace a character range (typed input, paste, delete)
    Replace { range: Range<usize>, text: String },
    /// Select by anchor, optionally through a second anchor
    Select {
        start: String,
        end: Option<String>,
        include_trailing_whitespace: bool,
    },
    /// Place the caret before (or after) an anchor's word
    PositionCaret { anchor: String, after: bool },
    /// Change the case of an anchor's word; `case` is parsed on arrival
    ChangeCase { anchor: String, case: String },
    /// Overlay debounce timer fired for this revision
    OverlayReady { revision: u64 },
}
