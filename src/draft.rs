//! The draft: a text buffer addressed by anchors
//!
//! `Draft` is the host side of the anchor engine. It owns the buffer and the
//! selection, asks the engine for ranges against the current contents, and
//! applies them. Every edit bumps `revision`, which is how stale overlay
//! refreshes get recognized and dropped.

use std::ops::Range;

use crate::anchor::{self, AnchorError, CaseEdit, CaseKind, OverlayLabel, Selection};
use crate::editable::{RopeBuffer, TextBuffer, TextBufferMut};

/// Default delay between the last edit and an overlay recompute
pub const OVERLAY_DEBOUNCE_MS: u64 = 150;

#[derive(Debug, Clone)]
pub struct Draft<B: TextBufferMut = RopeBuffer> {
    buffer: B,
    selection: Selection,
    visible: bool,
    revision: u64,
    /// Last computed overlay and the revision it was computed for
    labels: Vec<OverlayLabel>,
    labels_revision: Option<u64>,
    overlay_debounce_ms: u64,
}

impl Draft<RopeBuffer> {
    /// Create a hidden draft holding `text`
    pub fn with_text(text: &str) -> Self {
        Self::new(RopeBuffer::from_text(text))
    }
}

impl Default for Draft<RopeBuffer> {
    fn default() -> Self {
        Self::new(RopeBuffer::new())
    }
}

impl<B: TextBufferMut> Draft<B> {
    pub fn new(buffer: B) -> Self {
        Self {
            buffer,
            selection: Selection::default(),
            visible: false,
            revision: 0,
            labels: Vec::new(),
            labels_revision: None,
            overlay_debounce_ms: OVERLAY_DEBOUNCE_MS,
        }
    }

    /// Set the overlay debounce delay (builder pattern)
    pub fn with_overlay_debounce_ms(mut self, delay_ms: u64) -> Self {
        self.overlay_debounce_ms = delay_ms;
        self
    }

    pub fn overlay_debounce_ms(&self) -> u64 {
        self.overlay_debounce_ms
    }

    /// Current contents of the draft
    pub fn text(&self) -> String {
        self.buffer.content()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Selected text, empty for a caret
    pub fn selected_text(&self) -> String {
        self.buffer
            .slice(self.selection.left()..self.selection.right())
    }

    /// Caret (right edge of the selection) as zero-based (line, column)
    pub fn caret_position(&self) -> (usize, usize) {
        self.buffer.offset_to_position(self.selection.right())
    }

    /// Show the draft and compute its overlay. `None` keeps the old
    /// contents, `Some` replaces them.
    ///
    /// The labels are computed before anything changes, so a text with more
    /// words than labels leaves the draft exactly as it was.
    pub fn show(&mut self, text: Option<&str>) -> Result<&[OverlayLabel], AnchorError> {
        let labels = match text {
            Some(text) => anchor::overlay(text)?,
            None => anchor::overlay(&self.text())?,
        };
        if let Some(text) = text {
            self.set_text(text);
        }
        self.labels = labels;
        self.labels_revision = Some(self.revision);
        self.visible = true;
        tracing::debug!(revision = self.revision, "draft shown");
        Ok(&self.labels)
    }

    pub fn hide(&mut self) {
        self.visible = false;
        tracing::debug!("draft hidden");
    }

    /// Replace the whole contents and reset the selection
    pub fn set_text(&mut self, text: &str) {
        self.buffer.set_content(text);
        self.selection = Selection::caret(self.buffer.len_chars());
        self.bump_revision();
    }

    /// Replace a character range, keeping the selection inside the buffer
    pub fn replace(&mut self, range: Range<usize>, text: &str) {
        self.buffer.replace(range, text);
        self.selection = self.selection.clamp(self.buffer.len_chars());
        self.bump_revision();
    }

    /// Move the caret to a character offset (clamped)
    pub fn set_caret(&mut self, offset: usize) {
        self.selection = Selection::caret(offset.min(self.buffer.len_chars()));
    }

    /// Select the word at `start`, or from `start` through `end`.
    ///
    /// With `include_trailing_whitespace` the following whitespace is
    /// selected too, which is what a delete wants.
    pub fn select_text(
        &mut self,
        start: &str,
        end: Option<&str>,
        include_trailing_whitespace: bool,
    ) -> Result<Selection, AnchorError> {
        let selection =
            anchor::select_range(&self.text(), start, end, include_trailing_whitespace)?;
        tracing::debug!(start, ?end, ?selection, "select_text");
        self.selection = selection;
        Ok(selection)
    }

    /// Put the caret before the anchor's word, or directly after it
    pub fn position_caret(&mut self, anchor: &str, after: bool) -> Result<usize, AnchorError> {
        let offset = anchor::position_caret(&self.text(), anchor, after)?;
        tracing::debug!(anchor, after, offset, "position_caret");
        self.selection = Selection::caret(offset);
        Ok(offset)
    }

    /// Change the case of the anchor's word in place
    pub fn change_case(&mut self, anchor: &str, case: CaseKind) -> Result<CaseEdit, AnchorError> {
        let edit = anchor::change_case(&self.text(), anchor, case)?;
        tracing::debug!(anchor, case = case.as_str(), range = ?edit.range, "change_case");
        self.replace(edit.range.clone(), &edit.replacement);
        Ok(edit)
    }

    /// Recompute the overlay for the current contents
    pub fn refresh_labels(&mut self) -> Result<&[OverlayLabel], AnchorError> {
        self.labels = anchor::overlay(&self.text())?;
        self.labels_revision = Some(self.revision);
        Ok(&self.labels)
    }

    /// The last computed overlay, which may lag behind the text
    pub fn labels(&self) -> &[OverlayLabel] {
        &self.labels
    }

    /// Whether [`Draft::labels`] was computed for the current revision
    pub fn labels_are_current(&self) -> bool {
        self.labels_revision == Some(self.revision)
    }

    fn bump_revision(&mut self) {
        self.revision += 1;
    }
}
