//! Update function for the Elm-style architecture
//!
//! All draft state transformations flow through [`update`]. Anchor lookups
//! run immediately against the current text; only the overlay recompute is
//! debounced, and a debounce that fires for an old revision is discarded.

use crate::anchor::{AnchorError, CaseKind};
use crate::commands::Cmd;
use crate::draft::Draft;
use crate::editable::TextBufferMut;
use crate::messages::DraftMsg;

/// Apply a message to the draft and return the follow-up command.
///
/// On error the draft is left as it was before the message and no command
/// is produced, so the host never sees a half-applied change.
pub fn update<B: TextBufferMut>(draft: &mut Draft<B>, msg: DraftMsg) -> Result<Cmd, AnchorError> {
    let _span = tracing::debug_span!("update", revision = draft.revision()).entered();
    tracing::debug!(?msg, "update");

    match msg {
        DraftMsg::Show(text) => {
            let labels = draft.show(text.as_deref())?.to_vec();
            Ok(Cmd::Show.and(Cmd::RedrawOverlay(labels)))
        }
        DraftMsg::Hide => {
            draft.hide();
            Ok(Cmd::Hide)
        }
        DraftMsg::SetText(text) => {
            draft.set_text(&text);
            Ok(schedule_overlay(draft).and(Cmd::SetSelection(draft.selection())))
        }
        DraftMsg::Replace { range, text } => {
            draft.replace(range, &text);
            Ok(schedule_overlay(draft))
        }
        DraftMsg::Select {
            start,
            end,
            include_trailing_whitespace,
        } => {
            let selection =
                draft.select_text(&start, end.as_deref(), include_trailing_whitespace)?;
            Ok(Cmd::SetSelection(selection))
        }
        DraftMsg::PositionCaret { anchor, after } => {
            draft.position_caret(&anchor, after)?;
            Ok(Cmd::SetSelection(draft.selection()))
        }
        DraftMsg::ChangeCase { anchor, case } => {
            let case: CaseKind = case.parse()?;
            draft.change_case(&anchor, case)?;
            Ok(schedule_overlay(draft))
        }
        DraftMsg::OverlayReady { revision } => {
            // Skip if the draft has been edited since debounce started
            if revision != draft.revision() {
                tracing::debug!(
                    "Skipping stale overlay refresh: draft revision {} != request revision {}",
                    draft.revision(),
                    revision
                );
                return Ok(Cmd::None);
            }
            let labels = draft.refresh_labels()?.to_vec();
            tracing::debug!("Overlay refreshed with {} labels", labels.len());
            Ok(Cmd::RedrawOverlay(labels))
        }
    }
}

/// Schedule a debounced overlay refresh for the draft's current revision
/// (call after edits)
pub fn schedule_overlay<B: TextBufferMut>(draft: &Draft<B>) -> Cmd {
    Cmd::DebouncedOverlay {
        revision: draft.revision(),
        delay_ms: draft.overlay_debounce_ms(),
    }
}
