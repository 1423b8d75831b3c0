//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host performs after an update.

use crate::anchor::{OverlayLabel, Selection};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Show the draft window
    Show,
    /// Hide the draft window
    Hide,
    /// Apply a selection or caret to the host widget
    SetSelection(Selection),
    /// Start debounce timer for overlay recomputation
    /// After delay_ms, sends DraftMsg::OverlayReady
    DebouncedOverlay { revision: u64, delay_ms: u64 },
    /// Draw these label markers, replacing any previous ones
    RedrawOverlay(Vec<OverlayLabel>),
}

impl Cmd {
    /// Combine two optional commands into one
    pub fn and(self, other: Cmd) -> Cmd {
        match (self, other) {
            (Cmd::None, cmd) | (cmd, Cmd::None) => cmd,
            (Cmd::Batch(mut cmds), Cmd::Batch(more)) => {
                cmds.extend(more);
                Cmd::Batch(cmds)
            }
            (Cmd::Batch(mut cmds), cmd) => {
                cmds.push(cmd);
                Cmd::Batch(cmds)
            }
            (cmd, other) => Cmd::Batch(vec![cmd, other]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_skips_none() {
        assert_eq!(Cmd::None.and(Cmd::Show), Cmd::Show);
        assert_eq!(Cmd::Hide.and(Cmd::None), Cmd::Hide);
    }

    #[test]
    fn test_and_flattens_batches() {
        let cmd = Cmd::Show.and(Cmd::Hide).and(Cmd::Show);
        assert_eq!(cmd, Cmd::Batch(vec![Cmd::Show, Cmd::Hide, Cmd::Show]));
    }
}
