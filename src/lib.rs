//! Draft Anchor - address words in a text buffer by short generated labels
//!
//! This crate provides the anchor addressing engine (tokenize, label,
//! resolve, label-relative edits) and a small Elm-style host that owns a
//! draft buffer and applies the engine's results to it.

pub mod anchor;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod draft;
pub mod editable;
pub mod messages;
pub mod output;
pub mod session;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use anchor::{AnchorError, CaseKind, Selection};
pub use commands::Cmd;
pub use config::DraftConfig;
pub use draft::Draft;
pub use messages::DraftMsg;
