//! Errors reported by anchor operations

use super::labels::MAX_LABELS;

/// Failures of anchor resolution and label-relative edits.
///
/// All variants are deterministic functions of the input: retrying without
/// changing the text or the argument reproduces the same error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorError {
    /// No word in the current text carries this label
    AnchorNotFound(String),
    /// Case argument was not one of `lower`, `upper` or `title`
    InvalidCaseKind(String),
    /// The text has more words than the label alphabet can address
    OutOfLabels { words: usize, capacity: usize },
}

impl AnchorError {
    pub fn out_of_labels(words: usize) -> Self {
        Self::OutOfLabels {
            words,
            capacity: MAX_LABELS,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::AnchorNotFound(anchor) => {
                format!("No such anchor: {} (labels may have moved, refresh and retry)", anchor)
            }
            Self::InvalidCaseKind(kind) => {
                format!("Unknown case '{}', expected lower, upper or title", kind)
            }
            Self::OutOfLabels { words, capacity } => format!(
                "Too many words to label ({} words, at most {} labels)",
                words, capacity
            ),
        }
    }
}

impl std::fmt::Display for AnchorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AnchorNotFound(anchor) => write!(f, "anchor not found: {}", anchor),
            Self::InvalidCaseKind(kind) => write!(f, "invalid case kind: {}", kind),
            Self::OutOfLabels { words, capacity } => {
                write!(f, "out of labels ({} words, capacity {})", words, capacity)
            }
        }
    }
}

impl std::error::Error for AnchorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            AnchorError::AnchorNotFound("q".into()).to_string(),
            "anchor not found: q"
        );
        assert_eq!(
            AnchorError::out_of_labels(800).to_string(),
            "out of labels (800 words, capacity 702)"
        );
    }

    #[test]
    fn test_user_message_names_the_argument() {
        let msg = AnchorError::InvalidCaseKind("snake".into()).user_message();
        assert!(msg.contains("snake"));
        assert!(msg.contains("title"));
    }
}
