//! Selection produced by anchor operations

use serde::Serialize;

/// Either a caret at a single offset or a character range with `left <= right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Selection {
    Caret { offset: usize },
    Range { left: usize, right: usize },
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Caret { offset: 0 }
    }
}

impl Selection {
    pub fn caret(offset: usize) -> Self {
        Selection::Caret { offset }
    }

    /// Create a range, swapping the edges if given in reverse
    pub fn range(a: usize, b: usize) -> Self {
        Selection::Range {
            left: a.min(b),
            right: a.max(b),
        }
    }

    pub fn left(&self) -> usize {
        match *self {
            Selection::Caret { offset } => offset,
            Selection::Range { left, .. } => left,
        }
    }

    pub fn right(&self) -> usize {
        match *self {
            Selection::Caret { offset } => offset,
            Selection::Range { right, .. } => right,
        }
    }

    /// Clamp both edges to a buffer of `len` characters
    pub fn clamp(self, len: usize) -> Self {
        match self {
            Selection::Caret { offset } => Selection::caret(offset.min(len)),
            Selection::Range { left, right } => Selection::range(left.min(len), right.min(len)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_normalizes() {
        let sel = Selection::range(8, 3);
        assert_eq!(sel.left(), 3);
        assert_eq!(sel.right(), 8);
    }

    #[test]
    fn test_caret_edges() {
        let sel = Selection::caret(4);
        assert!(matches!(sel, Selection::Caret { offset: 4 }));
        assert_eq!((sel.left(), sel.right()), (4, 4));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(Selection::range(2, 10).clamp(5), Selection::range(2, 5));
        assert_eq!(Selection::caret(9).clamp(3), Selection::caret(3));
    }
}
