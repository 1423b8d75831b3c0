//! Label alphabet for anchors
//!
//! Labels run `a..z` followed by `aa..zz`, giving [`MAX_LABELS`] distinct
//! labels per tokenization pass.

use serde::Serialize;
use std::fmt;

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Number of labels available in one pass (26 single + 676 double)
pub const MAX_LABELS: usize = 26 + 26 * 26;

/// A short lowercase label identifying one word for the duration of a pass.
///
/// Labels are a view onto the current text, not a handle: any edit may
/// reassign them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Label {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Label {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Label for the `index`-th word of a pass, or `None` past [`MAX_LABELS`]
pub fn label_at(index: usize) -> Option<Label> {
    if index < ALPHABET.len() {
        return Some(Label(char::from(ALPHABET[index]).to_string()));
    }
    if index >= MAX_LABELS {
        return None;
    }
    let index = index - ALPHABET.len();
    let first = char::from(ALPHABET[index / ALPHABET.len()]);
    let second = char::from(ALPHABET[index % ALPHABET.len()]);
    Some(Label([first, second].iter().collect()))
}

/// Deterministic label sequence, restarted for every pass
#[derive(Debug, Clone, Default)]
pub struct Labels {
    next: usize,
}

impl Labels {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Iterator for Labels {
    type Item = Label;

    fn next(&mut self) -> Option<Label> {
        let label = label_at(self.next)?;
        self.next += 1;
        Some(label)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = MAX_LABELS.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Labels {}

impl std::iter::FusedIterator for Labels {}
