//! Anchor resolution and label-relative edits
//!
//! Every function here recomputes tokenization and labels from the text it
//! is handed, so a result can never refer to a since-edited buffer.

use std::ops::Range;
use std::str::FromStr;

use serde::Serialize;

use super::error::AnchorError;
use super::labels::{Label, Labels};
use super::selection::Selection;
use super::tokenizer::{tokenize, Tokens, WordBounds};

/// One labelled word of a tokenization pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordSpan {
    pub anchor: Label,
    pub start: usize,
    pub word_end: usize,
    pub boundary_end: usize,
}

impl WordSpan {
    pub fn bounds(&self) -> WordBounds {
        WordBounds {
            start: self.start,
            word_end: self.word_end,
            boundary_end: self.boundary_end,
        }
    }
}

/// A label marker for rendering: the word's range and its anchor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayLabel {
    pub range: Range<usize>,
    pub anchor: Label,
}

/// Case transform applied by [`change_case`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseKind {
    Lower,
    Upper,
    /// Uppercase the first character only; the rest is left untouched
    Title,
}

impl CaseKind {
    pub fn apply(self, word: &str) -> String {
        match self {
            CaseKind::Lower => word.to_lowercase(),
            CaseKind::Upper => word.to_uppercase(),
            CaseKind::Title => {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CaseKind::Lower => "lower",
            CaseKind::Upper => "upper",
            CaseKind::Title => "title",
        }
    }
}

impl FromStr for CaseKind {
    type Err = AnchorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lower" => Ok(CaseKind::Lower),
            "upper" => Ok(CaseKind::Upper),
            "title" => Ok(CaseKind::Title),
            other => Err(AnchorError::InvalidCaseKind(other.to_string())),
        }
    }
}

/// Replacement instruction returned by [`change_case`]; the caller applies it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseEdit {
    pub range: Range<usize>,
    pub replacement: String,
}

/// Lazy labelled tokenization. Created by [`anchors`].
///
/// Words past the end of the label alphabet yield [`AnchorError::OutOfLabels`].
#[derive(Debug, Clone)]
pub struct Anchors<'a> {
    text: &'a str,
    tokens: Tokens<'a>,
    labels: Labels,
    word_count: Option<usize>,
}

/// Tokenize `text` and pair each word with its label
pub fn anchors(text: &str) -> Anchors<'_> {
    Anchors {
        text,
        tokens: tokenize(text),
        labels: Labels::new(),
        word_count: None,
    }
}

impl Iterator for Anchors<'_> {
    type Item = Result<WordSpan, AnchorError>;

    fn next(&mut self) -> Option<Self::Item> {
        let bounds = self.tokens.next()?;
        let Some(anchor) = self.labels.next() else {
            let text = self.text;
            let words = *self.word_count.get_or_insert_with(|| tokenize(text).count());
            return Some(Err(AnchorError::out_of_labels(words)));
        };
        Some(Ok(WordSpan {
            anchor,
            start: bounds.start,
            word_end: bounds.word_end,
            boundary_end: bounds.boundary_end,
        }))
    }
}

/// Find the span carrying `anchor` in the current text
pub fn resolve(text: &str, anchor: &str) -> Result<WordBounds, AnchorError> {
    let found = anchors(text)
        .map_while(Result::ok)
        .find(|span| span.anchor == anchor)
        .map(|span| span.bounds());

    match found {
        Some(bounds) => {
            tracing::trace!(anchor, ?bounds, "resolved anchor");
            Ok(bounds)
        }
        None => Err(AnchorError::AnchorNotFound(anchor.to_string())),
    }
}

/// Select from the start of `start_anchor` to the end of `end_anchor`.
///
/// `end_anchor` defaults to `start_anchor`. With `include_trailing_whitespace`
/// the right edge is the end of the whitespace after the last word, so a
/// delete does not leave a double space behind. Anchors given in reverse
/// order select the same range as in forward order.
pub fn select_range(
    text: &str,
    start_anchor: &str,
    end_anchor: Option<&str>,
    include_trailing_whitespace: bool,
) -> Result<Selection, AnchorError> {
    let mut first = resolve(text, start_anchor)?;
    let mut last = match end_anchor {
        Some(end) => resolve(text, end)?,
        None => first,
    };
    if last.start < first.start {
        std::mem::swap(&mut first, &mut last);
    }

    let right = if include_trailing_whitespace {
        last.boundary_end
    } else {
        last.word_end
    };
    Ok(Selection::range(first.start, right))
}

/// Caret offset before the anchor's word, or directly after it when `after`
pub fn position_caret(text: &str, anchor: &str, after: bool) -> Result<usize, AnchorError> {
    let bounds = resolve(text, anchor)?;
    Ok(if after { bounds.word_end } else { bounds.start })
}

/// Compute the replacement that changes the case of the anchor's word
pub fn change_case(text: &str, anchor: &str, case: CaseKind) -> Result<CaseEdit, AnchorError> {
    let bounds = resolve(text, anchor)?;
    let word: String = text
        .chars()
        .skip(bounds.start)
        .take(bounds.word_len())
        .collect();

    Ok(CaseEdit {
        range: bounds.start..bounds.word_end,
        replacement: case.apply(&word),
    })
}

/// Every word's range and label, for drawing label markers
pub fn overlay(text: &str) -> Result<Vec<OverlayLabel>, AnchorError> {
    anchors(text)
        .map(|span| {
            span.map(|span| OverlayLabel {
                range: span.start..span.word_end,
                anchor: span.anchor,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(text: &str) -> Vec<(String, usize, usize, usize)> {
        anchors(text)
            .map(|s| {
                let s = s.unwrap();
                (s.anchor.to_string(), s.start, s.word_end, s.boundary_end)
            })
            .collect()
    }

    fn tuple(label: &str, start: usize, word_end: usize, boundary_end: usize) -> (String, usize, usize, usize) {
        (label.to_string(), start, word_end, boundary_end)
    }

    #[test]
    fn test_anchor_scenarios() {
        assert_eq!(spans("hello"), vec![tuple("a", 0, 5, 5)]);
        assert_eq!(
            spans("two words"),
            vec![tuple("a", 0, 3, 4), tuple("b", 4, 9, 9)]
        );
        assert_eq!(
            spans("two  words"),
            vec![tuple("a", 0, 3, 5), tuple("b", 5, 10, 10)]
        );
        assert_eq!(
            spans("line1\nline2"),
            vec![tuple("a", 0, 5, 6), tuple("b", 6, 11, 11)]
        );
    }

    #[test]
    fn test_resolve_not_found() {
        assert_eq!(
            resolve("one two", "c"),
            Err(AnchorError::AnchorNotFound("c".into()))
        );
        // Labels are always lowercase; no normalization happens here
        assert_eq!(
            resolve("one two", "A"),
            Err(AnchorError::AnchorNotFound("A".into()))
        );
    }

    #[test]
    fn test_select_range_with_trailing_whitespace() {
        assert_eq!(
            select_range("one two three", "a", Some("b"), true),
            Ok(Selection::range(0, 8))
        );
    }

    #[test]
    fn test_select_range_single_anchor() {
        assert_eq!(
            select_range("one two three", "b", None, false),
            Ok(Selection::range(4, 7))
        );
        assert_eq!(
            select_range("one two three", "b", None, true),
            Ok(Selection::range(4, 8))
        );
    }

    #[test]
    fn test_select_range_reversed_anchors() {
        assert_eq!(
            select_range("one two three", "c", Some("a"), false),
            select_range("one two three", "a", Some("c"), false)
        );
    }

    #[test]
    fn test_select_range_missing_end_anchor() {
        assert_eq!(
            select_range("one two", "a", Some("z"), false),
            Err(AnchorError::AnchorNotFound("z".into()))
        );
    }

    #[test]
    fn test_position_caret() {
        assert_eq!(position_caret("one two", "b", false), Ok(4));
        assert_eq!(position_caret("one two", "b", true), Ok(7));
        assert_eq!(position_caret("one two  ", "a", true), Ok(3));
    }

    #[test]
    fn test_change_case_upper() {
        assert_eq!(
            change_case("abc def", "b", CaseKind::Upper),
            Ok(CaseEdit {
                range: 4..7,
                replacement: "DEF".into()
            })
        );
    }

    #[test]
    fn test_change_case_title_only_touches_first_char() {
        let edit = change_case("say hELLO-world", "b", CaseKind::Title).unwrap();
        assert_eq!(edit.replacement, "HELLO-world");

        let edit = change_case("x mIxEd", "b", CaseKind::Lower).unwrap();
        assert_eq!(edit.replacement, "mixed");
    }

    #[test]
    fn test_change_case_excludes_trailing_whitespace() {
        let edit = change_case("one  two", "a", CaseKind::Upper).unwrap();
        assert_eq!(edit.range, 0..3);
        assert_eq!(edit.replacement, "ONE");
    }

    #[test]
    fn test_change_case_multibyte() {
        let edit = change_case("über straße", "b", CaseKind::Upper).unwrap();
        assert_eq!(edit.range, 5..11);
        assert_eq!(edit.replacement, "STRASSE");
    }

    #[test]
    fn test_case_kind_parse() {
        assert_eq!("title".parse::<CaseKind>(), Ok(CaseKind::Title));
        assert_eq!(
            "Title".parse::<CaseKind>(),
            Err(AnchorError::InvalidCaseKind("Title".into()))
        );
    }

    #[test]
    fn test_overlay() {
        let labels = overlay("one two\nthree").unwrap();
        let got: Vec<(Range<usize>, &str)> = labels
            .iter()
            .map(|l| (l.range.clone(), l.anchor.as_str()))
            .collect();
        assert_eq!(got, vec![(0..3, "a"), (4..7, "b"), (8..13, "c")]);
    }

    #[test]
    fn test_overlay_out_of_labels() {
        let text = "w ".repeat(703);
        assert_eq!(overlay(&text), Err(AnchorError::out_of_labels(703)));
    }

    #[test]
    fn test_resolve_survives_overflow() {
        let text = "w ".repeat(800);
        assert_eq!(position_caret(&text, "zz", false), Ok(701 * 2));
        assert!(resolve(&text, "aaa").is_err());
    }
}
