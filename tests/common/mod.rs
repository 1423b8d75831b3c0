//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use draft_anchor::anchor::anchors;

/// Texts exercising every tokenizer transition
pub const SAMPLE_TEXTS: &[&str] = &[
    "",
    " ",
    "\n",
    "hello",
    "two words",
    "two  words",
    "line1\nline2",
    "  leading spaces",
    "trailing spaces   ",
    "a\n\n\nb",
    "mixed  \n  runs \n of\twhitespace\n",
    "This is some text\nand another line of text and some more text so that the line gets so long that it wraps a bit.\nAnd a final sentence",
    "ünïcödé wörds ünd ströke",
    "\n\n  indented\n    deeper  \n",
];

/// Labelled spans as `(anchor, start, word_end, boundary_end)` tuples
pub fn spans(text: &str) -> Vec<(String, usize, usize, usize)> {
    anchors(text)
        .map(|span| {
            let span = span.expect("sample texts fit in the label alphabet");
            (
                span.anchor.to_string(),
                span.start,
                span.word_end,
                span.boundary_end,
            )
        })
        .collect()
}

/// Text with `count` single-letter words separated by single spaces
pub fn words(count: usize) -> String {
    vec!["w"; count].join(" ")
}
