//! Whitespace tokenizer for anchor assignment
//!
//! Splits text into word spans using a three-state machine over
//! `{newline, space, word}`. Only U+0020 counts as space and only U+000A
//! counts as newline; every other character (tabs included) is part of a word.
//!
//! A pending word is flushed when:
//! - a newline arrives (the newline is folded into the word's boundary), or
//! - a run of spaces ends with anything other than another space.
//!
//! All offsets are character counts, not bytes.

use serde::Serialize;
use std::iter::Enumerate;
use std::str::Chars;

/// Boundary metadata for one word, without its label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WordBounds {
    /// Offset of the first character of the word
    pub start: usize,
    /// One past the last non-whitespace character of the word
    pub word_end: usize,
    /// One past the whitespace run that follows the word
    pub boundary_end: usize,
}

impl WordBounds {
    /// Length of the word itself, excluding trailing whitespace
    pub fn word_len(&self) -> usize {
        self.word_end - self.start
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Newline,
    Space,
    Word,
}

impl CharClass {
    fn of(ch: char) -> Self {
        match ch {
            ' ' => CharClass::Space,
            '\n' => CharClass::Newline,
            _ => CharClass::Word,
        }
    }
}

/// Lazy iterator over the words of a text. Created by [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    chars: Enumerate<Chars<'a>>,
    state: CharClass,
    word_start: Option<usize>,
    word_end: Option<usize>,
    len: usize,
}

/// Tokenize `text` into word spans, left to right.
///
/// Each call is independent; the iterator is finite and bounded by the
/// number of characters in `text`.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens {
        chars: text.chars().enumerate(),
        state: CharClass::Newline,
        word_start: None,
        word_end: None,
        len: 0,
    }
}

impl Tokens<'_> {
    /// Close the pending word, if any
    fn flush(&mut self, fallback_word_end: usize, boundary_end: usize) -> Option<WordBounds> {
        let start = self.word_start.take()?;
        let word_end = self.word_end.take().unwrap_or(fallback_word_end);
        Some(WordBounds {
            start,
            word_end,
            boundary_end,
        })
    }
}

impl Iterator for Tokens<'_> {
    type Item = WordBounds;

    fn next(&mut self) -> Option<WordBounds> {
        while let Some((index, ch)) = self.chars.next() {
            self.len = index + 1;
            let next = CharClass::of(ch);

            let flushed = if next == CharClass::Newline {
                self.flush(index, index + 1)
            } else if self.state == CharClass::Space && next != CharClass::Space {
                self.flush(index, index)
            } else {
                None
            };

            if self.state != CharClass::Word && next == CharClass::Word {
                self.word_start = Some(index);
                self.word_end = None;
            }
            if self.state == CharClass::Word && next != CharClass::Word && self.word_start.is_some()
            {
                self.word_end = Some(index);
            }
            self.state = next;

            if flushed.is_some() {
                return flushed;
            }
        }

        let len = self.len;
        self.flush(len, len)
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}
