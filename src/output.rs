//! Rendering of engine results for the command line
//!
//! `plain` is meant for people and shell pipelines, `json` for scripts that
//! drive the draft from another process.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::anchor::{CaseEdit, OverlayLabel, Selection, WordBounds};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

/// Writes results in one format, one record per line
#[derive(Debug)]
pub struct Printer<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Each label with its range and the word it covers
    pub fn labels(&mut self, text: &str, labels: &[OverlayLabel]) -> io::Result<()> {
        match self.format {
            OutputFormat::Plain => {
                for label in labels {
                    let word: String = text
                        .chars()
                        .skip(label.range.start)
                        .take(label.range.len())
                        .collect();
                    writeln!(
                        self.out,
                        "{}\t{}..{}\t{}",
                        label.anchor, label.range.start, label.range.end, word
                    )?;
                }
                Ok(())
            }
            OutputFormat::Json => self.json(labels),
        }
    }

    pub fn bounds(&mut self, bounds: &WordBounds) -> io::Result<()> {
        match self.format {
            OutputFormat::Plain => writeln!(
                self.out,
                "{} {} {}",
                bounds.start, bounds.word_end, bounds.boundary_end
            ),
            OutputFormat::Json => self.json(bounds),
        }
    }

    pub fn selection(&mut self, selection: &Selection) -> io::Result<()> {
        match (self.format, selection) {
            (OutputFormat::Plain, Selection::Caret { offset }) => writeln!(self.out, "{}", offset),
            (OutputFormat::Plain, Selection::Range { left, right }) => {
                writeln!(self.out, "{} {}", left, right)
            }
            (OutputFormat::Json, selection) => self.json(selection),
        }
    }

    pub fn edit(&mut self, edit: &CaseEdit) -> io::Result<()> {
        match self.format {
            OutputFormat::Plain => writeln!(
                self.out,
                "{} {}\t{}",
                edit.range.start, edit.range.end, edit.replacement
            ),
            OutputFormat::Json => self.json(edit),
        }
    }

    /// A 1-based line and column
    pub fn position(&mut self, line: usize, column: usize) -> io::Result<()> {
        match self.format {
            OutputFormat::Plain => writeln!(self.out, "{}:{}", line, column),
            OutputFormat::Json => self.json(&json!({ "line": line, "column": column })),
        }
    }

    pub fn text(&mut self, text: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Plain => writeln!(self.out, "{}", text),
            OutputFormat::Json => self.json(&json!({ "text": text })),
        }
    }

    pub fn error(&mut self, message: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Plain => writeln!(self.out, "error: {}", message),
            OutputFormat::Json => self.json(&json!({ "error": message })),
        }
    }

    fn json<T: Serialize + ?Sized>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        writeln!(self.out)
    }
}
