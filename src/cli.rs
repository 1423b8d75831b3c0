//! Command-line argument parsing and one-shot commands
//!
//! Every one-shot command reads the full text (from `--file` or stdin),
//! runs a single anchor operation against it and prints the result.
//! `session` instead keeps a draft alive and reads commands line by line.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::anchor::{self, CaseKind};
use crate::output::{OutputFormat, Printer};

/// Address words in text by short generated labels
#[derive(Parser, Debug)]
#[command(name = "draft-anchor", version, about = "Address words in text by short labels")]
pub struct CliArgs {
    /// Read text from this file instead of stdin
    #[arg(short, long, value_name = "PATH", global = true)]
    pub file: Option<PathBuf>,

    /// Output format (defaults to the configured one)
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// List every word with its label and range
    Overlay,
    /// Print the start, word end and boundary end of an anchor
    Resolve { anchor: String },
    /// Print the range from one anchor through another
    Select {
        start: String,
        end: Option<String>,
        /// Extend the range over the whitespace after the last word
        #[arg(short = 'w', long)]
        trailing_whitespace: bool,
    },
    /// Print the caret offset before (or after) an anchor's word
    Caret {
        anchor: String,
        #[arg(short, long)]
        after: bool,
    },
    /// Print the replacement that changes an anchor's case (lower, upper, title)
    Case { anchor: String, kind: String },
    /// Read draft commands from stdin, one per line
    Session,
    /// Write the effective settings to the user config file
    InitConfig,
}

impl CliArgs {
    /// Read the input text for one-shot commands
    pub fn read_text(&self) -> Result<String> {
        match &self.file {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
            None => {
                let mut text = String::new();
                std::io::Read::read_to_string(&mut std::io::stdin(), &mut text)
                    .context("Failed to read stdin")?;
                Ok(text)
            }
        }
    }
}

/// Run a one-shot command against `text`
pub fn run_once<W: Write>(
    command: &CliCommand,
    text: &str,
    printer: &mut Printer<W>,
) -> Result<()> {
    match command {
        CliCommand::Overlay => {
            let labels = anchor::overlay(text)?;
            printer.labels(text, &labels)?;
        }
        CliCommand::Resolve { anchor } => {
            let bounds = anchor::resolve(text, anchor)?;
            printer.bounds(&bounds)?;
        }
        CliCommand::Select {
            start,
            end,
            trailing_whitespace,
        } => {
            let selection =
                anchor::select_range(text, start, end.as_deref(), *trailing_whitespace)?;
            printer.selection(&selection)?;
        }
        CliCommand::Caret { anchor, after } => {
            let offset = anchor::position_caret(text, anchor, *after)?;
            printer.selection(&anchor::Selection::caret(offset))?;
        }
        CliCommand::Case { anchor, kind } => {
            let case: CaseKind = kind.parse()?;
            let edit = anchor::change_case(text, anchor, case)?;
            printer.edit(&edit)?;
        }
        CliCommand::Session | CliCommand::InitConfig => {
            anyhow::bail!("{:?} does not take a text snapshot", command)
        }
    }
    Ok(())
}
