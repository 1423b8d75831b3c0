//! Line-driven draft session
//!
//! Reads one command per line, turns it into a [`DraftMsg`], runs it through
//! [`update`] and performs the resulting [`Cmd`]. Debounced overlay refreshes
//! run on timer threads and come back through the message channel, the same
//! way a windowed host would receive them.

use std::io::{BufRead, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::anchor;
use crate::commands::Cmd;
use crate::config::DraftConfig;
use crate::draft::Draft;
use crate::messages::DraftMsg;
use crate::output::{OutputFormat, Printer};
use crate::update::update;

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_flag = true, disable_version_flag = true)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum SessionCommand {
    Hide,
    /// Print the current text
    Text,
    /// Print the current labels
    Labels,
    /// Print the caret as 1-based line and column
    Position,
    Select {
        start: String,
        end: Option<String>,
        #[arg(short = 'w', long)]
        trailing_whitespace: bool,
    },
    Caret {
        anchor: String,
        #[arg(short, long)]
        after: bool,
    },
    Case {
        anchor: String,
        kind: String,
    },
    /// Delete from one anchor through another, with the whitespace after it
    Delete { start: String, end: Option<String> },
    Quit,
}

/// Commands whose argument is the rest of the line, taken verbatim so that
/// space runs and tabs reach the draft unchanged (`\n` starts a new line)
enum TextCommand<'a> {
    /// Show the draft, optionally replacing its text
    Show(Option<&'a str>),
    /// Replace the selection with text
    Insert(&'a str),
}

impl<'a> TextCommand<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        let (word, rest) = match line.split_once([' ', '\t']) {
            Some((word, rest)) => (word, rest),
            None => (line, ""),
        };
        match word {
            "show" => Some(TextCommand::Show((!rest.trim().is_empty()).then_some(rest))),
            "insert" => Some(TextCommand::Insert(rest)),
            _ => None,
        }
    }
}

/// Slack on top of the debounce delay when waiting for a timer thread
const TIMER_GRACE_MS: u64 = 500;

fn unescape(text: &str) -> String {
    text.replace("\\n", "\n")
}

pub struct Session<W: Write> {
    draft: Draft,
    printer: Printer<W>,
    msg_tx: Sender<DraftMsg>,
    msg_rx: Receiver<DraftMsg>,
    /// Debounce timers started but not yet delivered
    pending_timers: usize,
}

impl<W: Write> Session<W> {
    pub fn new(config: &DraftConfig, format: OutputFormat, out: W) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            draft: Draft::default().with_overlay_debounce_ms(config.overlay_debounce_ms),
            printer: Printer::new(out, format),
            msg_tx,
            msg_rx,
            pending_timers: 0,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn into_output(self) -> W {
        self.printer.into_inner()
    }

    /// Process lines until `quit` or end of input
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            self.drain_messages();
            if !self.handle_line(&line)? {
                break;
            }
        }
        self.finish_timers();
        Ok(())
    }

    /// Handle one input line. Returns false when the session should end.
    pub fn handle_line(&mut self, line: &str) -> Result<bool> {
        let line = line.strip_suffix('\r').unwrap_or(line).trim_start();
        if line.trim_end().is_empty() || line.starts_with('#') {
            return Ok(true);
        }

        match TextCommand::parse(line) {
            Some(TextCommand::Show(text)) => {
                self.dispatch(DraftMsg::Show(text.map(unescape)))?;
                return Ok(true);
            }
            Some(TextCommand::Insert(text)) => {
                self.replace_selection(unescape(text))?;
                return Ok(true);
            }
            None => {}
        }

        let command = match SessionLine::try_parse_from(line.split_whitespace()) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                let message = e.to_string();
                let first = message.lines().next().unwrap_or("invalid command");
                self.printer.error(first.trim_start_matches("error: "))?;
                return Ok(true);
            }
        };
        tracing::debug!(?command, "session command");

        match command {
            SessionCommand::Quit => return Ok(false),
            SessionCommand::Text => {
                let text = self.draft.text();
                self.printer.text(&text)?;
            }
            SessionCommand::Position => {
                let (line, column) = self.draft.caret_position();
                self.printer.position(line + 1, column + 1)?;
            }
            SessionCommand::Labels => {
                let text = self.draft.text();
                match anchor::overlay(&text) {
                    Ok(labels) => self.printer.labels(&text, &labels)?,
                    Err(e) => self.printer.error(&e.user_message())?,
                }
            }
            SessionCommand::Hide => {
                self.dispatch(DraftMsg::Hide)?;
            }
            SessionCommand::Select {
                start,
                end,
                trailing_whitespace,
            } => {
                if self.dispatch(DraftMsg::Select {
                    start,
                    end,
                    include_trailing_whitespace: trailing_whitespace,
                })? {
                    self.printer.selection(&self.draft.selection())?;
                }
            }
            SessionCommand::Caret { anchor, after } => {
                if self.dispatch(DraftMsg::PositionCaret { anchor, after })? {
                    self.printer.selection(&self.draft.selection())?;
                }
            }
            SessionCommand::Case { anchor, kind } => {
                if self.dispatch(DraftMsg::ChangeCase { anchor, case: kind })? {
                    let text = self.draft.text();
                    self.printer.text(&text)?;
                }
            }
            SessionCommand::Delete { start, end } => {
                let selected = self.dispatch(DraftMsg::Select {
                    start,
                    end,
                    include_trailing_whitespace: true,
                })?;
                if selected {
                    self.replace_selection(String::new())?;
                }
            }
        }
        Ok(true)
    }

    fn replace_selection(&mut self, text: String) -> Result<()> {
        let selection = self.draft.selection();
        let caret = selection.left() + text.chars().count();
        let range = selection.left()..selection.right();
        if self.dispatch(DraftMsg::Replace { range, text })? {
            self.draft.set_caret(caret);
            let text = self.draft.text();
            self.printer.text(&text)?;
        }
        Ok(())
    }

    /// Run a message through update. Anchor errors are reported to the user
    /// and the session carries on; returns whether the message succeeded.
    fn dispatch(&mut self, msg: DraftMsg) -> Result<bool> {
        match update(&mut self.draft, msg) {
            Ok(cmd) => {
                self.process_cmd(cmd);
                Ok(true)
            }
            Err(e) => {
                tracing::debug!("draft command failed: {}", e);
                self.printer.error(&e.user_message())?;
                Ok(false)
            }
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Show => tracing::info!("draft window shown"),
            Cmd::Hide => tracing::info!("draft window hidden"),
            Cmd::SetSelection(selection) => tracing::debug!(?selection, "selection applied"),
            Cmd::RedrawOverlay(labels) => {
                tracing::info!("overlay redrawn with {} labels", labels.len())
            }
            Cmd::DebouncedOverlay { revision, delay_ms } => {
                let tx = self.msg_tx.clone();
                self.pending_timers += 1;
                std::thread::spawn(move || {
                    std::thread::sleep(Duration::from_millis(delay_ms));
                    let _ = tx.send(DraftMsg::OverlayReady { revision });
                });
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    /// Handle timer messages that have arrived so far (non-blocking)
    fn drain_messages(&mut self) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.handle_timer_msg(msg);
        }
    }

    /// Wait for timers still running at end of input so the last overlay
    /// refresh is applied instead of dropped
    fn finish_timers(&mut self) {
        let timeout = Duration::from_millis(self.draft.overlay_debounce_ms() + TIMER_GRACE_MS);
        while self.pending_timers > 0 {
            match self.msg_rx.recv_timeout(timeout) {
                Ok(msg) => self.handle_timer_msg(msg),
                Err(e) => {
                    tracing::warn!("giving up on {} overlay timers: {}", self.pending_timers, e);
                    break;
                }
            }
        }
    }

    fn handle_timer_msg(&mut self, msg: DraftMsg) {
        if matches!(msg, DraftMsg::OverlayReady { .. }) {
            self.pending_timers = self.pending_timers.saturating_sub(1);
        }
        match update(&mut self.draft, msg) {
            Ok(cmd) => self.process_cmd(cmd),
            Err(e) => tracing::warn!("overlay refresh failed: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> String {
        let mut session = Session::new(&DraftConfig::default(), OutputFormat::Plain, Vec::new());
        session.run(script.as_bytes()).unwrap();
        String::from_utf8(session.into_output()).unwrap()
    }

    #[test]
    fn test_select_and_caret() {
        let out = run_script("show one two three\nselect a b -w\ncaret c --after\n");
        assert_eq!(out, "0 8\n13\n");
    }

    #[test]
    fn test_delete_removes_trailing_space() {
        let out = run_script("show one two three\ndelete b\n");
        assert_eq!(out, "one three\n");
    }

    #[test]
    fn test_insert_replaces_selection() {
        let out = run_script("show one two three\nselect b\ninsert 2\ntext\n");
        assert_eq!(out, "4 7\none 2 three\none 2 three\n");
    }

    #[test]
    fn test_case_and_labels_follow_edits() {
        let out = run_script("show abc def\ncase b upper\nlabels\n");
        assert_eq!(out, "abc DEF\na\t0..3\tabc\nb\t4..7\tDEF\n");
    }

    #[test]
    fn test_show_unescapes_newlines() {
        let out = run_script("show line1\\nline2\nselect b\n");
        assert_eq!(out, "6 11\n");
    }

    #[test]
    fn test_show_keeps_space_runs() {
        let out = run_script("show two  words\nselect b\n");
        assert_eq!(out, "5 10\n");
    }

    #[test]
    fn test_show_keeps_tabs_inside_words() {
        let mut session = Session::new(&DraftConfig::default(), OutputFormat::Plain, Vec::new());
        session.handle_line("show a\tb c").unwrap();
        assert_eq!(session.draft().text(), "a\tb c");
        assert_eq!(session.draft().labels().len(), 2);
    }

    #[test]
    fn test_insert_keeps_text_verbatim() {
        let out = run_script("show one\ninsert   two  three\n");
        assert_eq!(out, "one  two  three\n");
    }

    #[test]
    fn test_position_reports_line_and_column() {
        let out = run_script("show first line\\nsecond line\ncaret c --after\nposition\n");
        assert_eq!(out, "17\n2:7\n");
    }

    #[test]
    fn test_pending_overlay_applied_at_end_of_input() {
        let config = DraftConfig {
            overlay_debounce_ms: 5,
            ..DraftConfig::default()
        };
        let mut session = Session::new(&config, OutputFormat::Plain, Vec::new());
        session.run("show one\ninsert  two\n".as_bytes()).unwrap();

        assert_eq!(session.draft().text(), "one two");
        assert!(session.draft().labels_are_current());
        assert_eq!(session.draft().labels().len(), 2);
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let out = run_script("show one\nselect q\ncase a wavy\nbogus\ntext\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("error: No such anchor: q"));
        assert!(lines[1].contains("wavy"));
        assert!(lines[2].starts_with("error:"));
        assert_eq!(lines[3], "one");
    }

    #[test]
    fn test_quit_stops_reading() {
        let out = run_script("show one\nquit\ntext\n");
        assert_eq!(out, "");
    }

    #[test]
    fn test_show_without_text_keeps_contents() {
        let mut session = Session::new(&DraftConfig::default(), OutputFormat::Plain, Vec::new());
        session.handle_line("show keep this").unwrap();
        session.handle_line("hide").unwrap();
        assert!(!session.draft().is_visible());
        session.handle_line("show").unwrap();
        assert!(session.draft().is_visible());
        assert_eq!(session.draft().text(), "keep this");
    }
}
