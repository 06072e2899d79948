//! zsh history, plain or `EXTENDED_HISTORY`.
//!
//! Extended records look like `: 1712345678:3;git status`, where the second
//! number is the elapsed time in seconds. Multi-line commands continue with a
//! trailing `\` and the continuation lines carry no prefix.

use crate::continuation::{Accumulator, EntrySink};
use crate::io::read_lines;
use crate::registry::{file_name_contains, home_file, histfile_override};
use crate::traits::{HistoryLocator, HistoryReader};
use crate::Result;
use regex::Regex;
use shist_types::Entry;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static RECORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^: (\d+):(\d+);(.*)$").unwrap());

pub struct ZshLocator;

impl HistoryLocator for ZshLocator {
    fn id(&self) -> &'static str {
        "zsh"
    }

    fn default_path(&self) -> Result<PathBuf> {
        if let Some(path) = histfile_override() {
            return Ok(path);
        }
        home_file(".zsh_history").ok_or(crate::Error::NoDefaultPath("zsh"))
    }

    fn probe(&self, path: &Path) -> bool {
        file_name_contains(path, "zsh_history") || file_name_contains(path, "zhistory")
    }
}

pub struct ZshReader;

impl HistoryReader for ZshReader {
    fn read(&self, path: &Path) -> Result<Vec<Entry>> {
        let lines = read_lines(path)?;
        Ok(parse_zsh_lines(&lines))
    }
}

/// Decode zsh history lines into oldest-first entries.
///
/// Lines that are neither extended records nor continuations of one become
/// timestamp-less entries of their own.
pub fn parse_zsh_lines<S: AsRef<str>>(lines: &[S]) -> Vec<Entry> {
    let mut sink = EntrySink::default();
    let mut pending: Option<Accumulator> = None;
    let mut legacy = 0usize;

    for line in lines {
        let line = line.as_ref();

        let (mut acc, text) = if let Some(caps) = RECORD_REGEX.captures(line) {
            // A new record always closes whatever was still open.
            if let Some(open) = pending.take() {
                sink.emit(open);
            }
            let timestamp = caps[1].parse::<i64>().ok();
            let elapsed = caps[2].parse::<u64>().unwrap_or(0);
            let payload = caps.get(3).map_or("", |m| m.as_str());
            (Accumulator::start(timestamp, elapsed), payload)
        } else if let Some(open) = pending.take() {
            (open, line)
        } else {
            legacy += 1;
            (Accumulator::start(None, 0), line)
        };

        if acc.push(text) {
            pending = Some(acc);
        } else {
            sink.emit(acc);
        }
    }

    if let Some(open) = pending {
        sink.emit(open);
    }

    if legacy > 0 {
        tracing::debug!(lines = legacy, "zsh lines without extended-history prefix");
    }
    sink.finish()
}
