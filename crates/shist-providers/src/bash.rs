//! bash history, with or without `HISTTIMEFORMAT` timestamps.
//!
//! With timestamps enabled bash writes a `#1712345678` marker line before
//! each command; every line up to the next marker belongs to that command.
//! Lines before the first marker are plain one-command-per-line history.

use crate::continuation::{Accumulator, EntrySink};
use crate::io::read_lines;
use crate::registry::{file_name_contains, home_file, histfile_override};
use crate::traits::{HistoryLocator, HistoryReader};
use crate::Result;
use regex::Regex;
use shist_types::Entry;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static TIMESTAMP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^# ?(\d{10})$").unwrap());

pub struct BashLocator;

impl HistoryLocator for BashLocator {
    fn id(&self) -> &'static str {
        "bash"
    }

    fn default_path(&self) -> Result<PathBuf> {
        if let Some(path) = histfile_override() {
            return Ok(path);
        }
        home_file(".bash_history").ok_or(crate::Error::NoDefaultPath("bash"))
    }

    fn probe(&self, path: &Path) -> bool {
        file_name_contains(path, "bash_history")
    }
}

pub struct BashReader;

impl HistoryReader for BashReader {
    fn read(&self, path: &Path) -> Result<Vec<Entry>> {
        let lines = read_lines(path)?;
        Ok(parse_bash_lines(&lines))
    }
}

/// A timestamp marker and the lines collected under it.
struct Block {
    marker: String,
    acc: Accumulator,
}

impl Block {
    fn close(self, sink: &mut EntrySink) {
        if !self.acc.has_command() {
            // Marker with no command after it: keep it visible as a raw line.
            let mut raw = Accumulator::start(None, 0);
            raw.push(&self.marker);
            sink.emit(raw);
        } else {
            sink.emit(self.acc);
        }
    }
}

/// Decode bash history lines into oldest-first entries.
pub fn parse_bash_lines<S: AsRef<str>>(lines: &[S]) -> Vec<Entry> {
    let mut sink = EntrySink::default();
    let mut block: Option<Block> = None;
    let mut loose: Option<Accumulator> = None;

    for line in lines {
        let line = line.as_ref();

        if let Some(caps) = TIMESTAMP_REGEX.captures(line) {
            if let Some(open) = loose.take() {
                sink.emit(open);
            }
            if let Some(open) = block.take() {
                open.close(&mut sink);
            }
            let timestamp = caps[1].parse::<i64>().ok();
            block = Some(Block {
                marker: line.to_string(),
                acc: Accumulator::start(timestamp, 0),
            });
            continue;
        }

        if let Some(open) = block.as_mut() {
            open.acc.push(line);
            continue;
        }

        let mut acc = loose.take().unwrap_or_else(|| Accumulator::start(None, 0));
        if acc.push(line) {
            loose = Some(acc);
        } else {
            sink.emit(acc);
        }
    }

    if let Some(open) = loose {
        sink.emit(open);
    }
    if let Some(open) = block {
        open.close(&mut sink);
    }

    sink.finish()
}
