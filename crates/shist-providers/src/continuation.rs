//! Continuation-line accumulation shared by the line-oriented readers.
//!
//! A physical line whose trimmed text ends in `\` continues on the next
//! line. Fragments are joined with a single space after the marker is
//! removed and each fragment is trimmed.

use shist_types::Entry;

/// Split a physical line into its trimmed fragment and whether it continues.
pub(crate) fn strip_marker(line: &str) -> (&str, bool) {
    let trimmed = line.trim_end();
    match trimmed.strip_suffix('\\') {
        Some(rest) => (rest.trim(), true),
        None => (trimmed.trim(), false),
    }
}

/// One logical command in progress.
#[derive(Debug, Default)]
pub(crate) struct Accumulator {
    timestamp: Option<i64>,
    elapsed: u64,
    fragments: Vec<String>,
    lines: Vec<String>,
}

impl Accumulator {
    pub(crate) fn start(timestamp: Option<i64>, elapsed: u64) -> Self {
        Self {
            timestamp,
            elapsed,
            ..Self::default()
        }
    }

    /// Append a physical line. Returns `true` while the command continues.
    pub(crate) fn push(&mut self, line: &str) -> bool {
        self.lines.push(line.to_string());
        let (fragment, continues) = strip_marker(line);
        if !fragment.is_empty() {
            self.fragments.push(fragment.to_string());
        }
        continues
    }

    /// Whether any command text was collected; blank lines do not count.
    pub(crate) fn has_command(&self) -> bool {
        !self.fragments.is_empty()
    }

    fn into_entry(self, index: usize) -> Option<Entry> {
        if self.fragments.is_empty() {
            return None;
        }
        let command = self.fragments.join(" ");
        Some(Entry::new(
            index,
            self.timestamp,
            self.elapsed,
            command,
            self.lines,
        ))
    }
}

/// Collects finished entries and numbers them in emission order.
#[derive(Debug, Default)]
pub(crate) struct EntrySink {
    entries: Vec<Entry>,
    dropped: usize,
}

impl EntrySink {
    /// Flush a finished accumulation; empty commands are dropped.
    pub(crate) fn emit(&mut self, acc: Accumulator) {
        match acc.into_entry(self.entries.len() + 1) {
            Some(entry) => self.entries.push(entry),
            None => self.dropped += 1,
        }
    }

    pub(crate) fn finish(self) -> Vec<Entry> {
        if self.dropped > 0 {
            tracing::debug!(dropped = self.dropped, "skipped empty commands");
        }
        self.entries
    }
}
