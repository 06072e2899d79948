use serde::Serialize;

/// One reconstructed logical command from a shell history file.
///
/// Entries are built once by a reader and are read-only afterwards; the
/// fields are private so that the invariants below survive filtering and
/// rendering:
///
/// - `index` is 1-based and strictly increasing within one read
/// - `timestamp` is `None` when the source line carried no usable epoch
///   (a zero epoch is normalized to `None`)
/// - `lines` is never empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    index: usize,
    timestamp: Option<i64>,
    elapsed: u64,
    command: String,
    lines: Vec<String>,
}

impl Entry {
    /// Build an entry from its logical command and the physical lines it
    /// was assembled from.
    ///
    /// When `lines` is empty the command itself becomes the only line.
    pub fn new(
        index: usize,
        timestamp: Option<i64>,
        elapsed: u64,
        command: impl Into<String>,
        mut lines: Vec<String>,
    ) -> Self {
        let command = command.into();
        if lines.is_empty() {
            lines.push(command.clone());
        }
        Self {
            index,
            timestamp: timestamp.filter(|ts| *ts != 0),
            elapsed,
            command,
            lines,
        }
    }

    /// Single physical line, no continuation; the command is the trimmed line.
    pub fn single(index: usize, timestamp: Option<i64>, elapsed: u64, line: &str) -> Self {
        Self::new(index, timestamp, elapsed, line.trim(), vec![line.to_string()])
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }

    /// Timestamp for range comparisons; entries without one compare as epoch zero.
    pub fn timestamp_or_epoch(&self) -> i64 {
        self.timestamp.unwrap_or(0)
    }

    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_multiline(&self) -> bool {
        self.lines.len() > 1
    }
}
