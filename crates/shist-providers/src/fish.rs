//! fish history: a YAML-like stream of `- cmd: ... / when: ...` blocks.
//!
//! Only YAML-like: fish writes `cmd` unquoted and escapes nothing but `\\`
//! and newline, so the stream is decoded line by line rather than as YAML.
//! fish appends blocks in execution order, so stream order is oldest-first.
//! There is no free-text fallback: a block that does not decode fails the
//! whole read.

use crate::error::BlockError;
use crate::registry::{file_name_contains, home_file};
use crate::traits::{HistoryLocator, HistoryReader};
use crate::{Error, Result};
use shist_types::Entry;
use std::path::{Path, PathBuf};

pub struct FishLocator;

impl HistoryLocator for FishLocator {
    fn id(&self) -> &'static str {
        "fish"
    }

    fn default_path(&self) -> Result<PathBuf> {
        // fish >= 2.3.0 moved history under the XDG data dir
        let current = home_file(".local/share/fish/fish_history");
        if let Some(path) = &current
            && path.exists()
        {
            return Ok(path.clone());
        }
        home_file(".config/fish/fish_history")
            .or(current)
            .ok_or(Error::NoDefaultPath("fish"))
    }

    fn probe(&self, path: &Path) -> bool {
        file_name_contains(path, "fish_history")
    }
}

pub struct FishReader;

impl HistoryReader for FishReader {
    fn read(&self, path: &Path) -> Result<Vec<Entry>> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_fish_str(&text).map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// A block being decoded; `line` is where its `- cmd:` header sits.
struct Block {
    line: usize,
    cmd: String,
    when: Option<i64>,
}

impl Block {
    fn finish(self, index: usize) -> std::result::Result<Entry, BlockError> {
        let when = self
            .when
            .ok_or_else(|| BlockError::new(self.line, "block has no `when` field"))?;
        let command = self.cmd.trim();
        Ok(Entry::new(index, Some(when), 0, command, vec![command.to_string()]))
    }
}

/// Undo fish's escaping: `\\` is a backslash and `\n` a newline. Any other
/// backslash is literal.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('\\') => {
                    chars.next();
                    out.push('\\');
                    continue;
                }
                Some('n') => {
                    chars.next();
                    out.push('\n');
                    continue;
                }
                _ => {}
            }
        }
        out.push(c);
    }
    out
}

/// Decode a fish history stream into oldest-first entries.
///
/// Indented lines other than `when:` (such as `paths:` and its items) are
/// ignored. Errors are reserved for blocks that cannot be trusted: a missing
/// or non-integer `when`, a repeated `when`, or text outside any block.
pub fn parse_fish_str(text: &str) -> std::result::Result<Vec<Entry>, BlockError> {
    let mut entries = Vec::new();
    let mut current: Option<Block> = None;

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.trim().is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix("- cmd:") {
            if let Some(block) = current.take() {
                entries.push(block.finish(entries.len() + 1)?);
            }
            current = Some(Block {
                line: line_no,
                cmd: unescape(rest),
                when: None,
            });
            continue;
        }

        let Some(block) = current.as_mut() else {
            return Err(BlockError::new(line_no, "text outside any history block"));
        };
        if !line.starts_with(' ') {
            return Err(BlockError::new(line_no, format!("unexpected line `{line}`")));
        }

        if let Some(value) = line.trim_start().strip_prefix("when:") {
            if block.when.is_some() {
                return Err(BlockError::new(line_no, "duplicate `when` field"));
            }
            let when = value.trim().parse::<i64>().map_err(|_| {
                BlockError::new(line_no, format!("`when` is not a timestamp: {}", value.trim()))
            })?;
            block.when = Some(when);
        }
    }

    if let Some(block) = current.take() {
        entries.push(block.finish(entries.len() + 1)?);
    }
    Ok(entries)
}
