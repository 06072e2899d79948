use crate::Result;
use crate::registry::Shell;
use shist_types::Entry;
use std::path::{Path, PathBuf};

/// Where a dialect keeps its history on disk
///
/// Responsibilities:
/// - Resolve the default history file for the current user
/// - Recognize files of this dialect by name
pub trait HistoryLocator: Send + Sync {
    /// Dialect ID ("zsh", "bash", "fish")
    fn id(&self) -> &'static str;

    /// Default history file for the current user
    fn default_path(&self) -> Result<PathBuf>;

    /// Check whether a path looks like a history file of this dialect
    fn probe(&self, path: &Path) -> bool;
}

/// History file decoding
///
/// Every implementation returns entries oldest-first with indices `1..=k`.
/// Only I/O failures (and, for structured formats, undecodable blocks) are
/// errors; malformed free-text lines degrade to timestamp-less entries.
pub trait HistoryReader: Send + Sync {
    /// Read and decode a whole history file
    fn read(&self, path: &Path) -> Result<Vec<Entry>>;
}

/// Bundles the locator and reader of one dialect
pub struct ProviderAdapter {
    pub shell: Shell,
    pub locator: Box<dyn HistoryLocator>,
    pub reader: Box<dyn HistoryReader>,
}

impl ProviderAdapter {
    pub fn new(
        shell: Shell,
        locator: Box<dyn HistoryLocator>,
        reader: Box<dyn HistoryReader>,
    ) -> Self {
        Self {
            shell,
            locator,
            reader,
        }
    }

    /// Create the adapter for a shell dialect
    pub fn for_shell(shell: Shell) -> Self {
        match shell {
            Shell::Zsh => Self::zsh(),
            Shell::Bash => Self::bash(),
            Shell::Fish => Self::fish(),
        }
    }

    pub fn zsh() -> Self {
        Self::new(
            Shell::Zsh,
            Box::new(crate::zsh::ZshLocator),
            Box::new(crate::zsh::ZshReader),
        )
    }

    pub fn bash() -> Self {
        Self::new(
            Shell::Bash,
            Box::new(crate::bash::BashLocator),
            Box::new(crate::bash::BashReader),
        )
    }

    pub fn fish() -> Self {
        Self::new(
            Shell::Fish,
            Box::new(crate::fish::FishLocator),
            Box::new(crate::fish::FishReader),
        )
    }

    pub fn id(&self) -> &'static str {
        self.locator.id()
    }

    /// Read `path`, or the dialect's default file when `path` is `None`
    pub fn read(&self, path: Option<&Path>) -> Result<Vec<Entry>> {
        let resolved;
        let path = match path {
            Some(p) => p,
            None => {
                resolved = self.locator.default_path()?;
                &resolved
            }
        };
        tracing::info!(shell = self.id(), path = %path.display(), "reading history");
        self.reader.read(path)
    }
}
