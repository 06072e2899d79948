//! Sample history files.
//!
//! The files live next to the reader tests in
//! `crates/shist-providers/tests/samples/` so both layers test against the
//! same bytes.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Sample file manager for test data.
pub struct SampleFiles {
    samples_dir: PathBuf,
}

impl Default for SampleFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleFiles {
    pub fn new() -> Self {
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        let samples_dir = manifest_dir.join("../shist-providers/tests/samples");
        Self { samples_dir }
    }

    pub fn path(&self, sample_name: &str) -> PathBuf {
        self.samples_dir.join(sample_name)
    }

    /// Copy a sample file to a destination, creating parent directories.
    pub fn copy_to(&self, sample_name: &str, dest: &Path) -> Result<()> {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        let source = self.path(sample_name);
        fs::copy(&source, dest)
            .with_context(|| format!("failed to copy sample {}", source.display()))?;
        Ok(())
    }
}
