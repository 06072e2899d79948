//! TestWorld pattern for declarative integration test setup.
//!
//! Every world owns a temporary directory that stands in for `$HOME`, so
//! default history paths and the default config file resolve inside it.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::SampleFiles;

/// Variables that would leak the developer's own shell setup into a run.
const SCRUBBED_ENV: &[&str] = &[
    "HISTFILE",
    "SHELL",
    "NO_COLOR",
    "SHIST_CONFIG",
    "SHIST_LOG",
    "XDG_DATA_HOME",
];

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use shist_testing::TestWorld;
///
/// let world = TestWorld::new().with_sample("zsh_history", ".zsh_history");
///
/// let result = world.run(&["--shell", "zsh", "-n", "2"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    env_vars: HashMap<String, String>,
    samples: SampleFiles,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self {
            temp_dir,
            env_vars: HashMap::new(),
            samples: SampleFiles::new(),
        }
    }

    /// The fake home directory.
    pub fn home(&self) -> &Path {
        self.temp_dir.path()
    }

    /// `$XDG_CONFIG_HOME` for the binary under test.
    pub fn config_dir(&self) -> PathBuf {
        self.home().join(".config")
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Copy a sample history to a path relative to the fake home.
    pub fn with_sample(self, sample_name: &str, dest: &str) -> Self {
        self.samples
            .copy_to(sample_name, &self.home().join(dest))
            .expect("Failed to copy sample");
        self
    }

    /// Write a history file relative to the fake home and return its path.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.home().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Write a config file and point `SHIST_CONFIG` at it.
    pub fn with_config(self, content: &str) -> Self {
        let path = self.write_file(".config/shist/config.toml", content);
        self.with_env("SHIST_CONFIG", path.to_string_lossy())
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller must provide the base command (e.g., from `cargo_bin_cmd!("shist")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        cmd.env("HOME", self.home())
            .env("XDG_CONFIG_HOME", self.config_dir())
            .current_dir(self.home());

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the `shist` binary with `args` and capture its output.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built, which cargo test does automatically for the CLI crate.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("shist")
            .map_err(|e| anyhow::anyhow!("Failed to find shist binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Parse stdout as JSON Lines.
    pub fn json_lines(&self) -> Result<Vec<serde_json::Value>> {
        self.stdout
            .lines()
            .map(|line| Ok(serde_json::from_str(line)?))
            .collect()
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
