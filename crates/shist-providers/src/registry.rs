use crate::traits::ProviderAdapter;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Supported history dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shell {
    Zsh,
    Bash,
    Fish,
}

impl Shell {
    pub const ALL: [Shell; 3] = [Shell::Zsh, Shell::Bash, Shell::Fish];

    pub fn name(&self) -> &'static str {
        match self {
            Shell::Zsh => "zsh",
            Shell::Bash => "bash",
            Shell::Fish => "fish",
        }
    }

    /// Map a shell program path such as `/usr/bin/zsh` to its dialect
    pub fn from_program(program: &str) -> Option<Shell> {
        let name = Path::new(program.trim()).file_name()?.to_str()?;
        name.parse().ok()
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shell {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "zsh" => Ok(Shell::Zsh),
            "bash" => Ok(Shell::Bash),
            "fish" => Ok(Shell::Fish),
            _ => Err(Error::UnknownShell(s.to_string())),
        }
    }
}

/// Create the adapter for a shell dialect
pub fn create_adapter(shell: Shell) -> ProviderAdapter {
    ProviderAdapter::for_shell(shell)
}

/// Detect the dialect from a history file name
pub fn detect_shell_from_path(path: &Path) -> Option<Shell> {
    Shell::ALL
        .into_iter()
        .find(|shell| ProviderAdapter::for_shell(*shell).locator.probe(path))
}

/// Detect the user's shell from `$SHELL`, defaulting to zsh
pub fn detect_shell() -> Result<Shell> {
    if cfg!(windows) {
        return Err(Error::UnsupportedPlatform);
    }
    let detected = std::env::var("SHELL")
        .ok()
        .and_then(|program| Shell::from_program(&program));
    Ok(detected.unwrap_or(Shell::Zsh))
}

/// Pick a dialect: explicit choice, then the file name, then `$SHELL`
pub fn resolve_shell(explicit: Option<Shell>, file: Option<&Path>) -> Result<Shell> {
    if let Some(shell) = explicit {
        return Ok(shell);
    }
    if let Some(shell) = file.and_then(detect_shell_from_path) {
        tracing::debug!(%shell, "dialect inferred from file name");
        return Ok(shell);
    }
    detect_shell()
}

pub(crate) fn home_file(relative: &str) -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(relative))
}

/// `$HISTFILE`, when exported into the environment
pub(crate) fn histfile_override() -> Option<PathBuf> {
    std::env::var_os("HISTFILE")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

pub(crate) fn file_name_contains(path: &Path, needle: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.contains(needle))
}
