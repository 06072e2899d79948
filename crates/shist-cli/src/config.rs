use anyhow::{Context, Result};
use serde::Deserialize;
use shist_providers::Shell;
use std::path::{Path, PathBuf};

const CONFIG_ENV: &str = "SHIST_CONFIG";

/// Resolve the config file path based on priority:
/// 1. Explicit `--config` path (with tilde expansion)
/// 2. SHIST_CONFIG environment variable (with tilde expansion)
/// 3. `<config dir>/shist/config.toml`
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(expand_tilde(&path.to_string_lossy()));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV)
        && !env_path.is_empty()
    {
        return Some(expand_tilde(&env_path));
    }

    dirs::config_dir().map(|dir| dir.join("shist").join("config.toml"))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

/// Persistent defaults. Every key is optional; flags override them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub shell: Option<Shell>,
    pub file: Option<String>,
    pub format: Option<String>,
    pub date_format: Option<String>,
    pub no_color: bool,
    pub multiline: bool,
    pub utc: bool,
}

impl Config {
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match resolve_config_path(explicit) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// A missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn file_path(&self) -> Option<PathBuf> {
        self.file.as_deref().map(expand_tilde)
    }
}
