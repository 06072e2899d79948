// Error types
pub mod error;

// Trait-based architecture (public API)
pub mod traits;

// Dialect readers
pub mod bash;
pub mod fish;
pub mod zsh;

// Shared line handling
mod continuation;
pub mod io;

// Dialect registry and detection
pub mod registry;

// Traits
pub use traits::{HistoryLocator, HistoryReader, ProviderAdapter};

// Pure parse functions (no file access)
pub use bash::parse_bash_lines;
pub use fish::parse_fish_str;
pub use zsh::parse_zsh_lines;

// Registry
pub use registry::{Shell, create_adapter, detect_shell, detect_shell_from_path, resolve_shell};

// Error types
pub use error::{BlockError, Error, Result};
