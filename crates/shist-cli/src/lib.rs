// shist - shell history viewer
//
// Layers, from the bottom up:
// - shist-types: the Entry model shared by every layer
// - shist-providers: one reader per history dialect (zsh, bash, fish)
// - shist-engine: selection and template rendering
// - this crate: flags, config file, logging and terminal capability
//
// Color is decided once here and handed to the engine as a boolean, so the
// engine never looks at the environment or the terminal.

mod args;
mod commands;
pub mod config;
pub mod context;
mod logging;
pub mod output;
pub mod terminal;
pub mod types;

pub use args::Cli;
pub use commands::{exit_code, run};
