//! Testing infrastructure for shist integration tests.
//!
//! - `TestWorld`: isolated HOME and environment for running the binary
//! - `fixtures`: sample history files shared with the reader tests

pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
