//! CLI-specific functionality for taskrank
//!
//! This module contains argument parsing and task file loading; report
//! rendering lives in the binary.

pub mod args;
pub mod input;

pub use args::{Args, Commands};
pub use input::{FileError, TaskLoader};
