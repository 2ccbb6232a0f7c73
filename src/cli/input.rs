//! Task file loading
//!
//! Accepted formats:
//! - JSON: either a bare array of tasks or `{ "tasks": [...] }`
//! - TOML: `[[tasks]]` tables
//!
//! The loader enforces the transport-boundary rule: an empty batch is
//! rejected here, never inside the analysis engine.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::analysis::RawTask;

#[derive(Debug, Error)]
pub enum FileError {
    #[error("task file '{path}' not found")]
    NotFound { path: PathBuf },

    #[error("IO error reading '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse '{path}': {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("task file '{path}' contains no tasks")]
    Empty { path: PathBuf },
}

/// Wrapper shape shared by JSON objects and TOML documents.
#[derive(Debug, Deserialize)]
struct TaskFile {
    tasks: Vec<RawTask>,
}

/// Loads task batches from disk.
pub struct TaskLoader;

impl TaskLoader {
    /// Load a task batch, picking the format from the file extension.
    /// Anything that is not `.toml` is treated as JSON.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<RawTask>, FileError> {
        let path = path.as_ref().to_path_buf();

        debug!("loading task file: {:?}", path);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(FileError::NotFound { path });
            }
            Err(e) => return Err(FileError::Io { path, source: e }),
        };

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let tasks = if is_toml {
            Self::parse_toml(&path, &content)?
        } else {
            Self::parse_json(&path, &content)?
        };

        if tasks.is_empty() {
            return Err(FileError::Empty { path });
        }
        debug!("loaded {} task(s) from {:?}", tasks.len(), path);
        Ok(tasks)
    }

    fn parse_json(path: &Path, content: &str) -> Result<Vec<RawTask>, FileError> {
        // Bare array first, then the wrapped form.
        if let Ok(tasks) = serde_json::from_str::<Vec<RawTask>>(content) {
            return Ok(tasks);
        }
        serde_json::from_str::<TaskFile>(content)
            .map(|file| file.tasks)
            .map_err(|e| FileError::Parse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
    }

    fn parse_toml(path: &Path, content: &str) -> Result<Vec<RawTask>, FileError> {
        toml::from_str::<TaskFile>(content)
            .map(|file| file.tasks)
            .map_err(|e| FileError::Parse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
    }
}
