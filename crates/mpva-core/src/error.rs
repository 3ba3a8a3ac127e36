//! Pipeline error taxonomy

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the scaffold pipeline.
///
/// `Usage` and `Conflict` are detected before any side effect, so they
/// need no cleanup. Every other variant is fatal and causes the
/// orchestrator to roll the workspace back before propagating.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Missing or invalid project name (or invalid endpoint override)
    #[error("{0}")]
    Usage(String),

    /// The target path already exists
    #[error("the '{name}' project already exists in the current directory")]
    Conflict { name: String },

    /// A registry version lookup failed or returned unusable data
    #[error("failed to resolve latest version for '{tool}': {reason}")]
    Resolution { tool: String, reason: String },

    /// Directory or file creation failed
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A remote template download failed
    #[error("failed to fetch '{file}': {reason}")]
    Fetch { file: String, reason: String },
}

impl ScaffoldError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn resolution(tool: &str, reason: impl Into<String>) -> Self {
        Self::Resolution {
            tool: tool.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn fetch(file: &str, reason: impl Into<String>) -> Self {
        Self::Fetch {
            file: file.to_string(),
            reason: reason.into(),
        }
    }
}
