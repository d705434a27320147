//! Error types for husky.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Husky error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid hook: {0}")]
    InvalidHook(String),

    #[error("git repository not initialized")]
    GitNotInitialized,

    #[error(".husky not initialized")]
    StagingAreaNotInitialized,

    #[error("husky already initialized")]
    AlreadyInitialized,

    #[error("command cannot be empty")]
    EmptyCommand,

    #[error("hook '{0}' already exists (use --force to overwrite)")]
    HookExists(String),

    #[error("operation cancelled by user")]
    Cancelled,

    #[error("refusing to install symbolic link: {}", .0.display())]
    SymlinkHook(PathBuf),

    #[error("path escapes staging area: {}", .0.display())]
    PathEscape(PathBuf),

    #[error("another install is in progress ({})", .0.display())]
    InstallLocked(PathBuf),

    #[error("failed to {op} {}: {source}", .path.display())]
    Fs {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to back up hook {}: {source}", .file.display())]
    Backup {
        file: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create {name} hook: {source}")]
    DefaultHook {
        name: String,
        #[source]
        source: Box<Error>,
    },

    #[error("config error: {0}")]
    ConfigParse(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Wrap an IO error with the operation and path it came from.
    pub fn fs(op: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Error {
        let path = path.into();
        move |source| Error::Fs { op, path, source }
    }

    /// True when the underlying cause is a missing file or directory.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Fs { source, .. } | Error::Backup { source, .. } | Error::Io(source) => {
                source.kind() == io::ErrorKind::NotFound
            }
            Error::DefaultHook { source, .. } => source.is_not_found(),
            _ => false,
        }
    }
}
