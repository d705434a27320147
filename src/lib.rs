//! Husky library.
//!
//! Keeps hook scripts in a project-local `.husky/hooks` staging area and
//! projects them into `.git/hooks` as hard links.

pub mod backup;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod hooks;
pub mod init;
pub mod install;
pub mod layout;
pub mod logger;
pub mod project;
pub mod staging;

pub use error::{Error, Result};
pub use project::Project;
