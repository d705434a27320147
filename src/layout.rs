//! Repository locator: where `.git` and `.husky` live for a project.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Git metadata directory name.
pub const GIT_DIR: &str = ".git";

/// Staging area directory name.
pub const STAGING_DIR: &str = ".husky";

const HOOKS_DIR: &str = "hooks";
const BACKUP_DIR: &str = "backup";
const LOCK_FILE: &str = "install.lock";

/// Which hooks directory to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    /// Git's live hooks directory.
    Git,
    /// The husky staging area.
    Staging,
}

impl Area {
    fn dir_name(self) -> &'static str {
        match self {
            Area::Git => GIT_DIR,
            Area::Staging => STAGING_DIR,
        }
    }
}

/// Paths for one project root.
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Layout rooted at the process working directory.
    pub fn from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(Error::fs("read current directory", "."))?;
        Ok(Self::new(cwd))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a hooks directory, either relative to the root or joined onto it.
    pub fn hooks_dir(&self, area: Area, relative: bool) -> PathBuf {
        let rel = Path::new(area.dir_name()).join(HOOKS_DIR);
        if relative {
            rel
        } else {
            self.root.join(rel)
        }
    }

    pub fn git_dir(&self) -> PathBuf {
        self.root.join(GIT_DIR)
    }

    pub fn staging_dir(&self) -> PathBuf {
        self.root.join(STAGING_DIR)
    }

    pub fn git_hooks_dir(&self) -> PathBuf {
        self.hooks_dir(Area::Git, false)
    }

    pub fn staging_hooks_dir(&self) -> PathBuf {
        self.hooks_dir(Area::Staging, false)
    }

    /// Parent of all backup snapshots.
    pub fn backup_root(&self) -> PathBuf {
        self.staging_hooks_dir().join(BACKUP_DIR)
    }

    /// Lock file held while the live hooks directory is rebuilt.
    pub fn lock_path(&self) -> PathBuf {
        self.staging_dir().join(LOCK_FILE)
    }

    /// Does a `.git` entry exist under the root. File or directory both count.
    pub fn git_exists(&self) -> bool {
        self.git_dir().exists()
    }

    pub fn staging_exists(&self) -> bool {
        self.staging_dir().exists()
    }
}
