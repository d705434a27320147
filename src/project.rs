//! The capabilities every core operation runs against.

use crate::fs::{Filesystem, OsFs};
use crate::layout::Layout;
use crate::logger::Logger;

/// A project root together with the filesystem and logger used to act on it.
///
/// Tests swap the filesystem through [`Project::new`]; nothing is rebound
/// globally.
pub struct Project {
    pub layout: Layout,
    pub fs: Box<dyn Filesystem>,
    pub log: Logger,
}

impl Project {
    pub fn new(layout: Layout, fs: Box<dyn Filesystem>, log: Logger) -> Self {
        Self { layout, fs, log }
    }

    /// Project backed by the real filesystem.
    pub fn open(layout: Layout, log: Logger) -> Self {
        Self::new(layout, Box::new(OsFs), log)
    }
}
