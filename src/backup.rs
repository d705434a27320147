//! Snapshots of `.git/hooks` taken before husky takes it over.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::{Error, Result};
use crate::project::Project;

const SNAPSHOT_MODE: u32 = 0o755;

/// Copy every regular file directly under `live_dir` into a new
/// `.husky/hooks/backup/hooks_<unix-seconds>` directory.
///
/// Subdirectories and other non-regular entries are skipped. The first file
/// that fails to copy aborts the backup.
pub fn backup(project: &Project, live_dir: &Path) -> Result<PathBuf> {
    let snapshot = project
        .layout
        .backup_root()
        .join(format!("hooks_{}", Utc::now().timestamp()));

    project
        .fs
        .create_dir_all(&snapshot, SNAPSHOT_MODE)
        .map_err(Error::fs("create backup directory", &snapshot))?;

    let entries = project
        .fs
        .read_dir(live_dir)
        .map_err(Error::fs("read hooks directory", live_dir))?;

    let mut copied = 0usize;
    for source in entries {
        let meta = project
            .fs
            .symlink_metadata(&source)
            .map_err(|e| Error::Backup { file: source.clone(), source: e })?;
        if !meta.is_file() {
            project
                .log
                .debug(format_args!("backup skipping {}", source.display()));
            continue;
        }
        let Some(name) = source.file_name() else {
            continue;
        };
        project
            .fs
            .copy_file(&source, &snapshot.join(name))
            .map_err(|e| Error::Backup { file: source.clone(), source: e })?;
        copied += 1;
    }

    project.log.info(format_args!(
        "backup of {copied} hooks created in: {}",
        snapshot.display()
    ));
    Ok(snapshot)
}
