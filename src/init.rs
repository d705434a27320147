//! Initialize the husky staging area for a project.

use std::path::PathBuf;

use crate::backup;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::hooks::is_valid_hook;
use crate::project::Project;
use crate::staging;

/// Options for [`run`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InitOptions {
    /// Re-initialize even when `.husky` already exists.
    pub force: bool,
    /// Snapshot `.git/hooks` first. Only honored when the config enables backups.
    pub backup: bool,
}

/// Set up `.husky/hooks` with the configured default hooks.
///
/// Does not touch `.git/hooks`; installing is a separate step.
pub fn run(project: &Project, config: &Config, opts: InitOptions) -> Result<()> {
    validate_environment(project, config, opts.force)?;

    // Decided before anything is written so cleanup knows what it owns.
    let created_staging = !project.layout.staging_exists();

    if opts.backup && config.backup_enabled {
        let live = project.layout.git_hooks_dir();
        if project.fs.exists(&live) {
            if let Err(e) = backup::backup(project, &live) {
                project.log.error(format_args!("failed to create backup: {e}"));
            }
        } else {
            project.log.debug(format_args!("no live hooks to back up"));
        }
    }

    let hooks_dir = project.layout.staging_hooks_dir();
    if let Err(e) = create_structure(project, config.default_permissions) {
        cleanup(project, created_staging, &[]);
        return Err(e);
    }

    let mut written = Vec::with_capacity(config.default_hooks.len());
    for (name, template) in &config.default_hooks {
        match staging::write_hook(project, &hooks_dir, name, template, config.default_permissions) {
            Ok(path) => written.push(path),
            Err(e) => {
                cleanup(project, created_staging, &written);
                return Err(Error::DefaultHook {
                    name: name.clone(),
                    source: Box::new(e),
                });
            }
        }
    }

    project.log.info(format_args!("husky initialized successfully"));
    Ok(())
}

/// Create `.husky/hooks` and give both directories `mode`.
///
/// The backup may already have created them with its own mode.
fn create_structure(project: &Project, mode: u32) -> Result<()> {
    let hooks_dir = project.layout.staging_hooks_dir();
    project
        .fs
        .create_dir_all(&hooks_dir, mode)
        .map_err(Error::fs("create", &hooks_dir))?;
    for dir in [project.layout.staging_dir(), hooks_dir] {
        project
            .fs
            .set_mode(&dir, mode)
            .map_err(Error::fs("set permissions on", &dir))?;
    }
    Ok(())
}

fn validate_environment(project: &Project, config: &Config, force: bool) -> Result<()> {
    if !project.layout.git_exists() {
        return Err(Error::GitNotInitialized);
    }
    if !force && project.layout.staging_exists() {
        return Err(Error::AlreadyInitialized);
    }
    if let Some(name) = config.default_hooks.keys().find(|n| !is_valid_hook(n)) {
        return Err(Error::InvalidHook(name.clone()));
    }
    Ok(())
}

/// Undo a failed init: drop the staging area if this run created it,
/// otherwise only the hooks this run wrote.
fn cleanup(project: &Project, created_staging: bool, written: &[PathBuf]) {
    if created_staging {
        let dir = project.layout.staging_dir();
        if let Err(e) = project.fs.remove_dir_all(&dir) {
            project
                .log
                .error(format_args!("failed to clean up {}: {e}", dir.display()));
        }
        return;
    }
    for path in written {
        if let Err(e) = project.fs.remove_file(path) {
            project
                .log
                .error(format_args!("failed to clean up {}: {e}", path.display()));
        }
    }
}
