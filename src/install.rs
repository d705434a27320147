//! Project the staged hooks into `.git/hooks`.
//!
//! The live directory is disposable: every install builds a complete new hook
//! set as hard links in a sibling directory under `.git/`, then swaps it into
//! place with renames. A failure while linking leaves the previous live
//! directory untouched.
//!
//! Safety checks run before anything is written:
//! - `.husky` must resolve under the project root and `.husky/hooks` under
//!   `.husky`, so a staging directory replaced by an escaping symlink is refused.
//! - Staged entries that are symbolic links are refused outright.
//! - Every linked file must resolve directly inside the staging hooks directory.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{Error, Result};
use crate::hooks::is_valid_hook;
use crate::logger::Logger;
use crate::project::Project;

/// Mode of the rebuilt live hooks directory.
const LIVE_DIR_MODE: u32 = 0o700;

/// Bits asserted on every installed hook.
const OWNER_RWX: u32 = 0o700;

/// Options for [`run`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InstallOptions {
    /// Only report errors.
    pub quiet: bool,
}

/// A staged hook that passed the safety checks.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StagedHook {
    name: String,
    path: PathBuf,
}

/// Replace `.git/hooks` with hard links to every staged hook.
///
/// Returns the installed hook names in sorted order.
pub fn run(project: &Project, opts: InstallOptions) -> Result<Vec<String>> {
    let log = if opts.quiet {
        project.log.quiet()
    } else {
        project.log
    };
    log.info(format_args!("installing husky"));

    check_preconditions(project)?;
    let hooks_dir = resolve_hooks_dir(project)?;
    let staged = collect_staged(project, &log, &hooks_dir)?;

    let _lock = InstallLock::acquire(project)?;
    rebuild_live_dir(project, &log, &staged)?;

    let names: Vec<String> = staged.into_iter().map(|h| h.name).collect();
    for name in &names {
        log.debug(format_args!("linked {name}"));
    }
    log.info(format_args!("{} hooks installed", names.len()));
    Ok(names)
}

/// Link a single staged hook into `.git/hooks`, leaving the other live hooks alone.
pub fn install_hook(project: &Project, name: &str) -> Result<PathBuf> {
    if !is_valid_hook(name) {
        return Err(Error::InvalidHook(name.to_string()));
    }
    check_preconditions(project)?;
    let hooks_dir = resolve_hooks_dir(project)?;
    let staged = check_entry(project, &project.log, &hooks_dir, &hooks_dir.join(name))?
        .ok_or_else(|| Error::InvalidHook(name.to_string()))?;

    let live = project.layout.git_hooks_dir();
    if !project.fs.exists(&live) {
        project
            .fs
            .create_dir_all(&live, LIVE_DIR_MODE)
            .map_err(Error::fs("create", &live))?;
    }

    let _lock = InstallLock::acquire(project)?;
    let target = live.join(name);
    let tmp = live.join(format!(".{name}.husky-{}", std::process::id()));
    let _ = project.fs.remove_file(&tmp);

    link_hook(project, &staged.path, &tmp)?;
    let renamed = project.fs.rename(&tmp, &target);
    // rename(2) is a no-op when both names already link the same inode
    let _ = project.fs.remove_file(&tmp);
    renamed.map_err(Error::fs("replace", &target))?;

    project.log.info(format_args!("installed {name}"));
    Ok(target)
}

fn check_preconditions(project: &Project) -> Result<()> {
    if !project.layout.git_exists() {
        return Err(Error::GitNotInitialized);
    }
    if !project.layout.staging_exists() {
        return Err(Error::StagingAreaNotInitialized);
    }
    let hooks_dir = project.layout.staging_hooks_dir();
    project
        .fs
        .metadata(&hooks_dir)
        .map_err(Error::fs("stat", &hooks_dir))?;
    Ok(())
}

/// Canonical staging hooks directory, verified to sit inside the staging
/// area, which in turn sits inside the project root.
fn resolve_hooks_dir(project: &Project) -> Result<PathBuf> {
    let canonical = |path: &Path| {
        project
            .fs
            .canonicalize(path)
            .map_err(Error::fs("resolve", path))
    };

    let root = canonical(project.layout.root())?;
    let staging = canonical(&project.layout.staging_dir())?;
    if !staging.starts_with(&root) {
        return Err(Error::PathEscape(staging));
    }
    let hooks_dir = canonical(&project.layout.staging_hooks_dir())?;
    if !hooks_dir.starts_with(&staging) || hooks_dir == staging {
        return Err(Error::PathEscape(hooks_dir));
    }
    Ok(hooks_dir)
}

fn collect_staged(project: &Project, log: &Logger, hooks_dir: &Path) -> Result<Vec<StagedHook>> {
    let entries = project
        .fs
        .read_dir(hooks_dir)
        .map_err(Error::fs("read", hooks_dir))?;

    let mut staged = Vec::with_capacity(entries.len());
    for entry in entries {
        match check_entry(project, log, hooks_dir, &entry)? {
            Some(hook) => staged.push(hook),
            None => log.debug(format_args!("skipping {}", entry.display())),
        }
    }
    Ok(staged)
}

/// Vet one entry of the staging hooks directory.
///
/// `Ok(None)` means the entry is not a hook (a directory such as `backup/`,
/// or a file whose name git would never run) and is skipped.
fn check_entry(
    project: &Project,
    log: &Logger,
    hooks_dir: &Path,
    entry: &Path,
) -> Result<Option<StagedHook>> {
    let meta = project
        .fs
        .symlink_metadata(entry)
        .map_err(Error::fs("stat", entry))?;
    if meta.file_type().is_symlink() {
        return Err(Error::SymlinkHook(entry.to_path_buf()));
    }
    if !meta.is_file() {
        return Ok(None);
    }

    let Some(name) = entry.file_name().and_then(|n| n.to_str()) else {
        return Ok(None);
    };
    if !is_valid_hook(name) {
        log.warn(format_args!("ignoring unrecognized hook file {name}"));
        return Ok(None);
    }

    let resolved = project
        .fs
        .canonicalize(entry)
        .map_err(Error::fs("resolve", entry))?;
    if resolved.parent() != Some(hooks_dir) {
        return Err(Error::PathEscape(resolved));
    }

    Ok(Some(StagedHook {
        name: name.to_string(),
        path: resolved,
    }))
}

/// Hard link `staged` to `link` and assert owner rwx on it.
fn link_hook(project: &Project, staged: &Path, link: &Path) -> Result<()> {
    project
        .fs
        .hard_link(staged, link)
        .map_err(Error::fs("link", link))?;
    let mode = project.fs.mode(link).map_err(Error::fs("stat", link))?;
    project
        .fs
        .set_mode(link, (mode & 0o7777) | OWNER_RWX)
        .map_err(Error::fs("set permissions on", link))?;
    Ok(())
}

fn rebuild_live_dir(project: &Project, log: &Logger, staged: &[StagedHook]) -> Result<()> {
    let git_dir = project.layout.git_dir();
    let live = project.layout.git_hooks_dir();

    // Removed on drop unless it has been renamed into place.
    let fresh = tempfile::Builder::new()
        .prefix(".hooks-")
        .tempdir_in(&git_dir)
        .map_err(Error::fs("create temporary hooks directory in", &git_dir))?;
    project
        .fs
        .set_mode(fresh.path(), LIVE_DIR_MODE)
        .map_err(Error::fs("set permissions on", fresh.path()))?;

    for hook in staged {
        link_hook(project, &hook.path, &fresh.path().join(&hook.name))?;
    }

    let retired = git_dir.join(format!(".hooks-retired-{}", std::process::id()));
    if project.fs.symlink_metadata(&retired).is_ok() {
        project
            .fs
            .remove_dir_all(&retired)
            .map_err(Error::fs("remove", &retired))?;
    }

    let had_live = project.fs.symlink_metadata(&live).is_ok();
    if had_live {
        project
            .fs
            .rename(&live, &retired)
            .map_err(Error::fs("move aside", &live))?;
    }

    if let Err(e) = project.fs.rename(fresh.path(), &live) {
        if had_live {
            if let Err(restore) = project.fs.rename(&retired, &live) {
                log.error(format_args!(
                    "failed to restore previous hooks from {}: {restore}",
                    retired.display()
                ));
            }
        }
        return Err(Error::fs("replace", &live)(e));
    }
    // the directory now lives at `live`
    let _ = fresh.keep();

    if had_live {
        if let Err(e) = project.fs.remove_dir_all(&retired) {
            log.warn(format_args!(
                "failed to remove previous hooks at {}: {e}",
                retired.display()
            ));
        }
    }
    Ok(())
}

/// Advisory lock on `.husky/install.lock`, held for the life of the guard.
///
/// The kernel drops the lock when the holding process exits, so a crashed
/// install never wedges later ones. The file itself stays in place.
struct InstallLock<'a> {
    project: &'a Project,
    path: PathBuf,
    file: File,
}

impl<'a> InstallLock<'a> {
    fn acquire(project: &'a Project) -> Result<Self> {
        let path = project.layout.lock_path();
        let mut file = project
            .fs
            .open_lock(&path)
            .map_err(Error::fs("open", &path))?;
        if let Err(e) = FileExt::try_lock_exclusive(&file) {
            if e.kind() == fs2::lock_contended_error().kind() {
                return Err(Error::InstallLocked(path));
            }
            return Err(Error::fs("lock", &path)(e));
        }

        // holder pid, informational only
        let pid = std::process::id().to_string();
        file.set_len(0)
            .and_then(|()| file.write_all(pid.as_bytes()))
            .map_err(Error::fs("write", &path))?;
        Ok(Self { project, path, file })
    }
}

impl Drop for InstallLock<'_> {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            self.project.log.warn(format_args!(
                "failed to release install lock {}: {e}",
                self.path.display()
            ));
        }
    }
}
