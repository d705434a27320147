//! Staging store: create or update hook scripts under `.husky/hooks`.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::hooks::is_valid_hook;
use crate::project::Project;

/// Interpreter line prepended to commands that do not declare one.
pub const DEFAULT_SHEBANG: &str = "#!/bin/sh";

/// Mode for hooks written by `add` and for a self-healed hooks directory.
const HOOK_MODE: u32 = 0o755;

/// Prefix `command` with [`DEFAULT_SHEBANG`] unless it already starts with `#!`.
pub fn with_shebang(command: &str) -> String {
    if command.starts_with("#!") {
        command.to_string()
    } else {
        format!("{DEFAULT_SHEBANG}\n{command}")
    }
}

/// Write one hook file into `dir`. Either the whole file lands with `mode`
/// or the previous state is left as it was.
pub fn write_hook(
    project: &Project,
    dir: &Path,
    name: &str,
    content: &str,
    mode: u32,
) -> Result<PathBuf> {
    let path = dir.join(name);
    project
        .fs
        .write_atomic(&path, content.as_bytes(), mode)
        .map_err(Error::fs("write", &path))?;
    project.log.debug(format_args!("wrote {}", path.display()));
    Ok(path)
}

/// Stage `command` as the `hook` script.
///
/// An existing hook of the same name is only replaced when `overwrite` is set;
/// otherwise [`Error::HookExists`] is returned and nothing changes.
pub fn add(project: &Project, hook: &str, command: &str, overwrite: bool) -> Result<PathBuf> {
    if !is_valid_hook(hook) {
        return Err(Error::InvalidHook(hook.to_string()));
    }
    if !project.layout.git_exists() {
        return Err(Error::GitNotInitialized);
    }
    if !project.layout.staging_exists() {
        return Err(Error::StagingAreaNotInitialized);
    }
    if command.trim().is_empty() {
        return Err(Error::EmptyCommand);
    }

    let hooks_dir = project.layout.staging_hooks_dir();
    if !project.fs.exists(&hooks_dir) {
        project.log.info(format_args!("no pre-existing hooks found"));
        project
            .fs
            .create_dir_all(&hooks_dir, HOOK_MODE)
            .map_err(Error::fs("create", &hooks_dir))?;
        project.log.info(format_args!("created {}", hooks_dir.display()));
    }

    if !overwrite && staged(project, hook) {
        return Err(Error::HookExists(hook.to_string()));
    }

    let path = write_hook(project, &hooks_dir, hook, &with_shebang(command), HOOK_MODE)?;
    project.log.info(format_args!("staged {hook}"));
    Ok(path)
}

/// Whether a hook of this name is already staged.
pub fn staged(project: &Project, hook: &str) -> bool {
    project
        .fs
        .symlink_metadata(&project.layout.staging_hooks_dir().join(hook))
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    use tempfile::TempDir;

    use crate::layout::Layout;
    use crate::logger::Logger;

    fn project(temp: &TempDir) -> Project {
        Project::open(Layout::new(temp.path()), Logger::silent())
    }

    fn initialized() -> (TempDir, Project) {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();
        fs::create_dir_all(temp.path().join(".husky/hooks")).unwrap();
        let project = project(&temp);
        (temp, project)
    }

    #[test]
    fn test_with_shebang() {
        assert_eq!(with_shebang("echo hi"), "#!/bin/sh\necho hi");
        assert_eq!(
            with_shebang("#!/usr/bin/env bash\necho hi"),
            "#!/usr/bin/env bash\necho hi"
        );
        assert_eq!(with_shebang("#!/bin/sh\necho hi").matches("#!").count(), 1);
    }

    #[test]
    fn test_add_valid_hook() {
        let (temp, project) = initialized();

        let path = add(&project, "pre-commit", "echo 'test'", false).unwrap();

        assert_eq!(path, temp.path().join(".husky/hooks/pre-commit"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "#!/bin/sh\necho 'test'");
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o100, 0o100);
    }

    #[test]
    fn test_add_invalid_hook_mutates_nothing() {
        let temp = TempDir::new().unwrap();
        let project = project(&temp);

        let err = add(&project, "hook-invalido", "echo 'test'", false).unwrap_err();

        assert!(matches!(err, Error::InvalidHook(ref h) if h == "hook-invalido"));
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_add_precondition_order() {
        let temp = TempDir::new().unwrap();
        let project = project(&temp);

        assert!(matches!(
            add(&project, "pre-commit", "", false),
            Err(Error::GitNotInitialized)
        ));

        fs::create_dir(temp.path().join(".git")).unwrap();
        assert!(matches!(
            add(&project, "pre-commit", "", false),
            Err(Error::StagingAreaNotInitialized)
        ));

        fs::create_dir(temp.path().join(".husky")).unwrap();
        assert!(matches!(
            add(&project, "pre-commit", "   ", false),
            Err(Error::EmptyCommand)
        ));
        // empty command did not self-heal the hooks directory
        assert!(!temp.path().join(".husky/hooks").exists());
    }

    #[test]
    fn test_add_creates_missing_hooks_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();
        fs::create_dir(temp.path().join(".husky")).unwrap();
        let project = project(&temp);

        add(&project, "pre-push", "go vet ./...", false).unwrap();

        assert!(temp.path().join(".husky/hooks/pre-push").is_file());
    }

    #[test]
    fn test_add_existing_requires_overwrite() {
        let (temp, project) = initialized();
        let path = temp.path().join(".husky/hooks/pre-commit");
        fs::write(&path, "#!/bin/sh\noriginal").unwrap();

        let err = add(&project, "pre-commit", "echo new", false).unwrap_err();
        assert!(matches!(err, Error::HookExists(ref h) if h == "pre-commit"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "#!/bin/sh\noriginal");

        add(&project, "pre-commit", "echo new", true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "#!/bin/sh\necho new");
    }

    #[test]
    fn test_add_keeps_existing_shebang() {
        let (_temp, project) = initialized();

        let path = add(&project, "commit-msg", "#!/usr/bin/env python3\nprint('ok')", false).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content, "#!/usr/bin/env python3\nprint('ok')");
    }
}
