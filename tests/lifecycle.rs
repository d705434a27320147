//! End-to-end flows through the library: init, add, install.

use std::fs;
use std::os::unix::fs::{MetadataExt, PermissionsExt};
use std::path::Path;

use husky::config::Config;
use husky::init::{self, InitOptions};
use husky::install::{self, InstallOptions};
use husky::layout::Layout;
use husky::logger::Logger;
use husky::{staging, Error, Project};
use tempfile::TempDir;

fn project(root: &Path) -> Project {
    Project::open(Layout::new(root), Logger::silent())
}

fn git_repo() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join(".git")).unwrap();
    temp
}

fn snapshot(dir: &Path) -> Vec<(String, String)> {
    let mut files: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| {
            let e = e.unwrap();
            (
                e.file_name().to_string_lossy().into_owned(),
                fs::read_to_string(e.path()).unwrap(),
            )
        })
        .collect();
    files.sort();
    files
}

#[test]
fn init_in_empty_directory_needs_git() {
    let temp = TempDir::new().unwrap();
    let err = init::run(&project(temp.path()), &Config::default(), InitOptions::default()).unwrap_err();
    assert!(matches!(err, Error::GitNotInitialized));
}

#[test]
fn init_creates_the_three_default_hooks() {
    let temp = git_repo();
    let config = Config::default();

    init::run(&project(temp.path()), &config, InitOptions::default()).unwrap();

    let staged = snapshot(&temp.path().join(".husky/hooks"));
    let names: Vec<_> = staged.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["post-commit", "pre-commit", "pre-push"]);
    for (name, content) in &staged {
        assert_eq!(content, &config.default_hooks[name]);
    }
}

#[test]
fn add_then_install_produces_executable_live_hook() {
    let temp = git_repo();
    let project = project(temp.path());
    fs::create_dir_all(temp.path().join(".husky/hooks")).unwrap();

    staging::add(&project, "pre-commit", "echo hi", false).unwrap();
    install::run(&project, InstallOptions::default()).unwrap();

    let live = temp.path().join(".git/hooks/pre-commit");
    assert_eq!(fs::read_to_string(&live).unwrap(), "#!/bin/sh\necho hi");
    let meta = fs::metadata(&live).unwrap();
    assert_eq!(meta.permissions().mode() & 0o100, 0o100);
    let staged = fs::metadata(temp.path().join(".husky/hooks/pre-commit")).unwrap();
    assert_eq!(meta.ino(), staged.ino());
}

#[test]
fn full_lifecycle_with_backup() {
    let temp = git_repo();
    let live = temp.path().join(".git/hooks");
    fs::create_dir(&live).unwrap();
    fs::write(live.join("pre-commit"), "#!/bin/sh\nlegacy").unwrap();
    let project = project(temp.path());

    init::run(
        &project,
        &Config::default(),
        InitOptions {
            force: false,
            backup: true,
        },
    )
    .unwrap();
    staging::add(&project, "commit-msg", "test -s \"$1\"", false).unwrap();
    let installed = install::run(&project, InstallOptions { quiet: true }).unwrap();

    assert_eq!(
        installed,
        vec!["commit-msg", "post-commit", "pre-commit", "pre-push"]
    );
    // the legacy hook was replaced but kept in the backup
    let live_pre_commit = fs::read_to_string(live.join("pre-commit")).unwrap();
    assert!(live_pre_commit.contains("Husky pre-commit hook"));
    let backups: Vec<_> = fs::read_dir(temp.path().join(".husky/hooks/backup"))
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(backups.len(), 1);
    assert_eq!(
        fs::read_to_string(backups[0].join("pre-commit")).unwrap(),
        "#!/bin/sh\nlegacy"
    );
    // backup directory contents are never projected into the live directory
    assert!(!live.join("backup").exists());
}

#[test]
fn install_twice_is_stable() {
    let temp = git_repo();
    let project = project(temp.path());
    init::run(&project, &Config::default(), InitOptions::default()).unwrap();

    install::run(&project, InstallOptions::default()).unwrap();
    let first = snapshot(&temp.path().join(".git/hooks"));
    install::run(&project, InstallOptions::default()).unwrap();
    let second = snapshot(&temp.path().join(".git/hooks"));

    assert_eq!(first, second);
}

#[test]
fn invalid_names_touch_nothing() {
    let temp = git_repo();
    let project = project(temp.path());
    init::run(&project, &Config::default(), InitOptions::default()).unwrap();
    install::run(&project, InstallOptions::default()).unwrap();
    let staged_before = snapshot(&temp.path().join(".husky/hooks"));
    let live_before = snapshot(&temp.path().join(".git/hooks"));

    for name in ["pre-commit-all", "PRE-COMMIT", "../escape", ""] {
        assert!(matches!(
            staging::add(&project, name, "echo", true),
            Err(Error::InvalidHook(_))
        ));
        assert!(matches!(
            install::install_hook(&project, name),
            Err(Error::InvalidHook(_))
        ));
    }

    assert_eq!(staged_before, snapshot(&temp.path().join(".husky/hooks")));
    assert_eq!(live_before, snapshot(&temp.path().join(".git/hooks")));
}

#[test]
fn deleted_staging_hooks_dir_blocks_install() {
    let temp = git_repo();
    let project = project(temp.path());
    init::run(&project, &Config::default(), InitOptions::default()).unwrap();
    install::run(&project, InstallOptions::default()).unwrap();
    let live_before = snapshot(&temp.path().join(".git/hooks"));

    fs::remove_dir_all(temp.path().join(".husky/hooks")).unwrap();
    let err = install::run(&project, InstallOptions::default()).unwrap_err();

    assert!(err.is_not_found(), "unexpected error: {err}");
    assert_eq!(live_before, snapshot(&temp.path().join(".git/hooks")));
}

#[test]
fn reinit_without_force_is_refused() {
    let temp = git_repo();
    let project = project(temp.path());
    init::run(&project, &Config::default(), InitOptions::default()).unwrap();
    staging::add(&project, "pre-push", "cargo test", true).unwrap();
    let before = snapshot(&temp.path().join(".husky/hooks"));

    let err = init::run(&project, &Config::default(), InitOptions::default()).unwrap_err();

    assert!(matches!(err, Error::AlreadyInitialized));
    assert_eq!(before, snapshot(&temp.path().join(".husky/hooks")));
}
