//! Catalog of git hook names husky recognizes.

use serde::Serialize;

/// A recognized hook and what triggers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HookInfo {
    pub name: &'static str,
    pub description: &'static str,
}

const fn hook(name: &'static str, description: &'static str) -> HookInfo {
    HookInfo { name, description }
}

/// Every hook name `add` and `install` accept, grouped by workflow.
pub const HOOKS: &[HookInfo] = &[
    // commit
    hook("pre-commit", "Execute before commit"),
    hook("prepare-commit-msg", "Execute before commit-msg"),
    hook("commit-msg", "Execute before commit"),
    hook("post-commit", "Execute after commit"),
    hook("post-commit-msg", "Execute after commit-msg"),
    // merge
    hook("pre-merge", "Execute before merge"),
    hook("pre-merge-commit", "Execute before merge-commit"),
    hook("post-merge", "Execute after merge"),
    hook("post-merge-commit", "Execute after merge-commit"),
    // rebase
    hook("pre-rebase", "Execute before rebase"),
    hook("pre-rebase-commit", "Execute before rebase-commit"),
    hook("post-rebase", "Execute after rebase"),
    hook("post-rebase-commit", "Execute after rebase-commit"),
    hook("post-rewrite", "Execute after commits are rewritten"),
    // push
    hook("pre-push", "Execute before push"),
    hook("update", "Execute after push"),
    hook("pre-receive", "Execute before refs are updated by a push"),
    hook("post-receive", "Execute after refs are updated by a push"),
    hook("post-update", "Execute after all refs are updated by a push"),
    hook("push-to-checkout", "Execute when a push updates the checked out branch"),
    hook("reference-transaction", "Execute on every reference transaction"),
    // patch
    hook("applypatch-msg", "Execute before applypatch message is used"),
    hook("pre-applypatch", "Execute before applypatch"),
    hook("post-applypatch", "Execute after applypatch"),
    hook("sendemail-validate", "Execute before send-email sends a patch"),
    // other
    hook("post-checkout", "Execute after checkout"),
    hook("post-index-change", "Execute after the index is written"),
    hook("pre-auto-gc", "Execute before automatic garbage collection"),
    hook("fsmonitor-watchman", "Execute to query the filesystem monitor"),
];

/// Check whether `name` is a recognized hook. Exact, case-sensitive match.
pub fn is_valid_hook(name: &str) -> bool {
    HOOKS.iter().any(|h| h.name == name)
}

/// Iterate the catalog in display order.
pub fn catalog() -> impl Iterator<Item = &'static HookInfo> {
    HOOKS.iter()
}
