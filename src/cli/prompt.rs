//! Interactive confirmation and CI detection.

use std::io::{self, BufRead, IsTerminal, Write};

use crate::error::Result;

/// Environment variables that mark a CI run.
const CI_VARS: &[&str] = &[
    "CI",
    "TRAVIS",
    "CIRCLECI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "JENKINS_URL",
];

/// Check if we are running under CI.
pub fn is_ci() -> bool {
    is_ci_with(|key| std::env::var(key).ok())
}

fn is_ci_with(lookup: impl Fn(&str) -> Option<String>) -> bool {
    CI_VARS
        .iter()
        .any(|key| lookup(key).is_some_and(|v| !v.is_empty()))
}

/// Prompts need a terminal on stdin and a human on the other side.
pub fn can_prompt() -> bool {
    !is_ci() && io::stdin().is_terminal()
}

/// Ask a yes/no question on stdout. Anything but `y`/`Y` is a no.
pub fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(is_yes(&input))
}

fn is_yes(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}
