//! Configuration for husky.
//!
//! Built fresh per invocation from defaults, optionally overridden by a
//! `husky.toml` at the project root. Husky never writes this file.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::logger::LogLevel;

/// Name of the optional config file.
pub const CONFIG_FILE: &str = "husky.toml";

const DEFAULT_PRE_COMMIT: &str = r#"#!/bin/sh
# Husky pre-commit hook
set -e

# Validate that we're in a Git repository
if [ ! -d .git ]; then
    echo "Error: not a git repository"
    exit 1
fi

# Add your pre-commit commands here
"#;

const DEFAULT_PRE_PUSH: &str = r#"#!/bin/sh
# Husky pre-push hook
set -e

# Add your pre-push commands here
"#;

const DEFAULT_POST_COMMIT: &str = r#"#!/bin/sh
# Husky post-commit hook
set -e

# Add your post-commit commands here
"#;

/// Husky configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Mode for the staging directories and default hooks.
    #[serde(default = "default_permissions", deserialize_with = "de_mode")]
    pub default_permissions: u32,

    /// Hook name -> template written by `init`.
    #[serde(default = "default_hooks")]
    pub default_hooks: BTreeMap<String, String>,

    /// Snapshot `.git/hooks` before `init`.
    #[serde(default = "default_true")]
    pub backup_enabled: bool,

    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_true() -> bool {
    true
}

fn default_permissions() -> u32 {
    0o755
}

fn default_hooks() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("pre-commit".to_string(), DEFAULT_PRE_COMMIT.to_string()),
        ("pre-push".to_string(), DEFAULT_PRE_PUSH.to_string()),
        ("post-commit".to_string(), DEFAULT_POST_COMMIT.to_string()),
    ])
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_permissions: default_permissions(),
            default_hooks: default_hooks(),
            backup_enabled: true,
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Path of the config file for a project.
    pub fn path(project_root: &Path) -> PathBuf {
        project_root.join(CONFIG_FILE)
    }

    /// Load config for a project, falling back to defaults when there is no file.
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = Self::path(project_root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path).map_err(Error::fs("read", &path))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))
    }
}

/// Accept a mode as an integer (`493`) or an octal string (`"755"`, `"0o755"`).
fn de_mode<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    struct ModeVisitor;

    impl Visitor<'_> for ModeVisitor {
        type Value = u32;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a file mode as an integer or octal string")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<u32, E> {
            u32::try_from(v)
                .ok()
                .filter(|m| *m <= 0o7777)
                .ok_or_else(|| E::custom(format!("mode out of range: {v}")))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<u32, E> {
            let digits = v.trim_start_matches("0o");
            u32::from_str_radix(digits, 8)
                .ok()
                .filter(|m| *m <= 0o7777)
                .ok_or_else(|| E::custom(format!("invalid octal mode: {v}")))
        }
    }

    deserializer.deserialize_any(ModeVisitor)
}
