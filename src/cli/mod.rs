//! CLI commands for husky.

pub mod add;
pub mod init;
pub mod install;
pub mod list;
pub mod prompt;

use clap::{Parser, Subcommand};

/// Husky - git hooks manager
#[derive(Parser, Debug)]
#[command(name = "husky")]
#[command(version, about = "Git hooks manager. Manage your git hooks with ease.", long_about = None)]
pub struct Cli {
    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a hook to .husky/hooks and install it
    #[command(after_help = "Example: husky add pre-commit 'cargo test'")]
    Add {
        /// Hook name (see `husky list`)
        hook: String,

        /// Command the hook runs
        command: String,

        /// Overwrite an existing hook without asking
        #[arg(long, short)]
        force: bool,
    },

    /// Initialize husky in the current directory
    Init {
        /// Re-initialize an existing .husky
        #[arg(long, short)]
        force: bool,

        /// Don't back up the current .git/hooks
        #[arg(long)]
        no_backup: bool,

        /// Don't install the hooks into .git/hooks afterwards
        #[arg(long)]
        no_install: bool,
    },

    /// Install the staged hooks into .git/hooks
    Install {
        /// Install only this hook, leaving the others in place
        #[arg(long)]
        hook: Option<String>,
    },

    /// List all hooks husky recognizes
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
