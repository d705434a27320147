//! Install staged hooks into .git/hooks.

use crate::error::Error;
use crate::install::{self, InstallOptions};
use crate::project::Project;

/// Run the install command.
pub fn run(project: &Project, hook: Option<&str>, quiet: bool) -> Result<(), Error> {
    match hook {
        Some(name) => {
            let path = install::install_hook(project, name)?;
            if !quiet {
                println!("Installed {name} at {}", path.display());
            }
        }
        None => {
            let installed = install::run(project, InstallOptions { quiet })?;
            if !quiet {
                if installed.is_empty() {
                    println!("No hooks staged in .husky/hooks.");
                } else {
                    println!("Hooks installed: {}", installed.join(", "));
                }
            }
        }
    }
    Ok(())
}
