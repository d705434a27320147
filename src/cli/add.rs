//! Add a hook and install it.

use crate::cli::prompt;
use crate::error::Error;
use crate::hooks::is_valid_hook;
use crate::install::{self, InstallOptions};
use crate::project::Project;
use crate::staging;

/// Run the add command.
///
/// An existing hook is replaced with `--force`, or after a yes at the prompt
/// when a terminal is attached and this is not a CI run.
pub fn run(project: &Project, hook: &str, command: &str, force: bool, quiet: bool) -> Result<(), Error> {
    let mut overwrite = force;
    if !overwrite && is_valid_hook(hook) && staging::staged(project, hook) && prompt::can_prompt() {
        let question = format!("Hook '{hook}' already exists. Do you want to overwrite it?");
        if !prompt::confirm(&question)? {
            return Err(Error::Cancelled);
        }
        overwrite = true;
    }

    staging::add(project, hook, command, overwrite)?;
    install::run(project, InstallOptions { quiet })?;

    if !quiet {
        println!("Hook '{hook}' added and installed.");
    }
    Ok(())
}
