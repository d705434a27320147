//! Initialize husky for a project.

use crate::config::Config;
use crate::error::Error;
use crate::init::{self, InitOptions};
use crate::install::{self, InstallOptions};
use crate::layout::Area;
use crate::project::Project;

/// Run the init command, then install unless `then_install` is false.
pub fn run(
    project: &Project,
    config: &Config,
    opts: InitOptions,
    then_install: bool,
    quiet: bool,
) -> Result<(), Error> {
    init::run(project, config, opts)?;

    if !quiet {
        println!(
            "Husky initialized in {}",
            project.layout.hooks_dir(Area::Staging, true).display()
        );
    }

    if !then_install {
        if !quiet {
            println!("Run 'husky install' to activate the hooks.");
        }
        return Ok(());
    }

    let installed = install::run(project, InstallOptions { quiet })?;
    if !quiet {
        println!(
            "Installed {} into {}",
            installed.join(", "),
            project.layout.hooks_dir(Area::Git, true).display()
        );
    }
    Ok(())
}
