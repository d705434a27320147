//! Husky - project-local git hooks manager.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use husky::cli::{self, Cli, Commands};
use husky::config::Config;
use husky::init::InitOptions;
use husky::layout::Layout;
use husky::logger::{LogLevel, Logger};
use husky::{Error, Project};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let Some(command) = cli.command else {
        // Show help when no command provided
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Commands::List { json } => cli::list::run(json),
        Commands::Add {
            hook,
            command,
            force,
        } => {
            let (project, _) = open_project(cli.quiet, cli.verbose)?;
            cli::add::run(&project, &hook, &command, force, cli.quiet)
        }
        Commands::Init {
            force,
            no_backup,
            no_install,
        } => {
            let (project, config) = open_project(cli.quiet, cli.verbose)?;
            let opts = InitOptions {
                force,
                backup: !no_backup,
            };
            cli::init::run(&project, &config, opts, !no_install, cli.quiet)
        }
        Commands::Install { hook } => {
            let (project, _) = open_project(cli.quiet, cli.verbose)?;
            cli::install::run(&project, hook.as_deref(), cli.quiet)
        }
    }
}

/// Resolve the project in the working directory, load its config and set up logging.
fn open_project(quiet: bool, verbose: bool) -> Result<(Project, Config), Error> {
    let layout = Layout::from_current_dir()?;
    let config = Config::load(layout.root())?;

    let level = if quiet {
        LogLevel::Error
    } else if verbose {
        LogLevel::Debug
    } else {
        config.log_level
    };
    init_logging(level);

    Ok((Project::open(layout, Logger::new(level)), config))
}

/// Install the tracing subscriber. `RUST_LOG` overrides the resolved level.
fn init_logging(level: LogLevel) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.filter().into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}
