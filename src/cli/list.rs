//! List the hooks husky recognizes.

use std::fmt::Write as _;
use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::error::Error;
use crate::hooks::{catalog, HOOKS};

const NAME_WIDTH: usize = 24;

/// Run the list command.
pub fn run(json: bool) -> Result<(), Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(HOOKS)?);
    } else {
        print!("{}", render(std::io::stdout().is_terminal()));
    }
    Ok(())
}

/// Render the catalog as aligned `[name]  description` lines.
fn render(color: bool) -> String {
    let mut out = String::from(" List of hooks recognized by husky:\n\n");
    for hook in catalog() {
        let label = format!("[{}]", hook.name);
        let padded = format!("{label:<NAME_WIDTH$}");
        if color {
            let _ = writeln!(out, "  - {} {}", padded.green(), hook.description);
        } else {
            let _ = writeln!(out, "  - {} {}", padded, hook.description);
        }
    }
    out.push_str("\nAdd one with: husky add <hook> <command>\n");
    out
}
