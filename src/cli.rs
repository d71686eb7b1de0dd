mod args;
mod common;
mod factor;
mod first;
mod follow;
mod info;
mod output;
mod parse;
mod remove_lr;
mod table;

use crate::grammar::Grammar;
use args::{Commands, Options, Transform};
use clap::Parser;

/// Parses the command line, loads the grammar, applies any requested
/// transformations, and dispatches to the chosen command. With no
/// command, the (transformed) grammar itself is output.
pub fn run() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let opts = Options::parse();

    let mut g = Grammar::new_from_file(&opts.grammar)?;
    for diagnostic in g.diagnostics() {
        eprintln!("{}", diagnostic);
    }

    for transform in &opts.transform {
        g = match transform {
            Transform::RemoveLr => g.without_left_recursion(),
            Transform::Factor => g.left_factored()?,
        };
    }

    match &opts.command {
        None => output::output(&g),
        Some(Commands::Info { verbose }) => info::output(&g, *verbose)?,
        Some(Commands::Factor) => factor::output(&g)?,
        Some(Commands::RemoveLr) => remove_lr::output(&g),
        Some(Commands::First) => first::output(&g)?,
        Some(Commands::Follow) => follow::output(&g)?,
        Some(Commands::Table) => table::output(&g)?,
        Some(Commands::Parse { input, steps }) => parse::output(&g, input, *steps)?,
    }

    Ok(())
}
