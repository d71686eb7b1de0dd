use super::common;
use crate::errors::Result;
use crate::grammar::{Grammar, Sets};
use crate::parsers::table::ParseTable;

/// Outputs information about a grammar
pub fn output(g: &Grammar, verbose: bool) -> Result<()> {
    let width = 24;

    let sets = Sets::new(g)?;
    let table = ParseTable::new(g, &sets);

    println!(
        "{:w$}: {}",
        "Number of productions",
        g.num_alternatives(),
        w = width
    );
    println!(
        "{:w$}: {}",
        "Number of non-terminals",
        g.non_terminal_ids().len(),
        w = width
    );
    println!(
        "{:w$}: {}",
        "Number of terminals",
        g.terminal_ids().len(),
        w = width
    );
    println!(
        "{:w$}: {}",
        "Left-recursive",
        g.is_left_recursive(),
        w = width
    );
    println!("{:w$}: {}", "LL(1)", !table.has_conflicts(), w = width);

    if verbose {
        println!("{:w$}: {}", "Start symbol", g.name(g.start()), w = width);

        let non_terminals: Vec<String> = g
            .non_terminal_ids()
            .iter()
            .map(|nt| g.name(*nt).to_string())
            .collect();
        common::output_wrapped("Non-terminals", &non_terminals, width);

        let terminals: Vec<String> = g
            .terminal_ids()
            .iter()
            .map(|t| format!("'{}'", g.name(*t)))
            .collect();
        common::output_wrapped("Terminals", &terminals, width);
    }

    Ok(())
}
