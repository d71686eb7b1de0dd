use super::common;
use crate::errors::Result;
use crate::grammar::{FirstItem, Grammar, Sets, EMPTY_TEXT};

/// Outputs the FIRST set of every non-terminal, in declaration order,
/// with terminals sorted and ϵ last
pub fn output(g: &Grammar) -> Result<()> {
    let sets = Sets::new(g)?;
    let width = common::longest_non_terminal_name(g);

    for nt in g.non_terminal_ids() {
        let mut names: Vec<&str> = sets
            .first(*nt)
            .iter()
            .filter_map(|item| match item {
                FirstItem::Terminal(t) => Some(g.name(*t)),
                FirstItem::Empty => None,
            })
            .collect();
        names.sort_unstable();

        if sets.first(*nt).contains(&FirstItem::Empty) {
            names.push(EMPTY_TEXT);
        }

        println!(
            "FIRST({:<w$}) = {{ {} }}",
            g.name(*nt),
            names.join(", "),
            w = width
        );
    }

    Ok(())
}
