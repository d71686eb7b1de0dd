use super::common;
use crate::errors::Result;
use crate::grammar::{FollowItem, Grammar, Sets};
use crate::parsers::END_MARK;

/// Outputs the FOLLOW set of every non-terminal, in declaration order,
/// with terminals sorted and the end-of-input marker last
pub fn output(g: &Grammar) -> Result<()> {
    let sets = Sets::new(g)?;
    let width = common::longest_non_terminal_name(g);

    for nt in g.non_terminal_ids() {
        let mut names: Vec<&str> = sets
            .follow(*nt)
            .iter()
            .filter_map(|item| match item {
                FollowItem::Terminal(t) => Some(g.name(*t)),
                FollowItem::EndOfInput => None,
            })
            .collect();
        names.sort_unstable();

        if sets.follow(*nt).contains(&FollowItem::EndOfInput) {
            names.push(END_MARK);
        }

        println!(
            "FOLLOW({:<w$}) = {{ {} }}",
            g.name(*nt),
            names.join(", "),
            w = width
        );
    }

    Ok(())
}
