use super::output;
use crate::grammar::Grammar;

/// Eliminates left recursion from the grammar and outputs the result
pub fn output(g: &Grammar) {
    output::output(&g.without_left_recursion());
}
