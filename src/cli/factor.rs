use super::output;
use crate::errors::Result;
use crate::grammar::Grammar;

/// Left-factors the grammar and outputs the result
pub fn output(g: &Grammar) -> Result<()> {
    output::output(&g.left_factored()?);

    Ok(())
}
