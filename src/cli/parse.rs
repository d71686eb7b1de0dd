use crate::errors::Result;
use crate::grammar::Grammar;
use crate::parsers::predictive::Parser;

const STACK_WIDTH: usize = 30;
const INPUT_WIDTH: usize = 35;

/// Parses an input string with a predictive parser and outputs the
/// verdict, preceded by the automaton trace when requested
pub fn output(g: &Grammar, input: &str, steps: bool) -> Result<()> {
    let parser = Parser::new(g)?;
    let result = parser.parse(input);

    if steps {
        println!(
            "{:<s$}{:<i$}{}",
            "STACK",
            "INPUT",
            "ACTION",
            s = STACK_WIDTH,
            i = INPUT_WIDTH
        );
        println!("{}", "-".repeat(80));

        for step in &result.steps {
            println!(
                "{:<s$}{:<i$}{}",
                step.stack.join(" "),
                step.input.join(" "),
                step.action,
                s = STACK_WIDTH,
                i = INPUT_WIDTH
            );
        }
        println!();
    }

    if result.accepted() {
        println!("RESULT: input accepted");
    } else {
        println!("RESULT: input rejected ({})", result.verdict);
    }

    Ok(())
}
