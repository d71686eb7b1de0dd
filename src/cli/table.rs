use crate::errors::Result;
use crate::grammar::{Grammar, Sets};
use crate::parsers::table::{Cell, ParseTable};
use crate::parsers::{InputSymbol, END_MARK};

const ROW_LABEL_WIDTH: usize = 10;
const CELL_WIDTH: usize = 12;

/// Outputs the LL(1) parsing table, one row per non-terminal and one
/// column per terminal plus the end-of-input marker, followed by a
/// summary of any conflicts
pub fn output(g: &Grammar) -> Result<()> {
    let sets = Sets::new(g)?;
    let table = ParseTable::new(g, &sets);

    print!("{:>w$}", "NT\\T", w = ROW_LABEL_WIDTH);
    for on in table.columns() {
        print!("{:>w$}", column_text(g, *on), w = CELL_WIDTH);
    }
    println!();

    for nt in g.non_terminal_ids() {
        print!("{:>w$}", g.name(*nt), w = ROW_LABEL_WIDTH);
        for on in table.columns() {
            let text = match table.cell(*nt, *on) {
                None => ".".to_string(),
                Some(Cell::Conflict(..)) => "CONFLICT".to_string(),
                Some(Cell::Alternative(alt)) => truncate(&format!(
                    "{}->{}",
                    g.name(*nt),
                    g.format_alternative(&g.alternatives(*nt)[alt.alternative])
                )),
            };
            print!("{:>w$}", text, w = CELL_WIDTH);
        }
        println!();
    }

    println!();
    if table.has_conflicts() {
        for (nt, on) in table.conflicts() {
            if let Some(Cell::Conflict(x, y)) = table.cell(*nt, *on) {
                println!(
                    "conflict at [{}, {}]: {} → {}  vs  {} → {}",
                    g.name(*nt),
                    column_text(g, *on),
                    g.name(*nt),
                    g.format_alternative(&g.alternatives(*nt)[x.alternative]),
                    g.name(*nt),
                    g.format_alternative(&g.alternatives(*nt)[y.alternative]),
                );
            }
        }
        println!("\nWARNING: conflicts detected, grammar is not LL(1)");
    } else {
        println!("No conflicts detected, grammar is LL(1)");
    }

    Ok(())
}

/// Truncates a cell to fit its column, marking the cut with ".."
fn truncate(s: &str) -> String {
    if s.chars().count() > CELL_WIDTH - 2 {
        let head: String = s.chars().take(CELL_WIDTH - 3).collect();
        format!("{}..", head)
    } else {
        s.to_string()
    }
}

fn column_text(g: &Grammar, on: InputSymbol) -> String {
    match on {
        InputSymbol::Terminal(t) => g.name(t).to_string(),
        InputSymbol::EndOfInput => END_MARK.to_string(),
    }
}
