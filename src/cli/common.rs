use crate::grammar::Grammar;

pub const LINE_LENGTH: usize = 72;

/// Returns the length in characters of the longest non-terminal name,
/// for column alignment
pub fn longest_non_terminal_name(g: &Grammar) -> usize {
    g.non_terminal_ids()
        .iter()
        .map(|nt| g.name(*nt).chars().count())
        .max()
        .unwrap_or(0)
}

/// Outputs a label and a list of values, wrapping the values into an
/// indented column
pub fn output_wrapped(label: &str, values: &[String], width: usize) {
    print!("{:w$}:", label, w = width);

    let mut line = String::new();
    for value in values {
        if !line.is_empty() && value.len() + 1 + line.len() > LINE_LENGTH - width {
            println!("{}", line);
            print!("{:w$} ", "", w = width);
            line = String::new();
        }
        line.push_str(&format!(" {}", value));
    }
    println!("{}", line);
}
