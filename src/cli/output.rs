use super::common;
use crate::grammar::Grammar;

/// Outputs a grammar, one non-terminal per line with its alternatives
/// separated by pipes, the start symbol first
pub fn output(g: &Grammar) {
    let width = common::longest_non_terminal_name(g);

    let mut nts: Vec<usize> = vec![g.start()];
    let mut others = Vec::<usize>::from(g.non_terminal_ids());
    others.retain(|s| *s != g.start());
    nts.append(&mut others);

    for nt in nts {
        print!("{:<n$} → ", g.name(nt), n = width);
        let mut written = width + 3;

        for (i, body) in g.alternatives(nt).iter().enumerate() {
            let text = g.format_alternative(body);

            if i != 0 && written + text.len() + 3 > common::LINE_LENGTH {
                print!("\n{:<n$}", "", n = width);
                written = width;
            }

            if i != 0 {
                print!(" | ");
                written += 3;
            }

            print!("{}", text);
            written += text.len();
        }

        println!();
    }
}
