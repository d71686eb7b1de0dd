use super::{Grammar, Symbol};
use crate::errors::{Error, Result};

/// Guard against a runaway rewrite loop on a pathological grammar.
/// Each rewrite strictly shortens the longest shared prefix among the
/// rewritten non-terminal's alternatives, so a healthy grammar reaches
/// a fixed point long before this.
const MAX_REWRITES: usize = 10_000;

/// Left-factors the grammar in place: repeatedly extracts the longest
/// common prefix shared by two or more alternatives of a non-terminal
/// into a fresh non-terminal, until no non-terminal has two
/// alternatives with a common first symbol. Returns the number of
/// rewrites applied.
pub fn left_factor(g: &mut Grammar) -> Result<usize> {
    let mut rewrites = 0;
    while factor_once(g) {
        rewrites += 1;
        if rewrites > MAX_REWRITES {
            return Err(Error::IterationLimit("left factoring"));
        }
    }

    Ok(rewrites)
}

/// Applies at most one factoring rewrite, to the first non-terminal in
/// declaration order with a qualifying group of alternatives. Returns
/// true if a rewrite was applied.
fn factor_once(g: &mut Grammar) -> bool {
    for nt in g.order.clone() {
        let alternatives = g.alternatives(nt);
        if alternatives.len() < 2 {
            continue;
        }

        // The longest pair-wise common prefix among this non-terminal's
        // alternatives
        let mut best: &[Symbol] = &[];
        for (i, a) in alternatives.iter().enumerate() {
            for b in &alternatives[(i + 1)..] {
                let len = common_prefix_len(a, b);
                if len > best.len() {
                    best = &a[..len];
                }
            }
        }
        if best.is_empty() {
            continue;
        }

        // Partition into the alternatives sharing the prefix and the rest
        let best = best.to_vec();
        let mut group: Vec<Vec<Symbol>> = Vec::new();
        let mut rest: Vec<Vec<Symbol>> = Vec::new();
        for body in alternatives {
            if body.starts_with(&best) {
                group.push(body.clone());
            } else {
                rest.push(body.clone());
            }
        }
        if group.len() < 2 {
            continue;
        }

        let fresh = g.fresh_non_terminal_name(g.name(nt));
        let prime = g.add_non_terminal(&fresh);

        // A keeps the unaffected alternatives plus `prefix A'`; A' takes
        // each group member's remainder, with an empty remainder
        // becoming ϵ
        let mut factored = best.clone();
        factored.push(Symbol::NonTerminal(prime));
        rest.push(factored);

        let remainders = group
            .iter()
            .map(|body| {
                let remainder = body[best.len()..].to_vec();
                if remainder.is_empty() {
                    vec![Symbol::Empty]
                } else {
                    remainder
                }
            })
            .collect();

        g.productions.insert(nt, rest);
        g.productions.insert(prime, remainders);
        g.recompute_symbols();

        return true;
    }

    false
}

/// Returns the length of the common prefix of two production bodies.
/// The prefix stops at the first mismatch or at ϵ.
fn common_prefix_len(a: &[Symbol], b: &[Symbol]) -> usize {
    let mut i = 0;
    while i < a.len() && i < b.len() && a[i] == b[i] && !a[i].is_e() {
        i += 1;
    }

    i
}
