use super::{Grammar, Symbol};

/// Removes all left recursion, direct and indirect, using the classic
/// ordered-elimination algorithm: for each non-terminal Aᵢ in
/// declaration order, substitute the alternatives of every earlier Aⱼ
/// leading an Aᵢ alternative, then eliminate any direct recursion
/// remaining on Aᵢ through a fresh non-terminal. Fresh non-terminals
/// are appended to the ordering and processed in turn.
pub fn remove_left_recursion(g: &mut Grammar) {
    let mut i = 0;
    while i < g.order.len() {
        let ai = g.order[i];
        for j in 0..i {
            substitute(g, ai, g.order[j]);
        }
        eliminate_direct(g, ai);

        // Fresh non-terminals are appended, so earlier positions are
        // stable
        i += 1;
    }

    g.recompute_symbols();
}

/// Replaces every alternative of `ai` beginning with `aj` by one
/// alternative per `aj` alternative: the `aj` alternative (dropped
/// entirely if it is ϵ) followed by the remainder. Alternatives not
/// beginning with `aj` are untouched.
fn substitute(g: &mut Grammar, ai: usize, aj: usize) {
    let aj_alternatives = g.alternatives(aj).to_vec();
    let mut rewritten: Vec<Vec<Symbol>> = Vec::new();

    for body in g.alternatives(ai) {
        if body.first() != Some(&Symbol::NonTerminal(aj)) {
            rewritten.push(body.clone());
            continue;
        }

        let gamma = &body[1..];
        for delta in &aj_alternatives {
            let mut expanded: Vec<Symbol> = Vec::new();
            if delta.as_slice() != [Symbol::Empty] {
                expanded.extend_from_slice(delta);
            }
            expanded.extend_from_slice(gamma);
            if expanded.is_empty() {
                expanded.push(Symbol::Empty);
            }
            rewritten.push(expanded);
        }
    }

    g.productions.insert(ai, rewritten);
}

/// Eliminates direct left recursion on `a`: alternatives `a -> a α`
/// move their tails to a fresh `a'` with `a' -> α a' | ϵ`, and every
/// remaining alternative β becomes `β a'`. A vacuous alternative
/// `a -> a` is dropped outright; carrying it over would leave the
/// self-cycle `a' -> a'` behind.
fn eliminate_direct(g: &mut Grammar, a: usize) {
    let mut alpha: Vec<Vec<Symbol>> = Vec::new();
    let mut beta: Vec<Vec<Symbol>> = Vec::new();
    let mut dropped = false;

    for body in g.alternatives(a) {
        if body.first() == Some(&Symbol::NonTerminal(a)) {
            let tail = body[1..].to_vec();
            if tail.is_empty() {
                dropped = true;
            } else {
                alpha.push(tail);
            }
        } else {
            beta.push(body.clone());
        }
    }

    if alpha.is_empty() {
        if dropped {
            g.productions.insert(a, beta);
        }
        return;
    }

    let fresh = g.fresh_non_terminal_name(g.name(a));
    let prime = g.add_non_terminal(&fresh);

    let rewritten = beta
        .into_iter()
        .map(|body| {
            if body.as_slice() == [Symbol::Empty] {
                vec![Symbol::NonTerminal(prime)]
            } else {
                let mut body = body;
                body.push(Symbol::NonTerminal(prime));
                body
            }
        })
        .collect();

    let mut tails: Vec<Vec<Symbol>> = alpha
        .into_iter()
        .map(|mut tail| {
            tail.push(Symbol::NonTerminal(prime));
            tail
        })
        .collect();
    tails.push(vec![Symbol::Empty]);

    g.productions.insert(a, rewritten);
    g.productions.insert(prime, tails);
}
