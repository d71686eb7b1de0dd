use super::{Grammar, Symbol};
use crate::errors::{Error, Result};
use std::collections::{HashMap, HashSet};

/// Guard against a fixed-point loop that fails to stabilize. Growth of
/// the finite sets bounds the passes far below this for any real
/// grammar.
const MAX_PASSES: usize = 10_000;

#[derive(Debug, Eq, Hash, PartialEq, Clone, Copy)]
/// An item in a FIRST set
pub enum FirstItem {
    Terminal(usize),
    Empty,
}

#[derive(Debug, Eq, Hash, PartialEq, Clone, Copy)]
/// An item in a FOLLOW set
pub enum FollowItem {
    Terminal(usize),
    EndOfInput,
}

/// FIRST and FOLLOW sets for a context-free grammar, keyed by
/// non-terminal and computed by naive iteration to a fixed point.
/// The grammar is logically immutable once these are taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sets {
    first: HashMap<usize, HashSet<FirstItem>>,
    follow: HashMap<usize, HashSet<FollowItem>>,
}

impl Sets {
    /// Computes FIRST and FOLLOW for all non-terminals of the grammar
    pub fn new(g: &Grammar) -> Result<Sets> {
        // These algorithms are adapted from Aho et al (2007) p.220-222
        let mut sets = Sets {
            first: g.non_terminal_ids().iter().map(|nt| (*nt, HashSet::new())).collect(),
            follow: g.non_terminal_ids().iter().map(|nt| (*nt, HashSet::new())).collect(),
        };

        sets.compute_first(g)?;
        sets.compute_follow(g)?;

        Ok(sets)
    }

    /// Returns FIRST for the given non-terminal. Panics if the ID is
    /// not a non-terminal of the grammar the sets were computed from.
    pub fn first(&self, nt: usize) -> &HashSet<FirstItem> {
        &self.first[&nt]
    }

    /// Returns FOLLOW for the given non-terminal. Panics if the ID is
    /// not a non-terminal of the grammar the sets were computed from.
    pub fn follow(&self, nt: usize) -> &HashSet<FollowItem> {
        &self.follow[&nt]
    }

    /// Returns the terminal IDs of FIRST(body) excluding ϵ, and whether
    /// ϵ is in FIRST(body). An empty sequence yields (∅, true). A
    /// symbol with no computed FIRST set is treated as a terminal equal
    /// to itself, keeping the computation total.
    pub fn first_of_sequence(&self, body: &[Symbol]) -> (HashSet<usize>, bool) {
        let mut set: HashSet<usize> = HashSet::new();

        for symbol in body {
            match symbol {
                Symbol::Empty => {
                    return (set, true);
                }
                Symbol::Terminal(t) => {
                    set.insert(*t);
                    return (set, false);
                }
                Symbol::NonTerminal(n) => {
                    let Some(first) = self.first.get(n) else {
                        set.insert(*n);
                        return (set, false);
                    };

                    let mut has_empty = false;
                    for item in first {
                        match item {
                            FirstItem::Terminal(t) => {
                                set.insert(*t);
                            }
                            FirstItem::Empty => {
                                has_empty = true;
                            }
                        }
                    }

                    // Only a nullable symbol lets the scan continue
                    if !has_empty {
                        return (set, false);
                    }
                }
            }
        }

        (set, true)
    }

    /// Iterates FIRST over every alternative of every non-terminal
    /// until no set grows
    fn compute_first(&mut self, g: &Grammar) -> Result<()> {
        let mut count = 0;
        let mut passes = 0;

        loop {
            for nt in g.non_terminal_ids() {
                for body in g.alternatives(*nt) {
                    let (firsts, has_empty) = self.first_of_sequence(body);

                    let set = self.first.get_mut(nt).unwrap();
                    set.extend(firsts.into_iter().map(FirstItem::Terminal));
                    if has_empty {
                        set.insert(FirstItem::Empty);
                    }
                }
            }

            // Terminate when no elements were added to any FIRST set
            let this_count = self.first.values().map(|s| s.len()).sum();
            if this_count == count {
                return Ok(());
            }
            count = this_count;

            passes += 1;
            if passes > MAX_PASSES {
                return Err(Error::IterationLimit("FIRST computation"));
            }
        }
    }

    /// Iterates FOLLOW over every non-terminal occurrence in every
    /// alternative until no set grows
    fn compute_follow(&mut self, g: &Grammar) -> Result<()> {
        // End-of-input always follows the start symbol
        self.follow
            .get_mut(&g.start())
            .unwrap()
            .insert(FollowItem::EndOfInput);

        let mut count = 1;
        let mut passes = 0;

        loop {
            for nt in g.non_terminal_ids() {
                for body in g.alternatives(*nt) {
                    self.follow_body(*nt, body);
                }
            }

            let this_count = self.follow.values().map(|s| s.len()).sum();
            if this_count == count {
                return Ok(());
            }
            count = this_count;

            passes += 1;
            if passes > MAX_PASSES {
                return Err(Error::IterationLimit("FOLLOW computation"));
            }
        }
    }

    /// Updates FOLLOW sets from one production body of head `a`: each
    /// non-terminal occurrence B gains FIRST(β) of its trailing
    /// sequence β, and all of FOLLOW(a) when β is empty or nullable
    fn follow_body(&mut self, a: usize, body: &[Symbol]) {
        for (i, symbol) in body.iter().enumerate() {
            let Symbol::NonTerminal(b) = symbol else {
                continue;
            };

            let (firsts, has_empty) = self.first_of_sequence(&body[(i + 1)..]);
            let follow = self.follow.get_mut(b).unwrap();
            follow.extend(firsts.into_iter().map(FollowItem::Terminal));

            // Copying FOLLOW(a) into itself would be a no-op
            if has_empty && *b != a {
                let follow_a = self.follow[&a].clone();
                self.follow.get_mut(b).unwrap().extend(follow_a);
            }
        }
    }
}
