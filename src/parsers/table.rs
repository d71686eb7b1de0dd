use super::InputSymbol;
use crate::grammar::{Grammar, Sets};
use std::collections::HashMap;

/// A reference to one alternative of a non-terminal's production group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AltRef {
    pub non_terminal: usize,
    pub alternative: usize,
}

/// The contents of a filled parse table cell. A cell which receives a
/// second, different alternative becomes a conflict; both candidates
/// are retained for inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Alternative(AltRef),
    Conflict(AltRef, AltRef),
}

/// An LL(1) parsing table: a map from (non-terminal, input symbol) to
/// the alternative to predict. The column set is the full terminal
/// alphabet plus the end-of-input marker. Conflicted cells mark the
/// grammar as not LL(1) but leave the table fully inspectable.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseTable {
    cells: HashMap<(usize, InputSymbol), Cell>,
    columns: Vec<InputSymbol>,
    conflicts: Vec<(usize, InputSymbol)>,
}

impl ParseTable {
    /// Builds the parsing table for a grammar from its FIRST and FOLLOW
    /// sets: each alternative α of A fills table[A][t] for every
    /// terminal t in FIRST(α), and for every member of FOLLOW(A) when α
    /// is nullable. The first entry wins; collisions become conflicts.
    pub fn new(g: &Grammar, sets: &Sets) -> ParseTable {
        let mut columns: Vec<InputSymbol> = g
            .terminal_ids()
            .iter()
            .map(|t| InputSymbol::Terminal(*t))
            .collect();
        columns.push(InputSymbol::EndOfInput);

        let mut table = ParseTable {
            cells: HashMap::new(),
            columns,
            conflicts: Vec::new(),
        };

        for nt in g.non_terminal_ids() {
            for (i, body) in g.alternatives(*nt).iter().enumerate() {
                let alt = AltRef {
                    non_terminal: *nt,
                    alternative: i,
                };

                let (firsts, has_empty) = sets.first_of_sequence(body);
                for t in firsts {
                    table.insert(*nt, InputSymbol::Terminal(t), alt);
                }

                if has_empty {
                    for item in sets.follow(*nt) {
                        table.insert(*nt, InputSymbol::from_follow_item(*item), alt);
                    }
                }
            }
        }

        // Set iteration above fills cells in an arbitrary column order,
        // so sort the conflict list for stable output
        table
            .conflicts
            .sort_unstable_by_key(|(nt, on)| match on {
                InputSymbol::Terminal(t) => (*nt, *t),
                InputSymbol::EndOfInput => (*nt, usize::MAX),
            });

        table
    }

    /// Records an alternative for a cell. Re-recording the same
    /// alternative is a no-op; a different alternative marks the cell
    /// as a conflict, keeping the first two candidates.
    fn insert(&mut self, nt: usize, on: InputSymbol, alt: AltRef) {
        match self.cells.get(&(nt, on)) {
            None => {
                self.cells.insert((nt, on), Cell::Alternative(alt));
            }
            Some(Cell::Alternative(first)) if *first != alt => {
                let first = *first;
                self.cells.insert((nt, on), Cell::Conflict(first, alt));
                self.conflicts.push((nt, on));
            }
            _ => {}
        }
    }

    /// Returns the cell for the given non-terminal and input symbol, or
    /// None if the cell is empty
    pub fn cell(&self, nt: usize, on: InputSymbol) -> Option<&Cell> {
        self.cells.get(&(nt, on))
    }

    /// Returns the alternative to predict for the given non-terminal
    /// and input symbol. Empty and conflicted cells both yield None.
    pub fn production(&self, nt: usize, on: InputSymbol) -> Option<AltRef> {
        match self.cells.get(&(nt, on)) {
            Some(Cell::Alternative(alt)) => Some(*alt),
            _ => None,
        }
    }

    /// Returns the table columns: every terminal, then end-of-input
    pub fn columns(&self) -> &[InputSymbol] {
        &self.columns
    }

    /// Returns the conflicted cells, ordered by non-terminal and column
    pub fn conflicts(&self) -> &[(usize, InputSymbol)] {
        &self.conflicts
    }

    /// Returns true if any cell is conflicted, in which case the
    /// grammar is not LL(1)
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }
}
