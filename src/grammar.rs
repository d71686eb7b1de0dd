pub mod factor;
pub mod firstfollow;
mod parser;
pub mod recursion;
mod symbol;
mod symboltable;

use crate::errors::Result;
use itertools::Itertools;
use std::collections::{BTreeSet, HashMap, HashSet};
use symboltable::SymbolTable;

pub use firstfollow::{FirstItem, FollowItem, Sets};
pub use parser::RuleDiagnostic;
pub use symbol::Symbol;

/// The display spelling of ϵ
pub const EMPTY_TEXT: &str = "ϵ";

/// A context-free grammar: a start symbol and, for each non-terminal,
/// an ordered list of alternative production bodies. A symbol is a
/// non-terminal iff it is the head of some production; the terminal
/// set is derived and must be recomputed after any structural edit.
#[derive(Debug, Clone)]
pub struct Grammar {
    symbols: SymbolTable,
    start: usize,
    order: Vec<usize>,
    productions: HashMap<usize, Vec<Vec<Symbol>>>,
    terminals: Vec<usize>,
    diagnostics: Vec<RuleDiagnostic>,
}

impl Grammar {
    /// Creates a context-free grammar from a string representation.
    /// Malformed rule lines are skipped and recorded as diagnostics.
    pub fn new(input: &str) -> Result<Grammar> {
        let output = parser::parse(input)?;

        let mut g = Grammar {
            symbols: output.symbol_table,
            start: output.start,
            order: output.order,
            productions: output.productions,
            terminals: Vec::new(),
            diagnostics: output.diagnostics,
        };
        g.recompute_symbols();

        Ok(g)
    }

    /// Creates a context-free grammar from a string representation in a
    /// file with the given path
    pub fn new_from_file(path: &str) -> std::result::Result<Grammar, Box<dyn std::error::Error>> {
        Ok(Grammar::new(&std::fs::read_to_string(path)?)?)
    }

    /// Returns the ID of the start symbol
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the IDs of all non-terminals, in declaration order
    pub fn non_terminal_ids(&self) -> &[usize] {
        &self.order
    }

    /// Returns a sorted slice of the IDs of all terminals
    pub fn terminal_ids(&self) -> &[usize] {
        &self.terminals
    }

    /// Returns the ordered alternative production bodies for the given
    /// non-terminal
    pub fn alternatives(&self, nt: usize) -> &[Vec<Symbol>] {
        self.productions.get(&nt).map_or(&[], |alts| alts.as_slice())
    }

    /// Returns the total number of alternatives across all non-terminals
    pub fn num_alternatives(&self) -> usize {
        self.productions.values().map(|alts| alts.len()).sum()
    }

    /// Returns true if the given symbol ID is classified as a
    /// non-terminal, that is, if it heads at least one production group
    pub fn is_non_terminal_id(&self, id: usize) -> bool {
        self.productions.contains_key(&id)
    }

    /// Returns the name of the symbol with the given ID
    pub fn name(&self, id: usize) -> &str {
        self.symbols.name(id)
    }

    /// Returns the ID of the non-terminal with the given name, if any
    pub fn maybe_non_terminal_index(&self, name: &str) -> Option<usize> {
        self.symbols
            .maybe_index(name)
            .filter(|id| self.is_non_terminal_id(*id))
    }

    /// Returns the ID of the terminal with the given name, if any
    pub fn maybe_terminal_index(&self, name: &str) -> Option<usize> {
        self.symbols
            .maybe_index(name)
            .filter(|id| self.terminals.contains(id))
    }

    /// Returns the diagnostics for rule lines skipped during construction
    pub fn diagnostics(&self) -> &[RuleDiagnostic] {
        &self.diagnostics
    }

    /// Returns the display text of a symbol
    pub fn symbol_text(&self, symbol: &Symbol) -> &str {
        match symbol.id() {
            Some(id) => self.symbols.name(id),
            None => EMPTY_TEXT,
        }
    }

    /// Formats a production body as space-separated symbols
    pub fn format_alternative(&self, body: &[Symbol]) -> String {
        body.iter().map(|s| self.symbol_text(s)).join(" ")
    }

    /// Formats all alternatives for a non-terminal, separated by `|`
    pub fn format_alternatives(&self, nt: usize) -> String {
        self.alternatives(nt)
            .iter()
            .map(|body| self.format_alternative(body))
            .join(" | ")
    }

    /// Re-derives symbol classification after a structural edit: a
    /// symbol is a non-terminal iff it heads a production group, and
    /// the terminal set is exactly the set of body symbols which are
    /// neither non-terminals nor ϵ. Every mutating transform calls this
    /// before its result is observed.
    pub fn recompute_symbols(&mut self) {
        let heads: HashSet<usize> = self.productions.keys().copied().collect();
        let mut terminals: BTreeSet<usize> = BTreeSet::new();

        for alternatives in self.productions.values_mut() {
            for body in alternatives.iter_mut() {
                for symbol in body.iter_mut() {
                    let Some(id) = symbol.id() else {
                        continue;
                    };
                    *symbol = if heads.contains(&id) {
                        Symbol::NonTerminal(id)
                    } else {
                        terminals.insert(id);
                        Symbol::Terminal(id)
                    };
                }
            }
        }

        self.terminals = terminals.into_iter().collect();
    }

    /// Returns a fresh non-terminal name for the given base name,
    /// disjoint from all existing non-terminals: the base with a prime
    /// mark appended, then numeric suffixes until unique
    pub fn fresh_non_terminal_name(&self, base: &str) -> String {
        let mut candidate = format!("{}'", base);
        let mut n = 1;
        while self.maybe_non_terminal_index(&candidate).is_some() {
            candidate = format!("{}'{}", base, n);
            n += 1;
        }

        candidate
    }

    /// Adds a new non-terminal with the given name and an empty
    /// alternative list, and returns its ID
    pub fn add_non_terminal(&mut self, name: &str) -> usize {
        let id = self.symbols.add(name);
        if !self.productions.contains_key(&id) {
            self.order.push(id);
            self.productions.insert(id, Vec::new());
        }

        id
    }

    /// Returns true if any non-terminal is left-recursive, directly or
    /// through a chain of leading non-terminals
    pub fn is_left_recursive(&self) -> bool {
        self.order.iter().any(|nt| self.left_recursive_from(*nt))
    }

    /// Returns true if the given non-terminal can derive a sequence
    /// beginning with itself by following leading symbols only
    fn left_recursive_from(&self, start: usize) -> bool {
        let mut pending = vec![start];
        let mut seen: HashSet<usize> = HashSet::new();

        while let Some(nt) = pending.pop() {
            for body in self.alternatives(nt) {
                if let Some(Symbol::NonTerminal(b)) = body.first() {
                    if *b == start {
                        return true;
                    }
                    if seen.insert(*b) {
                        pending.push(*b);
                    }
                }
            }
        }

        false
    }

    /// Returns a left-factored copy of the grammar
    pub fn left_factored(&self) -> Result<Grammar> {
        let mut g = self.clone();
        factor::left_factor(&mut g)?;

        Ok(g)
    }

    /// Returns a copy of the grammar with all left recursion removed
    pub fn without_left_recursion(&self) -> Grammar {
        let mut g = self.clone();
        recursion::remove_left_recursion(&mut g);

        g
    }
}
