/// A context-free grammar symbol. Terminal and non-terminal symbols
/// carry symbol table IDs; the role tags are derived from the production
/// set and refreshed by Grammar::recompute_symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    NonTerminal(usize),
    Terminal(usize),
    Empty,
}

impl Symbol {
    /// Returns the symbol table ID for a terminal or non-terminal, or
    /// None for ϵ
    pub fn id(&self) -> Option<usize> {
        match self {
            Symbol::NonTerminal(i) | Symbol::Terminal(i) => Some(*i),
            Symbol::Empty => None,
        }
    }

    /// Returns true if this symbol is ϵ
    pub fn is_e(&self) -> bool {
        matches!(self, Symbol::Empty)
    }
}
