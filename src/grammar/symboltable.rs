use std::collections::HashMap;

/// A symbol table interning grammar symbol names. Terminals and
/// non-terminals share a single namespace, since classification is
/// derived from the production set rather than stored here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl SymbolTable {
    /// Returns a new, empty symbol table
    pub fn new() -> SymbolTable {
        SymbolTable {
            names: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Adds a name to the symbol table and returns its ID. If the name is
    /// already in the symbol table, its existing ID is returned.
    pub fn add(&mut self, name: &str) -> usize {
        if let Some(i) = self.index.get(name) {
            *i
        } else {
            let i = self.names.len();
            self.index.insert(name.to_string(), i);
            self.names.push(name.to_string());
            i
        }
    }

    /// Returns the ID for the given name, if the name is in the table
    pub fn maybe_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Returns the name of the symbol with the given ID. Panics if there
    /// is no symbol with the given ID in the symbol table.
    pub fn name(&self, i: usize) -> &str {
        &self.names[i]
    }

}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_add() {
        let mut table: SymbolTable = Default::default();
        assert_eq!(table.add("E"), 0);
        assert_eq!(table.add("E"), 0);
        assert_eq!(table.add("+"), 1);
        assert_eq!(table.add("T"), 2);
        assert_eq!(table.add("+"), 1);
        assert_eq!(table.add("E'"), 3);
    }

    #[test]
    fn test_lookup() {
        let mut table = SymbolTable::new();
        table.add("E");
        table.add("id");

        assert_eq!(table.maybe_index("id"), Some(1));
        assert_eq!(table.maybe_index("F"), None);
        assert_eq!(table.name(0), "E");
        assert_eq!(table.name(1), "id");
    }
}
