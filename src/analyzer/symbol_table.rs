use std::collections::HashMap;

use super::Ty;

/// One global scope. Entries are added on declaration and never removed.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    table: HashMap<String, Ty>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Redeclaration silently overwrites the previous type.
    pub fn declare_var(&mut self, name: &str, ty: Ty) {
        self.table.insert(name.to_string(), ty);
    }

    pub fn get_var_type(&self, name: &str) -> Option<Ty> {
        self.table.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
