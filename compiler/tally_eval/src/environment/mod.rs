//! Variable table for the interpreter.
//!
//! One flat namespace that lives for the whole session. Every binding
//! owns an independent copy of its value; later changes to the tree that
//! produced it cannot reach the table, and lookups hand out copies.

use rustc_hash::FxHashMap;

use tally_ir::{Binding, Ty, Value, VarStore};

/// Session-wide variable bindings.
#[derive(Clone, Debug, Default)]
pub struct VarTable {
    bindings: FxHashMap<String, Binding>,
}

impl VarTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Borrow a binding without copying it.
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }
}

impl VarStore for VarTable {
    fn lookup(&self, name: &str) -> Option<Binding> {
        self.bindings.get(name).cloned()
    }

    fn store(&mut self, name: &str, ty: Ty, value: Value) {
        tracing::trace!(name, %ty, "store variable");
        if let Some(binding) = self.bindings.get_mut(name) {
            binding.ty = ty;
            binding.value = value;
        } else {
            self.bindings.insert(name.to_owned(), Binding { ty, value });
        }
    }
}
