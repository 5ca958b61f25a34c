//! Seam between the passes and the variable table.
//!
//! Inference only reads bindings; evaluation of an assignment root writes
//! one. The table itself lives in `tally_eval`.

use crate::{Ty, Value};

/// A stored variable: its type and an independent copy of its value.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Binding {
    pub ty: Ty,
    pub value: Value,
}

impl Binding {
    pub fn new(value: Value) -> Self {
        Binding {
            ty: value.ty(),
            value,
        }
    }
}

/// Key-value store for variables.
pub trait VarStore {
    /// Look up a variable, returning a copy of its binding.
    fn lookup(&self, name: &str) -> Option<Binding>;

    /// Insert or overwrite a binding.
    fn store(&mut self, name: &str, ty: Ty, value: Value);
}
