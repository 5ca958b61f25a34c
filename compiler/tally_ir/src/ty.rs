use std::fmt;

/// Type tag carried by every AST node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Ty {
    /// Not yet typed.
    #[default]
    None,
    Int,
    Str,
    Bool,
    /// Format-specifier leaf.
    Fmt,
    /// Unresolved identifier, or the target marker of an assignment root.
    Id,
}

impl Ty {
    /// Whether values of this type can live in a node's value slot.
    pub const fn is_runtime(self) -> bool {
        matches!(self, Ty::Int | Ty::Str | Ty::Bool)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Ty::None => "untyped",
            Ty::Int => "int",
            Ty::Str => "string",
            Ty::Bool => "bool",
            Ty::Fmt => "format specifier",
            Ty::Id => "identifier",
        }
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
