use std::fmt;

/// Output directive attached to an expression line with `, <spec>`.
///
/// Carried through inference and evaluation untouched; only the printer
/// reads it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FormatSpec {
    /// `d`
    Decimal,
    /// `x`
    Hex,
    /// `X`
    HexUpper,
    /// `b`
    Binary,
    /// `B`
    Boolean,
}

impl FormatSpec {
    /// Parse a specifier from identifier text. Only single characters from
    /// `dxXbB` qualify.
    pub fn from_text(text: &str) -> Option<FormatSpec> {
        match text {
            "d" => Some(FormatSpec::Decimal),
            "x" => Some(FormatSpec::Hex),
            "X" => Some(FormatSpec::HexUpper),
            "b" => Some(FormatSpec::Binary),
            "B" => Some(FormatSpec::Boolean),
            _ => None,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            FormatSpec::Decimal => 'd',
            FormatSpec::Hex => 'x',
            FormatSpec::HexUpper => 'X',
            FormatSpec::Binary => 'b',
            FormatSpec::Boolean => 'B',
        }
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
