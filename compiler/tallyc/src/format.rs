//! Printing of expression results.
//!
//! | Value | none / `d` | `x` | `X` | `b` | `B` |
//! |---|---|---|---|---|---|
//! | int | decimal | `0x` + lowercase hex | `0x` + uppercase hex | `0b` + binary | `true` when non-zero |
//! | bool | `true`/`false` (`d`: `1`/`0`) | `0x1`/`0x0` | `0x1`/`0x0` | `0b1`/`0b0` | `true`/`false` |
//! | string | raw | raw | raw | raw | raw |
//!
//! Hex and binary show the 32-bit two's complement pattern, so negative
//! integers print all 32 bits.

use tally_ir::{FormatSpec, Value};

pub fn format_value(value: &Value, spec: Option<FormatSpec>) -> String {
    match value {
        Value::Int(n) => format_int(*n, spec),
        Value::Bool(b) => format_bool(*b, spec),
        Value::Str(bytes) => String::from_utf8_lossy(bytes).into_owned(),
    }
}

fn format_int(n: i32, spec: Option<FormatSpec>) -> String {
    match spec {
        None | Some(FormatSpec::Decimal) => n.to_string(),
        Some(FormatSpec::Hex) => format!("{n:#x}"),
        Some(FormatSpec::HexUpper) => format!("0x{n:X}"),
        Some(FormatSpec::Binary) => format!("{n:#b}"),
        Some(FormatSpec::Boolean) => (n != 0).to_string(),
    }
}

fn format_bool(b: bool, spec: Option<FormatSpec>) -> String {
    let bit = u8::from(b);
    match spec {
        None | Some(FormatSpec::Boolean) => b.to_string(),
        Some(FormatSpec::Decimal) => bit.to_string(),
        Some(FormatSpec::Hex | FormatSpec::HexUpper) => format!("0x{bit}"),
        Some(FormatSpec::Binary) => format!("0b{bit}"),
    }
}
