//! Fallible allocation of string result buffers.
//!
//! Every string operator builds a fresh buffer whose size the input line
//! controls (`("abcd" * 1000000000)`). Sizes are computed with checked
//! arithmetic and reserved with `try_reserve_exact`, so an impossible
//! request becomes an internal error instead of aborting the process.

use tally_diagnostic::LangError;

/// An empty buffer with room for exactly `len` bytes.
pub(crate) fn with_capacity(len: usize) -> Result<Vec<u8>, LangError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(|e| {
        tracing::error!(len, error = %e, "string buffer allocation failed");
        LangError::internal(format!("cannot allocate a string of {len} bytes"))
    })?;
    Ok(buf)
}

/// Length of `a` followed by `b`.
pub(crate) fn concat_len(a: usize, b: usize) -> Result<usize, LangError> {
    a.checked_add(b)
        .ok_or_else(|| length_overflow("concatenation"))
}

/// Length of `len` bytes repeated `count` times.
pub(crate) fn repeat_len(len: usize, count: usize) -> Result<usize, LangError> {
    len.checked_mul(count)
        .ok_or_else(|| length_overflow("repetition"))
}

#[cold]
fn length_overflow(what: &'static str) -> LangError {
    tracing::error!(what, "string length overflows usize");
    LangError::internal(format!("string {what} is too long"))
}
