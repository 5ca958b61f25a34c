//! Cancellation flags for line processing.
//!
//! Two flags govern every recursive step of parsing, inference and
//! evaluation:
//!
//! - `terminate`: stop all work, the session is over
//! - `skip_line`: abandon the current line, the next line proceeds
//!
//! A [`Control`] is a cheap cloneable handle; clones share the flags, so a
//! signal handler or the driver can raise them while a pass runs. Each
//! recursive step starts with [`Control::checkpoint`] and propagates the
//! resulting [`Interrupt`] with `?`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Why a pass stopped before finishing.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum Interrupt {
    #[error("processing terminated")]
    Terminate,
    #[error("current input ignored")]
    SkipLine,
}

#[derive(Clone, Debug, Default)]
pub struct Control {
    terminate: Arc<AtomicBool>,
    skip_line: Arc<AtomicBool>,
}

impl Control {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail if either flag is raised. `terminate` wins over `skip_line`.
    #[inline]
    pub fn checkpoint(&self) -> Result<(), Interrupt> {
        if self.terminate.load(Ordering::Relaxed) {
            Err(Interrupt::Terminate)
        } else if self.skip_line.load(Ordering::Relaxed) {
            Err(Interrupt::SkipLine)
        } else {
            Ok(())
        }
    }

    pub fn request_terminate(&self) {
        self.terminate.store(true, Ordering::Relaxed);
    }

    pub fn is_terminated(&self) -> bool {
        self.terminate.load(Ordering::Relaxed)
    }

    /// Abandon whatever remains of the current line.
    pub fn skip_current_line(&self) {
        self.skip_line.store(true, Ordering::Relaxed);
    }

    pub fn is_skipping_line(&self) -> bool {
        self.skip_line.load(Ordering::Relaxed)
    }

    /// Reset the per-line flag before processing a new line.
    pub fn begin_line(&self) {
        self.skip_line.store(false, Ordering::Relaxed);
    }
}
