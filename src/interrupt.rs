use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cloneable cancellation flag shared between a host and a running parse.
///
/// The host sets the flag from a signal handler or another thread; the
/// builder polls it between cell writes and aborts the decoder when it is
/// set. Polling happens on a stride, so cancellation is cooperative and a
/// bounded number of cells may still arrive after the flag goes up.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    flag: Arc<AtomicBool>,
}

impl Interrupt {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the flag. Safe to call from any thread; idempotent.
    pub fn request(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
