//! Development-time warnings.

use std::sync::atomic::{AtomicBool, Ordering};

/// A warning that is logged at most once, and only in debug builds.
#[derive(Debug)]
pub struct WarnOnce {
    message: &'static str,
    fired: AtomicBool,
}

impl WarnOnce {
    pub const fn new(message: &'static str) -> Self {
        Self {
            message,
            fired: AtomicBool::new(false),
        }
    }

    /// Log the warning if it has not fired yet. Returns true if it was logged.
    pub fn warn(&self) -> bool {
        if !cfg!(debug_assertions) {
            return false;
        }
        if self.fired.swap(true, Ordering::Relaxed) {
            return false;
        }
        log::warn!("{}", self.message);
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::Relaxed)
    }
}
