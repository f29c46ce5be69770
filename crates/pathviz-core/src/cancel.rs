//! Cooperative cancellation.
//!
//! Long-running operations poll a [`Cancel`] source at every step checkpoint
//! and stop with a `Cancelled` outcome once it is signalled. Nothing is ever
//! interrupted between checkpoints.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Something that can be asked whether the current run should stop.
pub trait Cancel {
    fn is_cancelled(&self) -> bool;
}

/// A cancellation source that never fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl Cancel for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// A shareable cancellation flag.
///
/// Clones observe the same flag, so a driver can keep one clone and hand
/// another to a run, or signal it from a timer thread.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Clear the flag so the token can be reused for the next run.
    pub fn reset(&self) {
        self.flag.store(false, Ordering::Relaxed);
    }
}

impl Cancel for CancelToken {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

impl Cancel for AtomicBool {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<F: Fn() -> bool> Cancel for F {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn token_clones_share_the_flag() {
        let token = CancelToken::new();
        let handle = token.clone();
        assert!(!token.is_cancelled());
        handle.cancel();
        assert!(token.is_cancelled());
        token.reset();
        assert!(!handle.is_cancelled());
    }

    #[test]
    fn closures_and_atomics_cancel() {
        let polls = Cell::new(0);
        let after_three = || {
            polls.set(polls.get() + 1);
            polls.get() > 3
        };
        assert!(!after_three.is_cancelled());
        assert!(!after_three.is_cancelled());
        assert!(!after_three.is_cancelled());
        assert!(after_three.is_cancelled());

        let flag = AtomicBool::new(true);
        assert!(flag.is_cancelled());
        assert!(!NeverCancel.is_cancelled());
    }
}
