//! # Scroll Lock
//!
//! Scoped suppression of background scrolling while the drawer is open.
//!
//! ## The Resource Problem
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Scroll Suppression Lifecycle                         │
//! │                                                                         │
//! │  drawer open()  ──► host.suppress_scroll()   (page stops scrolling)    │
//! │  drawer close() ──► host.restore_scroll()    (page scrolls again)      │
//! │                                                                         │
//! │  HAZARDS                                                                │
//! │  ├── drawer torn down while open  → suppression leaks forever          │
//! │  ├── open() twice                 → second suppress is redundant       │
//! │  └── close() twice                → second restore may release a lock  │
//! │                                      some OTHER overlay acquired       │
//! │                                                                         │
//! │  FIX: ScrollLock tracks its own "held" bit. Acquire and release are    │
//! │  idempotent, and Drop releases unconditionally if still held.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The document itself lives on the far side of a trait so the engine
//! stays DOM-free and the tests can count calls.

// =============================================================================
// Scroll Host
// =============================================================================

/// The document-level scroll flag, abstracted.
///
/// The storefront's host layer implements this against the real document
/// (e.g. toggling `overflow: hidden` on `<body>`); tests implement it
/// with counters.
pub trait ScrollHost {
    /// Suppress background scrolling.
    fn suppress_scroll(&mut self);

    /// Restore background scrolling.
    fn restore_scroll(&mut self);
}

// =============================================================================
// Scroll Lock
// =============================================================================

/// A scoped, non-reentrant hold on the host's scroll flag.
///
/// ## Invariants
/// - `suppress_scroll` and `restore_scroll` are called strictly
///   alternately, starting with suppress
/// - release is guaranteed on every exit path: explicit [`release`],
///   repeated release (no-op), or [`Drop`] while held
///
/// [`release`]: ScrollLock::release
pub struct ScrollLock<H: ScrollHost> {
    host: H,
    held: bool,
}

impl<H: ScrollHost> ScrollLock<H> {
    /// Wraps a host with the lock initially released.
    pub fn new(host: H) -> Self {
        ScrollLock { host, held: false }
    }

    /// Suppresses scrolling if not already held. Idempotent.
    pub fn acquire(&mut self) {
        if !self.held {
            self.host.suppress_scroll();
            self.held = true;
        }
    }

    /// Restores scrolling if held. Idempotent - a second release must
    /// not touch the host, since the flag may meanwhile belong to
    /// another overlay.
    pub fn release(&mut self) {
        if self.held {
            self.host.restore_scroll();
            self.held = false;
        }
    }

    /// Whether this lock currently holds the suppression.
    pub fn is_held(&self) -> bool {
        self.held
    }
}

/// Tear-down while open must not leak the suppression.
impl<H: ScrollHost> Drop for ScrollLock<H> {
    fn drop(&mut self) {
        self.release();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts suppress/restore calls; shared so assertions survive Drop.
    #[derive(Default)]
    struct CountingHost {
        suppressed: Rc<Cell<u32>>,
        restored: Rc<Cell<u32>>,
    }

    impl ScrollHost for CountingHost {
        fn suppress_scroll(&mut self) {
            self.suppressed.set(self.suppressed.get() + 1);
        }

        fn restore_scroll(&mut self) {
            self.restored.set(self.restored.get() + 1);
        }
    }

    fn counting_host() -> (CountingHost, Rc<Cell<u32>>, Rc<Cell<u32>>) {
        let host = CountingHost::default();
        let suppressed = Rc::clone(&host.suppressed);
        let restored = Rc::clone(&host.restored);
        (host, suppressed, restored)
    }

    #[test]
    fn test_acquire_release_round_trip() {
        let (host, suppressed, restored) = counting_host();
        let mut lock = ScrollLock::new(host);

        // open → close → open → close leaves the host balanced
        lock.acquire();
        lock.release();
        lock.acquire();
        lock.release();

        assert_eq!(suppressed.get(), 2);
        assert_eq!(restored.get(), 2);
        assert!(!lock.is_held());
    }

    #[test]
    fn test_acquire_is_idempotent() {
        let (host, suppressed, _) = counting_host();
        let mut lock = ScrollLock::new(host);

        lock.acquire();
        lock.acquire();
        lock.acquire();

        assert_eq!(suppressed.get(), 1);
        assert!(lock.is_held());
    }

    #[test]
    fn test_release_never_over_releases() {
        let (host, _, restored) = counting_host();
        let mut lock = ScrollLock::new(host);

        lock.acquire();
        lock.release();
        lock.release();
        lock.release();

        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_release_without_acquire_is_noop() {
        let (host, _, restored) = counting_host();
        let mut lock = ScrollLock::new(host);

        lock.release();
        assert_eq!(restored.get(), 0);
    }

    #[test]
    fn test_drop_while_held_releases_once() {
        let (host, _, restored) = counting_host();
        {
            let mut lock = ScrollLock::new(host);
            lock.acquire();
        } // dropped while held

        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_drop_after_release_does_not_double_release() {
        let (host, _, restored) = counting_host();
        {
            let mut lock = ScrollLock::new(host);
            lock.acquire();
            lock.release();
        }

        assert_eq!(restored.get(), 1);
    }
}
