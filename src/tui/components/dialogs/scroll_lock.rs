//! Page scroll suspension
//!
//! A [`ScrollLock`] is the page-level "background may not scroll" flag. It is
//! only ever set through a [`ScrollLockGuard`], and dropping the guard is the
//! only way to clear it, so every exit path of whoever holds the guard
//! releases the lock.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Default)]
struct LockState {
    held: AtomicBool,
    acquired: AtomicUsize,
    released: AtomicUsize,
}

/// Shared handle to the page scroll-lock flag
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    inner: Arc<LockState>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the lock. Returns `None` when it is already held.
    pub fn acquire(&self) -> Option<ScrollLockGuard> {
        if self.inner.held.swap(true, Ordering::AcqRel) {
            return None;
        }

        let count = self.inner.acquired.fetch_add(1, Ordering::AcqRel) + 1;
        debug!("Scroll lock acquired ({} total)", count);

        Some(ScrollLockGuard {
            inner: Arc::clone(&self.inner),
        })
    }

    pub fn is_locked(&self) -> bool {
        self.inner.held.load(Ordering::Acquire)
    }

    /// Number of times the lock has been taken
    pub fn acquisitions(&self) -> usize {
        self.inner.acquired.load(Ordering::Acquire)
    }

    /// Number of times the lock has been given back
    pub fn releases(&self) -> usize {
        self.inner.released.load(Ordering::Acquire)
    }
}

/// Proof of holding the scroll lock; releases it on drop
#[derive(Debug)]
pub struct ScrollLockGuard {
    inner: Arc<LockState>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.inner.held.store(false, Ordering::Release);
        let count = self.inner.released.fetch_add(1, Ordering::AcqRel) + 1;
        debug!("Scroll lock released ({} total)", count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_releases_on_drop() {
        let lock = ScrollLock::new();
        assert!(!lock.is_locked());

        let guard = lock.acquire();
        assert!(guard.is_some());
        assert!(lock.is_locked());

        drop(guard);
        assert!(!lock.is_locked());
        assert_eq!(lock.acquisitions(), 1);
        assert_eq!(lock.releases(), 1);
    }

    #[test]
    fn test_no_double_acquire() {
        let lock = ScrollLock::new();
        let _guard = lock.acquire().unwrap();

        assert!(lock.acquire().is_none());
        assert!(lock.clone().acquire().is_none());
        assert_eq!(lock.acquisitions(), 1);
        assert_eq!(lock.releases(), 0);
    }

    #[test]
    fn test_clones_share_state() {
        let lock = ScrollLock::new();
        let page_view = lock.clone();

        let guard = lock.acquire().unwrap();
        assert!(page_view.is_locked());
        drop(guard);
        assert!(!page_view.is_locked());
    }
}
