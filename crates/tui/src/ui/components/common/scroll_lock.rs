//! Reference-counted scroll lock for background panes.
//!
//! While an overlay is visible the pane behind it must not react to scroll
//! input. The registry counts lock requests per target so nested overlays
//! over the same pane stay balanced: only the first `lock` captures the
//! pane's scroll state, and only the last `unlock` releases it, handing the
//! captured state back for exact restoration.

use std::collections::HashMap;

use super::scroll_metrics::ScrollMetrics;

/// Identity of a scroll-lockable region.
///
/// Keys the registry by region rather than by component instance, so two
/// overlays covering the same region share one lock entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollTarget {
    /// The main page content behind the nav bar and overlays.
    Body,
}

#[derive(Debug)]
struct LockEntry {
    count: usize,
    saved: ScrollMetrics,
}

/// Registry of currently scroll-locked targets.
///
/// A target is locked iff it has an entry; entries keep a count so repeated
/// `lock` calls are idempotent and only the matching final `unlock`
/// releases the target. `unlock` without a prior `lock` is a no-op, since
/// mismatched ordering can arise from legitimate re-render timing.
#[derive(Debug, Default)]
pub struct ScrollLockRegistry {
    entries: HashMap<ScrollTarget, LockEntry>,
}

impl ScrollLockRegistry {
    /// Locks a target, capturing `current` as the state to restore.
    ///
    /// The capture happens only on the first lock of a target; further
    /// locks increment the count without touching the saved state.
    pub fn lock(&mut self, target: ScrollTarget, current: ScrollMetrics) {
        self.entries
            .entry(target)
            .and_modify(|entry| entry.count += 1)
            .or_insert(LockEntry { count: 1, saved: current });
    }

    /// Releases one lock on a target.
    ///
    /// Returns the captured state once the count reaches zero so the owner
    /// can restore the pane exactly as it was. Returns `None` while other
    /// locks remain or when the target was never locked.
    pub fn unlock(&mut self, target: ScrollTarget) -> Option<ScrollMetrics> {
        let entry = self.entries.get_mut(&target)?;
        entry.count -= 1;
        if entry.count > 0 {
            return None;
        }
        self.entries.remove(&target).map(|entry| entry.saved)
    }

    /// Returns whether a target currently holds any lock.
    pub fn is_locked(&self, target: ScrollTarget) -> bool {
        self.entries.contains_key(&target)
    }

    /// Returns the current lock count for a target.
    pub fn lock_count(&self, target: ScrollTarget) -> usize {
        self.entries.get(&target).map_or(0, |entry| entry.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(offset: u16) -> ScrollMetrics {
        let mut m = ScrollMetrics::default();
        m.update_viewport_height(10);
        m.update_content_height(50);
        m.scroll_lines(offset as i16);
        m
    }

    #[test]
    fn locked_iff_locks_exceed_unlocks() {
        let mut registry = ScrollLockRegistry::default();
        assert!(!registry.is_locked(ScrollTarget::Body));

        registry.lock(ScrollTarget::Body, metrics(0));
        registry.lock(ScrollTarget::Body, metrics(4));
        assert!(registry.is_locked(ScrollTarget::Body));
        assert_eq!(registry.lock_count(ScrollTarget::Body), 2);

        assert_eq!(registry.unlock(ScrollTarget::Body), None);
        assert!(registry.is_locked(ScrollTarget::Body));

        let saved = registry.unlock(ScrollTarget::Body);
        assert_eq!(saved, Some(metrics(0)));
        assert!(!registry.is_locked(ScrollTarget::Body));
    }

    #[test]
    fn first_lock_capture_wins() {
        let mut registry = ScrollLockRegistry::default();
        registry.lock(ScrollTarget::Body, metrics(7));
        registry.lock(ScrollTarget::Body, metrics(25));

        registry.unlock(ScrollTarget::Body);
        assert_eq!(registry.unlock(ScrollTarget::Body), Some(metrics(7)));
    }

    #[test]
    fn over_unlock_is_a_silent_noop() {
        let mut registry = ScrollLockRegistry::default();
        assert_eq!(registry.unlock(ScrollTarget::Body), None);

        registry.lock(ScrollTarget::Body, metrics(3));
        assert_eq!(registry.unlock(ScrollTarget::Body), Some(metrics(3)));
        assert_eq!(registry.unlock(ScrollTarget::Body), None);
        assert_eq!(registry.unlock(ScrollTarget::Body), None);
        assert!(!registry.is_locked(ScrollTarget::Body));
    }

    #[test]
    fn relock_after_release_captures_fresh_state() {
        let mut registry = ScrollLockRegistry::default();
        registry.lock(ScrollTarget::Body, metrics(2));
        registry.unlock(ScrollTarget::Body);

        registry.lock(ScrollTarget::Body, metrics(9));
        assert_eq!(registry.unlock(ScrollTarget::Body), Some(metrics(9)));
    }
}
