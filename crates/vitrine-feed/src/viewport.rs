//! Viewport-triggered load coordination.
//!
//! Re-expresses the host environment's visibility primitive as an explicit
//! event-driven state machine. The host reports sentinel enter/exit; the
//! watch decides when a page load fires. Edge-triggered: one callback per
//! hidden-to-visible transition, re-armed by exit or by a watched-state
//! change, never by merely staying visible.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Watch configuration.
#[derive(Debug, Clone, Copy)]
pub struct WatchOptions {
    /// How far ahead of the sentinel's exact boundary the trigger fires,
    /// expressed as a pre-fetch margin (px) applied to the visibility root.
    pub prefetch_margin: f64,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            prefetch_margin: 100.0,
        }
    }
}

/// Feed state the watch gates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WatchState {
    /// Unrevealed entries remain.
    pub has_more: bool,
    /// A page advance is already in flight.
    pub loading: bool,
}

/// Handle releasing the underlying watch.
///
/// Dropping it — or calling [`unsubscribe`](Self::unsubscribe) — releases
/// the watch on every exit path; events the host still delivers afterwards
/// are ignored, so no callback runs after disposal.
#[derive(Debug)]
pub struct Subscription {
    active: Arc<AtomicBool>,
}

impl Subscription {
    /// Release the watch now.
    pub fn unsubscribe(self) {
        // Drop releases.
    }

    /// Whether the watch is still live.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.active.store(false, Ordering::SeqCst);
    }
}

/// Edge-triggered sentinel visibility watch.
///
/// Holds no pagination state of its own beyond the subscription handle and
/// the armed flag; `on_load_more` is typically the feed's page advance.
pub struct SentinelWatch {
    options: WatchOptions,
    state: WatchState,
    visible: bool,
    // Latched once the callback fires for the current visibility spell.
    fired: bool,
    active: Arc<AtomicBool>,
    on_load_more: Box<dyn FnMut() + Send>,
}

impl SentinelWatch {
    /// Register a watch on the sentinel region.
    pub fn observe(
        options: WatchOptions,
        state: WatchState,
        on_load_more: impl FnMut() + Send + 'static,
    ) -> (Self, Subscription) {
        let active = Arc::new(AtomicBool::new(true));
        let watch = Self {
            options,
            state,
            visible: false,
            fired: false,
            active: Arc::clone(&active),
            on_load_more: Box::new(on_load_more),
        };
        (watch, Subscription { active })
    }

    /// The configured pre-fetch margin.
    pub fn prefetch_margin(&self) -> f64 {
        self.options.prefetch_margin
    }

    /// Host event: the sentinel entered the margin-expanded viewport.
    pub fn sentinel_visible(&mut self) {
        if self.visible {
            // level, not an edge
            return;
        }
        self.visible = true;
        self.try_fire();
    }

    /// Host event: the sentinel left the viewport. Re-arms the trigger.
    pub fn sentinel_hidden(&mut self) {
        self.visible = false;
        self.fired = false;
    }

    /// The watched feed state changed. Re-arms the trigger, so a sentinel
    /// that stays visible across a completed load can fire again.
    pub fn update(&mut self, state: WatchState) {
        if state == self.state {
            return;
        }
        self.state = state;
        self.fired = false;
        self.try_fire();
    }

    fn try_fire(&mut self) {
        if !self.active.load(Ordering::SeqCst) {
            return;
        }
        if self.visible && !self.fired && self.state.has_more && !self.state.loading {
            self.fired = true;
            (self.on_load_more)();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counting_watch(state: WatchState) -> (SentinelWatch, Subscription, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let (watch, subscription) =
            SentinelWatch::observe(WatchOptions::default(), state, move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        (watch, subscription, calls)
    }

    fn ready() -> WatchState {
        WatchState {
            has_more: true,
            loading: false,
        }
    }

    #[test]
    fn test_fires_once_on_enter() {
        let (mut watch, _sub, calls) = counting_watch(ready());
        watch.sentinel_visible();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_staying_visible_does_not_refire() {
        let (mut watch, _sub, calls) = counting_watch(ready());
        watch.sentinel_visible();
        watch.sentinel_visible();
        watch.sentinel_visible();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_exit_and_reenter_refires() {
        let (mut watch, _sub, calls) = counting_watch(ready());
        watch.sentinel_visible();
        watch.sentinel_hidden();
        watch.sentinel_visible();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_no_fire_without_more_pages() {
        let (mut watch, _sub, calls) = counting_watch(WatchState {
            has_more: false,
            loading: false,
        });
        watch.sentinel_visible();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_no_fire_while_loading() {
        let (mut watch, _sub, calls) = counting_watch(WatchState {
            has_more: true,
            loading: true,
        });
        watch.sentinel_visible();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_state_change_rearms_while_visible() {
        let (mut watch, _sub, calls) = counting_watch(ready());
        watch.sentinel_visible();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // a page load starts, then completes with more pages remaining
        watch.update(WatchState {
            has_more: true,
            loading: true,
        });
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        watch.update(ready());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unchanged_state_update_does_not_rearm() {
        let (mut watch, _sub, calls) = counting_watch(ready());
        watch.sentinel_visible();
        watch.update(ready());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_exhausted_feed_stops_firing() {
        let (mut watch, _sub, calls) = counting_watch(ready());
        watch.sentinel_visible();
        watch.update(WatchState {
            has_more: false,
            loading: false,
        });
        watch.sentinel_hidden();
        watch.sentinel_visible();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dropped_subscription_silences_watch() {
        let (mut watch, sub, calls) = counting_watch(ready());
        drop(sub);
        watch.sentinel_visible();
        watch.sentinel_hidden();
        watch.sentinel_visible();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unsubscribe_silences_watch_mid_stream() {
        let (mut watch, sub, calls) = counting_watch(ready());
        watch.sentinel_visible();
        assert!(sub.is_active());
        sub.unsubscribe();

        watch.sentinel_hidden();
        watch.sentinel_visible();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
