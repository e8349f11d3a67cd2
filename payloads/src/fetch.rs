//! Fetch lifecycle primitives shared by the UI hooks and the native tests.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

/// Request lifecycle state for one fetch consumer.
///
/// `data` always holds the last successfully fetched value, or the initial
/// value the caller supplied before the first success. It is never cleared
/// when a fetch fails, so consumers keep showing stale data next to the
/// error indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: T,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl<T> FetchState<T> {
    /// State at mount: the initial value, loading, no error.
    pub fn new(initial: T) -> Self {
        Self {
            data: initial,
            is_loading: true,
            error: None,
        }
    }
}

/// Attempt sequencing and liveness for a single fetch consumer.
///
/// Every fetch attempt takes a number from [`begin`](Self::begin). A
/// resolving attempt may apply its result only while it is still the most
/// recently initiated one and the consumer is still attached; everything
/// else is discarded silently. This is what keeps overlapping fetches from
/// racing (a slow old response can never overwrite a newer one) and keeps
/// late responses from touching the state of an unmounted consumer.
///
/// One instance belongs to one consumer on one thread, hence `Cell`.
#[derive(Debug)]
pub struct FetchTracker {
    latest: Cell<u64>,
    live: Cell<bool>,
}

impl FetchTracker {
    pub fn new() -> Self {
        Self {
            latest: Cell::new(0),
            live: Cell::new(true),
        }
    }

    /// Start a new attempt, superseding any attempt still in flight.
    pub fn begin(&self) -> u64 {
        let attempt = self.latest.get() + 1;
        self.latest.set(attempt);
        attempt
    }

    /// Whether `attempt` is still allowed to apply its result.
    pub fn is_current(&self, attempt: u64) -> bool {
        self.live.get() && self.latest.get() == attempt
    }

    /// The consumer went away. No attempt may apply after this.
    pub fn detach(&self) {
        self.live.set(false);
    }

    pub fn is_live(&self) -> bool {
        self.live.get()
    }
}

impl Default for FetchTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Fires `on_tick` every `period` until the tracker detaches.
///
/// The sleep future is injected so the same loop runs under the browser's
/// timer (`gloo_timers::future::sleep`) and under tokio's paused clock in
/// tests.
pub async fn poll_every<S, Fut, F>(
    tracker: Rc<FetchTracker>,
    period: Duration,
    sleep: S,
    mut on_tick: F,
) where
    S: Fn(Duration) -> Fut,
    Fut: Future<Output = ()>,
    F: FnMut(),
{
    loop {
        sleep(period).await;
        if !tracker.is_live() {
            break;
        }
        on_tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempt_numbers_are_monotone() {
        let tracker = FetchTracker::new();
        let a = tracker.begin();
        let b = tracker.begin();
        let c = tracker.begin();
        assert!(a < b && b < c);
    }

    #[test]
    fn only_the_latest_attempt_is_current() {
        let tracker = FetchTracker::new();
        let first = tracker.begin();
        assert!(tracker.is_current(first));

        let second = tracker.begin();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn no_attempt_is_current_after_detach() {
        let tracker = FetchTracker::new();
        let attempt = tracker.begin();
        tracker.detach();
        assert!(!tracker.is_current(attempt));
        assert!(!tracker.is_live());

        // re-entering after detach still never applies
        let late = tracker.begin();
        assert!(!tracker.is_current(late));
    }

    #[test]
    fn initial_state_holds_the_supplied_value() {
        let state = FetchState::new(7u32);
        assert_eq!(state.data, 7);
        assert!(state.is_loading);
        assert!(state.error.is_none());
    }
}
