//! Lifecycle tests for the fetch state machine and polling driver, run
//! against tokio's paused clock.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use payloads::fetch::{FetchState, FetchTracker, poll_every};

/// Applies an attempt's result the way the UI hook does: only the most
/// recently initiated attempt of a still-attached consumer may settle the
/// state, and a failure leaves the previous data untouched.
fn resolve<T>(
    state: &mut FetchState<T>,
    tracker: &FetchTracker,
    attempt: u64,
    result: Result<T, String>,
) {
    if !tracker.is_current(attempt) {
        return;
    }
    match result {
        Ok(value) => {
            state.data = value;
            state.error = None;
        }
        Err(message) => state.error = Some(message),
    }
    state.is_loading = false;
}

#[test]
fn successful_fetch_settles_with_the_value() {
    let tracker = FetchTracker::new();
    let mut state = FetchState::new(0u32);

    let attempt = tracker.begin();
    resolve(&mut state, &tracker, attempt, Ok(42));

    assert_eq!(state.data, 42);
    assert!(!state.is_loading);
    assert!(state.error.is_none());
}

#[test]
fn failed_fetch_keeps_prior_data() {
    let tracker = FetchTracker::new();
    let mut state = FetchState::new(0u32);

    let attempt = tracker.begin();
    resolve(&mut state, &tracker, attempt, Ok(42));

    let attempt = tracker.begin();
    state.is_loading = true;
    resolve(
        &mut state,
        &tracker,
        attempt,
        Err("API error: 500".to_string()),
    );

    // stale-but-present: the last good value stays alongside the error
    assert_eq!(state.data, 42);
    assert!(!state.is_loading);
    assert_eq!(state.error.as_deref(), Some("API error: 500"));
}

#[test]
fn first_failure_leaves_the_initial_value() {
    let tracker = FetchTracker::new();
    let mut state = FetchState::new("initial".to_string());

    let attempt = tracker.begin();
    resolve(&mut state, &tracker, attempt, Err("boom".into()));

    assert_eq!(state.data, "initial");
    assert_eq!(state.error.as_deref(), Some("boom"));
}

#[test]
fn slow_old_response_cannot_overwrite_a_newer_one() {
    let tracker = FetchTracker::new();
    let mut state = FetchState::new(0u32);

    // A slow attempt starts, then a second attempt is initiated and
    // resolves first.
    let slow = tracker.begin();
    let fast = tracker.begin();
    resolve(&mut state, &tracker, fast, Ok(2));

    // The slow response arrives last but was superseded at initiation
    // time, so it is dropped.
    resolve(&mut state, &tracker, slow, Ok(1));
    assert_eq!(state.data, 2);
    assert!(state.error.is_none());
}

#[test]
fn detached_consumer_never_sees_a_late_result() {
    let tracker = FetchTracker::new();
    let mut state = FetchState::new(0u32);

    let attempt = tracker.begin();
    tracker.detach();
    resolve(&mut state, &tracker, attempt, Ok(99));

    assert_eq!(state.data, 0);
    assert!(state.is_loading);
}

#[tokio::test(start_paused = true)]
async fn polling_fires_on_the_interval() {
    let tracker = Rc::new(FetchTracker::new());
    let ticks = Rc::new(Cell::new(0u32));

    let tick_counter = ticks.clone();
    let poll = poll_every(
        tracker.clone(),
        Duration::from_millis(1000),
        tokio::time::sleep,
        move || tick_counter.set(tick_counter.get() + 1),
    );
    tokio::pin!(poll);

    // Over a simulated 3.5s window the loop ticks at 1000, 2000, 3000.
    tokio::select! {
        _ = &mut poll => unreachable!("loop only exits on detach"),
        _ = tokio::time::sleep(Duration::from_millis(3500)) => {}
    }
    assert_eq!(ticks.get(), 3);

    // Detaching stops the loop without another tick.
    tracker.detach();
    poll.await;
    assert_eq!(ticks.get(), 3);
}

#[tokio::test(start_paused = true)]
async fn detach_before_the_first_tick_means_no_ticks() {
    let tracker = Rc::new(FetchTracker::new());
    let ticks = Rc::new(Cell::new(0u32));

    tracker.detach();
    let tick_counter = ticks.clone();
    poll_every(
        tracker,
        Duration::from_millis(1000),
        tokio::time::sleep,
        move || tick_counter.set(tick_counter.get() + 1),
    )
    .await;

    assert_eq!(ticks.get(), 0);
}
