use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::sleep;
use payloads::fetch::{FetchState, FetchTracker, poll_every};
use yew::platform::spawn_local;
use yew::prelude::*;

/// What a fetch hook hands back to its consumer.
///
/// Derefs to the [`FetchState`], so callers read `hook.data`,
/// `hook.is_loading`, and `hook.error` directly.
pub struct FetchHookReturn<T> {
    pub state: FetchState<T>,
    pub refetch: Callback<()>,
}

impl<T> std::ops::Deref for FetchHookReturn<T> {
    type Target = FetchState<T>;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

/// Generic fetch hook composer.
///
/// Fetches once on mount, re-fetches every `refresh_interval_ms` when set,
/// and exposes `refetch` for the manual retry buttons. `initial` is what
/// consumers render before the first success; a failed fetch leaves the
/// previous data in place.
///
/// Overlapping attempts (a retry click racing a slow request, or a polling
/// tick overlapping one) are sequenced through a [`FetchTracker`]: only the
/// most recently initiated attempt may apply its result, and nothing
/// applies after unmount.
///
/// # Example
///
/// ```rust,ignore
/// #[hook]
/// pub fn use_bill_status() -> FetchHookReturn<BillStatus> {
///     use_api_data(BillStatus::default(), None, || async {
///         let api_client = get_api_client();
///         api_client.bill_status().await.map_err(|e| e.to_string())
///     })
/// }
/// ```
#[hook]
pub fn use_api_data<T, F, Fut>(
    initial: T,
    refresh_interval_ms: Option<u32>,
    fetch_fn: F,
) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let data = use_state(|| initial);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| true);
    let tracker = use_memo((), |_| FetchTracker::new());

    let refetch = {
        let data = data.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        let tracker = tracker.clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback((), move |_, _| {
            let data = data.clone();
            let error = error.clone();
            let is_loading = is_loading.clone();
            let tracker = tracker.clone();
            let fetch_fn = fetch_fn.clone();

            let attempt = tracker.begin();
            is_loading.set(true);

            spawn_local(async move {
                let result = fetch_fn().await;
                if !tracker.is_current(attempt) {
                    // Superseded by a newer attempt, or the consumer
                    // unmounted. Discard silently.
                    return;
                }
                match result {
                    Ok(value) => {
                        data.set(value);
                        error.set(None);
                    }
                    Err(message) => {
                        tracing::debug!(%message, "fetch attempt failed");
                        error.set(Some(message));
                    }
                }
                is_loading.set(false);
            });
        })
    };

    // Fetch on mount, then keep polling if an interval is configured. The
    // cleanup detaches the tracker, which both stops the poll loop and
    // drops any in-flight result.
    {
        let refetch = refetch.clone();
        let tracker = tracker.clone();
        use_effect_with((), move |_| {
            refetch.emit(());
            if let Some(ms) = refresh_interval_ms {
                let tick = refetch.clone();
                spawn_local(poll_every(
                    Rc::clone(&tracker),
                    Duration::from_millis(u64::from(ms)),
                    sleep,
                    move || tick.emit(()),
                ));
            }
            move || tracker.detach()
        });
    }

    FetchHookReturn {
        state: FetchState {
            data: (*data).clone(),
            is_loading: *is_loading,
            error: (*error).clone(),
        },
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}
