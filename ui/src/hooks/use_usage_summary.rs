use payloads::responses::UsageSummary;
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{FetchHookReturn, use_api_data};

/// Usage summary, optionally kept fresh on a fixed interval.
///
/// The placeholder value has `limit: 1` so percentage math never divides
/// by zero before the first fetch lands.
#[hook]
pub fn use_usage_summary(
    refresh_interval_ms: Option<u32>,
) -> FetchHookReturn<UsageSummary> {
    use_api_data(UsageSummary::default(), refresh_interval_ms, || async {
        let api_client = get_api_client();
        api_client.usage_summary().await.map_err(|e| e.to_string())
    })
}
