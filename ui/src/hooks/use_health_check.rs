use payloads::responses::HealthStatus;
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{FetchHookReturn, use_api_data};

#[hook]
pub fn use_health_check(
    refresh_interval_ms: Option<u32>,
) -> FetchHookReturn<HealthStatus> {
    use_api_data(HealthStatus::default(), refresh_interval_ms, || async {
        let api_client = get_api_client();
        api_client.health_check().await.map_err(|e| e.to_string())
    })
}
