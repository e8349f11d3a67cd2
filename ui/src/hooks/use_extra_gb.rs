use payloads::responses::RawFields;
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{FetchHookReturn, use_api_data};

/// Extra GB add-on details. An unvalidated passthrough record; the VAS
/// page handles absent keys itself.
#[hook]
pub fn use_extra_gb() -> FetchHookReturn<RawFields> {
    use_api_data(RawFields::default(), None, || async {
        let api_client = get_api_client();
        api_client.extra_gb().await.map_err(|e| e.to_string())
    })
}
