use payloads::responses::VasBundles;
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{FetchHookReturn, use_api_data};

#[hook]
pub fn use_vas_bundles() -> FetchHookReturn<VasBundles> {
    use_api_data(VasBundles::default(), None, || async {
        let api_client = get_api_client();
        api_client.vas_bundles().await.map_err(|e| e.to_string())
    })
}
