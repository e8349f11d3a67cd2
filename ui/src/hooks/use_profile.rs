use payloads::responses::ProfileInfo;
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{FetchHookReturn, use_api_data};

/// Subscriber profile. Fetched once on mount; profiles don't change out
/// from under a session, so no polling.
#[hook]
pub fn use_profile() -> FetchHookReturn<ProfileInfo> {
    use_api_data(ProfileInfo::default(), None, || async {
        let api_client = get_api_client();
        api_client.profile_info().await.map_err(|e| e.to_string())
    })
}
