use payloads::responses::BillStatus;
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{FetchHookReturn, use_api_data};

#[hook]
pub fn use_bill_status() -> FetchHookReturn<BillStatus> {
    use_api_data(BillStatus::default(), None, || async {
        let api_client = get_api_client();
        api_client.bill_status().await.map_err(|e| e.to_string())
    })
}
