use yew::prelude::*;

use crate::components::UsageCard;

#[function_component]
pub fn UsagePage() -> Html {
    html! { <UsageCard /> }
}
