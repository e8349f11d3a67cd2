use yew::prelude::*;

use crate::components::BillCard;

#[function_component]
pub fn BillPage() -> Html {
    html! { <BillCard /> }
}
