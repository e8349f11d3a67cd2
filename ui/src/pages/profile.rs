use yew::prelude::*;

use crate::components::ProfileCard;

#[function_component]
pub fn ProfilePage() -> Html {
    html! { <ProfileCard /> }
}
