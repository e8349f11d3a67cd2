use payloads::responses::ProfileInfo;
use yew::prelude::*;

use crate::components::FetchErrorAlert;
use crate::hooks::use_profile;

#[function_component]
pub fn ProfileCard() -> Html {
    let profile = use_profile();

    let initial_loading = profile.is_loading
        && profile.error.is_none()
        && profile.data == ProfileInfo::default();
    if initial_loading {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Loading profile data..."}
                </p>
            </div>
        };
    }

    let refresh = {
        let refetch = profile.refetch.clone();
        Callback::from(move |_: MouseEvent| refetch.emit(()))
    };
    let info = &profile.data;

    let fields = [
        ("Name", info.fullname.clone()),
        ("Package", info.package.clone()),
        (
            "Contact No",
            info.contact_no
                .clone()
                .unwrap_or_else(|| "Not provided".to_string()),
        ),
        (
            "Email",
            info.email
                .clone()
                .unwrap_or_else(|| "Not provided".to_string()),
        ),
        (
            "Mobile No",
            info.mobile_no().unwrap_or("Not provided").to_string(),
        ),
    ];

    html! {
        <div class="space-y-4">
            { if let Some(error) = &profile.error { html! {
                <FetchErrorAlert
                    context="profile"
                    message={error.clone()}
                    on_retry={profile.refetch.clone()}
                />
            }} else { html! {} }}

            <div class="rounded-lg border border-neutral-200 dark:border-neutral-700 bg-white dark:bg-neutral-800 p-6 space-y-6">
                <div>
                    <h2 class="text-lg font-semibold">{"Your Profile"}</h2>
                    <p class="text-sm text-neutral-600 dark:text-neutral-400">
                        {"Your SLT account information"}
                    </p>
                </div>

                <div class="space-y-4">
                    { for fields.iter().map(|(label, value)| html! {
                        <div class="flex items-start gap-3">
                            <div class="space-y-1">
                                <p class="text-sm font-medium text-neutral-500">
                                    {*label}
                                </p>
                                <p class="text-sm">{value.clone()}</p>
                            </div>
                        </div>
                    })}
                </div>

                <button
                    onclick={refresh}
                    class="px-3 py-1.5 text-sm rounded-md border border-neutral-300 dark:border-neutral-600 hover:bg-neutral-100 dark:hover:bg-neutral-700"
                >
                    {"Refresh Profile"}
                </button>
            </div>
        </div>
    }
}
