use payloads::responses::VasBundle;
use yew::prelude::*;

use crate::components::FetchErrorAlert;
use crate::hooks::use_vas_bundles;
use crate::utils::time::{days_until, expiry_label, today};

fn expiry_color(days_left: Option<i32>) -> &'static str {
    match days_left {
        None => "text-neutral-500",
        Some(days) if days <= 3 => "text-red-500",
        Some(days) if days <= 7 => "text-yellow-500",
        Some(_) => "text-green-500",
    }
}

#[function_component]
pub fn VasBundleCard() -> Html {
    let vas = use_vas_bundles();

    let initial_loading =
        vas.is_loading && vas.error.is_none() && vas.data.bundles.is_empty();
    if initial_loading {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Loading VAS bundle information..."}
                </p>
            </div>
        };
    }

    let refresh = {
        let refetch = vas.refetch.clone();
        Callback::from(move |_: MouseEvent| refetch.emit(()))
    };

    html! {
        <div class="space-y-4">
            { if let Some(error) = &vas.error { html! {
                <FetchErrorAlert
                    context="VAS bundles"
                    message={error.clone()}
                    on_retry={vas.refetch.clone()}
                />
            }} else { html! {} }}

            <div class="rounded-lg border border-neutral-200 dark:border-neutral-700 bg-white dark:bg-neutral-800 p-6 space-y-6">
                <div>
                    <h2 class="text-lg font-semibold">{"Value-Added Services"}</h2>
                    <p class="text-sm text-neutral-600 dark:text-neutral-400">
                        {"Your active VAS bundles"}
                    </p>
                </div>

                { if vas.data.bundles.is_empty() { html! {
                    <div class="p-4 rounded-md bg-neutral-50 dark:bg-neutral-700/40 border border-neutral-200 dark:border-neutral-600">
                        <p class="text-sm font-medium">{"No Active Bundles"}</p>
                        <p class="text-sm text-neutral-600 dark:text-neutral-400">
                            {"You don't have any active VAS bundles at this time."}
                        </p>
                    </div>
                }} else { html! {
                    <div class="space-y-4">
                        { for vas.data.bundles.iter().map(render_bundle) }
                    </div>
                }}}

                <button
                    onclick={refresh}
                    class="px-3 py-1.5 text-sm rounded-md border border-neutral-300 dark:border-neutral-600 hover:bg-neutral-100 dark:hover:bg-neutral-700"
                >
                    {"Refresh Bundles"}
                </button>
            </div>
        </div>
    }
}

fn render_bundle(bundle: &VasBundle) -> Html {
    let expiry = bundle.expiry_date.as_deref().map(|date| {
        let days_left = days_until(date, today());
        let label = match days_left {
            Some(days) => expiry_label(days),
            None => format!("Expires: {date}"),
        };
        (expiry_color(days_left), label)
    });

    html! {
        <div class="border border-neutral-200 dark:border-neutral-600 rounded-lg p-4">
            <div class="flex justify-between items-start mb-2">
                <h3 class="font-semibold">{bundle.name.clone()}</h3>
                { if let Some((color, label)) = expiry { html! {
                    <span class={classes!("text-xs", color)}>{label}</span>
                }} else { html! {} }}
            </div>
            { if let Some(used) = &bundle.used { html! {
                <p class="text-sm">{format!("Used: {used}")}</p>
            }} else { html! {} }}
            { if let Some(description) = &bundle.description { html! {
                <p class="text-xs text-neutral-500 mt-2">{description.clone()}</p>
            }} else { html! {} }}
        </div>
    }
}
