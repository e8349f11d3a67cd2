use yew::prelude::*;

use crate::components::VasBundleCard;
use crate::hooks::use_extra_gb;

#[function_component]
pub fn VasPage() -> Html {
    let extra_gb = use_extra_gb();

    html! {
        <div class="space-y-8">
            <VasBundleCard />

            // Opaque operator payload; show whatever fields came back.
            { if !extra_gb.data.is_empty() { html! {
                <div class="rounded-lg border border-neutral-200 dark:border-neutral-700 bg-white dark:bg-neutral-800 p-6 space-y-4">
                    <h2 class="text-lg font-semibold">{"Extra GB"}</h2>
                    <div class="space-y-2">
                        { for extra_gb.data.iter().map(|(key, value)| {
                            // strings render without their JSON quotes
                            let display = match value.as_str() {
                                Some(s) => s.to_string(),
                                None => value.to_string(),
                            };
                            html! {
                                <div class="flex justify-between text-sm">
                                    <span class="text-neutral-500">{key.clone()}</span>
                                    <span>{display}</span>
                                </div>
                            }
                        })}
                    </div>
                </div>
            }} else { html! {} }}
        </div>
    }
}
