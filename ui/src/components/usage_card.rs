use payloads::responses::{BandUsage, UsageSummary};
use yew::prelude::*;

use crate::components::{FetchErrorAlert, ProgressBar};
use crate::hooks::use_usage_summary;

/// Usage refreshes on its own; a minute is plenty for a report the
/// operator only updates a few times an hour.
const USAGE_REFRESH_MS: u32 = 60_000;

fn usage_color(percentage: f64) -> &'static str {
    if percentage < 50.0 {
        "bg-green-500"
    } else if percentage < 80.0 {
        "bg-yellow-500"
    } else {
        "bg-red-500"
    }
}

#[function_component]
pub fn UsageCard() -> Html {
    let usage = use_usage_summary(Some(USAGE_REFRESH_MS));

    let initial_loading = usage.is_loading
        && usage.error.is_none()
        && usage.data == UsageSummary::default();
    if initial_loading {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Loading usage data..."}
                </p>
            </div>
        };
    }

    let refresh = {
        let refetch = usage.refetch.clone();
        Callback::from(move |_: MouseEvent| refetch.emit(()))
    };
    let summary = usage.data.clone();

    html! {
        <div class="space-y-4">
            { if let Some(error) = &usage.error { html! {
                <FetchErrorAlert
                    context="usage data"
                    message={error.clone()}
                    on_retry={usage.refetch.clone()}
                />
            }} else { html! {} }}

            <div class="rounded-lg border border-neutral-200 dark:border-neutral-700 bg-white dark:bg-neutral-800 p-6 space-y-6">
                <div>
                    <h2 class="text-lg font-semibold">{"SLT Data Usage"}</h2>
                    <p class="text-sm text-neutral-600 dark:text-neutral-400">
                        {"Your current data usage statistics"}
                    </p>
                    { if let Some(reported) = &summary.reported_time { html! {
                        <p class="text-xs text-neutral-500 mt-1">
                            {format!("Last updated: {reported}")}
                        </p>
                    }} else { html! {} }}
                    { if usage.is_loading { html! {
                        <p class="text-xs text-neutral-500 mt-1">{"Refreshing..."}</p>
                    }} else { html! {} }}
                </div>

                <div class="space-y-2">
                    <div class="flex items-center justify-between">
                        <span class="font-medium">{"Total Usage:"}</span>
                        <span class="font-medium">
                            {format!("{:.1}%", summary.percentage)}
                        </span>
                    </div>
                    <ProgressBar
                        percentage={summary.percentage}
                        color={usage_color(summary.percentage)}
                    />
                    <div class="flex justify-between text-xs text-neutral-500">
                        <span>{"0GB"}</span>
                        <span>{format!("{}GB", summary.limit)}</span>
                    </div>
                    <p class="text-sm pt-1">
                        {format!(
                            "You have used {:.1}GB out of your {}GB monthly \
                             allowance ({:.1}GB remaining).",
                            summary.used,
                            summary.limit,
                            summary.remaining()
                        )}
                    </p>
                </div>

                { if let Some(daytime) = &summary.daytime { html! {
                    <UsageBand
                        title="Standard (Daytime) Data"
                        note="Standard data can be used any time, day or night."
                        color="bg-amber-500"
                        band={daytime.clone()}
                    />
                }} else { html! {} }}
                { if let Some(nighttime) = &summary.nighttime { html! {
                    <UsageBand
                        title="Free (Nighttime) Data"
                        note="Nighttime data can only be used between 12AM and 8AM."
                        color="bg-blue-500"
                        band={nighttime.clone()}
                    />
                }} else { html! {} }}

                { if summary.percentage > 90.0 { html! {
                    <div class="p-4 rounded-md bg-yellow-50 dark:bg-yellow-900/20 border border-yellow-200 dark:border-yellow-800">
                        <p class="text-sm font-medium text-yellow-800 dark:text-yellow-300">
                            {"High Usage Warning"}
                        </p>
                        <p class="text-sm text-yellow-700 dark:text-yellow-400">
                            {"You're close to your data limit. Consider \
                              purchasing additional data to avoid slowdowns."}
                        </p>
                    </div>
                }} else { html! {} }}

                <button
                    onclick={refresh}
                    class="px-3 py-1.5 text-sm rounded-md border border-neutral-300 dark:border-neutral-600 hover:bg-neutral-100 dark:hover:bg-neutral-700"
                >
                    {"Refresh Data"}
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct UsageBandProps {
    title: AttrValue,
    note: AttrValue,
    color: AttrValue,
    band: BandUsage,
}

#[function_component]
fn UsageBand(props: &UsageBandProps) -> Html {
    let band = &props.band;

    html! {
        <div class="space-y-2">
            <div class="flex items-center justify-between">
                <span class="text-sm">{props.title.clone()}</span>
                <span class="font-medium">
                    {format!("{:.1}%", band.percentage)}
                </span>
            </div>
            <ProgressBar percentage={band.percentage} color={props.color.clone()} />
            <p class="text-sm pt-1">
                {format!(
                    "Used: {:.1}GB / Remaining: {:.1}GB of {}GB",
                    band.used, band.remaining, band.limit
                )}
            </p>
            <p class="text-xs text-neutral-500">{props.note.clone()}</p>
        </div>
    }
}
