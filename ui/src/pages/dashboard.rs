use yew::prelude::*;

use crate::hooks::{
    use_bill_status, use_health_check, use_profile, use_usage_summary,
    use_vas_bundles,
};

/// Keep the connection indicator honest without hammering the backend.
const HEALTH_REFRESH_MS: u32 = 30_000;

fn stat_color(percentage: f64) -> &'static str {
    if percentage > 80.0 {
        "text-red-500"
    } else if percentage > 60.0 {
        "text-yellow-500"
    } else {
        "text-green-500"
    }
}

#[function_component]
pub fn DashboardPage() -> Html {
    let health = use_health_check(Some(HEALTH_REFRESH_MS));
    let usage = use_usage_summary(None);
    let profile = use_profile();
    let bill = use_bill_status();
    let vas = use_vas_bundles();

    let is_loading = usage.is_loading
        || profile.is_loading
        || bill.is_loading
        || vas.is_loading;
    let has_error = usage.error.is_some()
        || profile.error.is_some()
        || bill.error.is_some()
        || vas.error.is_some()
        || health.error.is_some()
        || (!health.is_loading && !health.data.is_ok());

    let (status_label, status_color) = if has_error {
        ("Service Unavailable", "text-red-500")
    } else if is_loading {
        ("Loading...", "text-yellow-500")
    } else {
        ("All Systems Operational", "text-green-500")
    };

    let active_bundles = vas.data.bundles.len();
    let bundle_description = if active_bundles == 1 {
        "VAS bundle active"
    } else {
        "VAS bundles active"
    };

    html! {
        <div class="space-y-8">
            <div class="rounded-lg border border-neutral-200 dark:border-neutral-700 bg-white dark:bg-neutral-800 p-6">
                <h2 class={classes!("text-lg", "font-semibold", status_color)}>
                    {format!("Status: {status_label}")}
                </h2>
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {"MySLT API connection status"}
                </p>
                { if has_error { html! {
                    <div class="mt-4 p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                        <p class="text-sm font-medium text-red-800 dark:text-red-300">
                            {"Connection Error"}
                        </p>
                        <p class="text-sm text-red-700 dark:text-red-400">
                            {"There was an error connecting to the MySLT API. \
                              Please try refreshing or check your connection."}
                        </p>
                    </div>
                }} else { html! {} }}
            </div>

            <div class="grid gap-4 md:grid-cols-2">
                <div class="rounded-lg border border-neutral-200 dark:border-neutral-700 bg-white dark:bg-neutral-800 p-6">
                    <h3 class="text-sm font-medium">{"Data Usage"}</h3>
                    <p class={classes!(
                        "text-2xl", "font-bold",
                        stat_color(usage.data.percentage)
                    )}>
                        {format!("{:.1}%", usage.data.percentage)}
                    </p>
                    <p class="text-xs text-neutral-500">
                        {format!(
                            "{}GB of {}GB used",
                            usage.data.used, usage.data.limit
                        )}
                    </p>
                </div>
                <div class="rounded-lg border border-neutral-200 dark:border-neutral-700 bg-white dark:bg-neutral-800 p-6">
                    <h3 class="text-sm font-medium">{"Active Bundles"}</h3>
                    <p class="text-2xl font-bold text-blue-500">
                        {active_bundles}
                    </p>
                    <p class="text-xs text-neutral-500">{bundle_description}</p>
                </div>
            </div>

            { if bill.data.is_unpaid() && !bill.is_loading && bill.error.is_none() { html! {
                <div class="p-4 rounded-md bg-yellow-50 dark:bg-yellow-900/20 border border-yellow-200 dark:border-yellow-800">
                    <p class="text-sm font-medium text-yellow-800 dark:text-yellow-300">
                        {"Payment Due"}
                    </p>
                    <p class="text-sm text-yellow-700 dark:text-yellow-400">
                        { match bill.data.amount {
                            Some(amount) => format!(
                                "You have a pending bill payment of Rs. {amount:.2}. \
                                 Due date: {}.",
                                bill.data.due_date.as_deref().unwrap_or("check bill details")
                            ),
                            None => "You have a pending bill payment.".to_string(),
                        }}
                    </p>
                </div>
            }} else { html! {} }}
        </div>
    }
}
