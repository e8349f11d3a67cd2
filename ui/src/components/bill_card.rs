use payloads::responses::{BillBand, BillStatus};
use yew::prelude::*;

use crate::components::FetchErrorAlert;
use crate::hooks::use_bill_status;
use crate::utils::time::format_date;

fn badge_class(band: BillBand) -> &'static str {
    match band {
        BillBand::Paid => {
            "bg-green-100 dark:bg-green-900/30 text-green-600 dark:text-green-400"
        }
        BillBand::Overdue => {
            "bg-red-100 dark:bg-red-900/30 text-red-600 dark:text-red-400"
        }
        BillBand::Unknown => {
            "bg-yellow-100 dark:bg-yellow-900/30 text-yellow-600 dark:text-yellow-400"
        }
    }
}

#[function_component]
pub fn BillCard() -> Html {
    let bill = use_bill_status();

    let initial_loading = bill.is_loading
        && bill.error.is_none()
        && bill.data == BillStatus::default();
    if initial_loading {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Loading bill information..."}
                </p>
            </div>
        };
    }

    let refresh = {
        let refetch = bill.refetch.clone();
        Callback::from(move |_: MouseEvent| refetch.emit(()))
    };
    let status = &bill.data;

    let due_date = status
        .due_date
        .as_deref()
        .map(format_date)
        .unwrap_or_else(|| "Not available".to_string());

    html! {
        <div class="space-y-4">
            { if let Some(error) = &bill.error { html! {
                <FetchErrorAlert
                    context="bill information"
                    message={error.clone()}
                    on_retry={bill.refetch.clone()}
                />
            }} else { html! {} }}

            <div class="rounded-lg border border-neutral-200 dark:border-neutral-700 bg-white dark:bg-neutral-800 p-6 space-y-6">
                <div>
                    <h2 class="text-lg font-semibold">{"Bill Status"}</h2>
                    <p class="text-sm text-neutral-600 dark:text-neutral-400">
                        {"Your current bill information"}
                    </p>
                </div>

                <div class="flex justify-between items-center">
                    <span class="text-sm font-medium">{"Status"}</span>
                    <span class={classes!(
                        "px-2.5", "py-0.5", "rounded-md", "text-xs",
                        "font-medium", badge_class(status.band())
                    )}>
                        {status.status.clone()}
                    </span>
                </div>

                { if let Some(amount) = status.amount { html! {
                    <div class="flex justify-between items-center">
                        <span class="text-sm font-medium">{"Amount"}</span>
                        <span class="font-semibold">
                            {format!("Rs. {amount:.2}")}
                        </span>
                    </div>
                }} else { html! {} }}

                <div class="flex justify-between items-center">
                    <span class="text-sm font-medium">{"Due Date"}</span>
                    <span>{due_date}</span>
                </div>

                { if status.is_unpaid() { html! {
                    <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                        <p class="text-sm font-medium text-red-800 dark:text-red-300">
                            {"Payment Due"}
                        </p>
                        <p class="text-sm text-red-700 dark:text-red-400">
                            {"Your bill payment is due. Please make a payment \
                              to continue enjoying uninterrupted service."}
                        </p>
                    </div>
                }} else { html! {} }}

                <button
                    onclick={refresh}
                    class="px-3 py-1.5 text-sm rounded-md border border-neutral-300 dark:border-neutral-600 hover:bg-neutral-100 dark:hover:bg-neutral-700"
                >
                    {"Refresh"}
                </button>
            </div>
        </div>
    }
}
