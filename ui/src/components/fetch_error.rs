use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Contextual string like "usage data" or "bill information".
    pub context: AttrValue,
    pub message: AttrValue,
    pub on_retry: Callback<()>,
}

/// Error banner with the manual retry button. Errors never clear on their
/// own; this button is the way out.
#[function_component]
pub fn FetchErrorAlert(props: &Props) -> Html {
    let onclick = {
        let on_retry = props.on_retry.clone();
        Callback::from(move |_: MouseEvent| on_retry.emit(()))
    };

    html! {
        <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
            <p class="text-sm text-red-700 dark:text-red-400">
                {format!("Error loading {}: {}", props.context, props.message)}
            </p>
            <button
                {onclick}
                class="mt-2 px-3 py-1.5 text-sm rounded-md border border-red-300 dark:border-red-700 text-red-700 dark:text-red-300 hover:bg-red-100 dark:hover:bg-red-900/40"
            >
                {"Retry"}
            </button>
        </div>
    }
}
