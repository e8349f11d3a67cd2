use yew::prelude::*;
use yewdux::prelude::*;

use crate::{State, ThemeMode};

/// Cycles light, dark, and follow-system.
#[function_component]
pub fn DarkModeToggle() -> Html {
    let (state, dispatch) = use_store::<State>();

    let label = match state.theme_mode {
        ThemeMode::Light => "Light",
        ThemeMode::Dark => "Dark",
        ThemeMode::System => "Auto",
    };

    let onclick: Callback<MouseEvent> =
        dispatch.reduce_mut_callback(|state| {
            state.theme_mode = match state.theme_mode {
                ThemeMode::Light => ThemeMode::Dark,
                ThemeMode::Dark => ThemeMode::System,
                ThemeMode::System => ThemeMode::Light,
            };
        });

    html! {
        <button
            {onclick}
            class="px-3 py-1.5 text-sm rounded-md border border-neutral-300 dark:border-neutral-600 text-neutral-700 dark:text-neutral-300 hover:bg-neutral-100 dark:hover:bg-neutral-700"
            title="Toggle color scheme"
        >
            {label}
        </button>
    }
}
