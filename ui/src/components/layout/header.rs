use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::DarkModeToggle;

const NAV_ITEMS: [(Route, &str); 5] = [
    (Route::Dashboard, "Dashboard"),
    (Route::Usage, "Data Usage"),
    (Route::Profile, "Profile"),
    (Route::Bills, "Bills"),
    (Route::Vas, "VAS Bundles"),
];

#[function_component]
pub fn Header() -> Html {
    html! {
        <header class="bg-white dark:bg-neutral-800 border-b border-neutral-200 dark:border-neutral-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center space-x-8">
                        <h1 class="text-xl font-semibold text-neutral-900 dark:text-white">
                            {"MySLT Dashboard"}
                        </h1>
                        <nav class="hidden md:flex space-x-4">
                            { for NAV_ITEMS.iter().map(|(route, label)| html! {
                                <Link<Route>
                                    to={route.clone()}
                                    classes="text-sm text-neutral-600 dark:text-neutral-300 hover:text-neutral-900 dark:hover:text-white"
                                >
                                    {*label}
                                </Link<Route>>
                            })}
                        </nav>
                    </div>
                    <div class="flex items-center space-x-4">
                        <DarkModeToggle />
                    </div>
                </div>
            </div>
        </header>
    }
}
