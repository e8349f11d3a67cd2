use payloads::{ApiClient, ApiConfig};
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod hooks;
mod logs;
mod pages;
mod state;
mod utils;

pub use logs::init_logging;
pub use state::{State, ThemeMode};

use components::layout::MainLayout;
use pages::{
    BillPage, DashboardPage, NotFoundPage, ProfilePage, UsagePage, VasPage,
};

/// Build an API client. The base URL comes from the build-time
/// `BACKEND_URL` override, falling back to the current origin.
pub fn get_api_client() -> ApiClient {
    let base_url = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            let window = web_sys::window().unwrap();
            window.location().origin().unwrap()
        });
    ApiClient::new(ApiConfig { base_url })
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/usage")]
    Usage,
    #[at("/profile")]
    Profile,
    #[at("/bills")]
    Bills,
    #[at("/vas")]
    Vas,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <MainLayout>
                <Switch<Route> render={switch} />
            </MainLayout>
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Usage => html! { <UsagePage /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::Bills => html! { <BillPage /> },
        Route::Vas => html! { <VasPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
