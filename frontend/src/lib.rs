pub mod base;
pub mod styles;
pub mod hooks;
pub mod models;
pub mod components;
pub mod pages;

use shared::constants::{DEFAULT_STARS_BALANCE, DEFAULT_TICKETS_BALANCE};
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
   #[at("/")] Home,
   #[not_found]
   #[at("/404")] NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    // Seed the starting balances on first visit so the currency pills have
    // something to show before any top-up.
    {
        use_effect_with((), move |_| {
            if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
                if storage.get_item(base::STARS_STORAGE_KEY).ok().flatten().is_none() {
                    let _ = storage.set_item(
                        base::STARS_STORAGE_KEY,
                        &DEFAULT_STARS_BALANCE.to_string(),
                    );
                }
                if storage.get_item(base::TICKETS_STORAGE_KEY).ok().flatten().is_none() {
                    let _ = storage.set_item(
                        base::TICKETS_STORAGE_KEY,
                        &DEFAULT_TICKETS_BALANCE.to_string(),
                    );
                }
            }
            || ()
        });
    }

    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <div class="mx-auto">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
   match route {
       Route::Home | Route::NotFound => html! { <Home /> },
   }
}
