pub mod api;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Header;
use crate::hooks::SessionProvider;
use crate::pages::{
    donate::Donate,
    donate_result::{DonateOutcome, DonateResult},
    home::Home,
    not_found::NotFound,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/donate")]
    Donate,
    #[at("/donate/success")]
    DonateSuccess,
    #[at("/donate/failure")]
    DonateFailure,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <div class="min-h-screen w-full bg-gray-50 dark:bg-gray-900">
                    <Header />
                    <main class="pt-16">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
            </SessionProvider>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Donate => html! { <Donate /> },
        Route::DonateSuccess => html! { <DonateResult outcome={DonateOutcome::Success} /> },
        Route::DonateFailure => html! { <DonateResult outcome={DonateOutcome::Failure} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
