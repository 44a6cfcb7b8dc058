use yew::prelude::*;
use yew_router::prelude::Link;

use crate::hooks::use_session;
use crate::{styles, Route};

#[function_component(Home)]
pub fn home() -> Html {
    let session = use_session();

    html! {
        <div class={styles::HERO_SECTION}>
            <div class={styles::HERO_CONTENT}>
                <h1 class={styles::HERO_TITLE}>{"Fuel the Chaos"}</h1>
                <p class={styles::HERO_TEXT}>
                    {"A tiny corner of the internet for experiments, side quests and questionable ideas."}
                </p>
                if session.authenticated {
                    <p class={classes!(styles::TEXT_SUCCESS, "mt-4")}>{"You are signed in."}</p>
                }
                <div class={classes!(styles::HERO_BUTTONS, "mt-10")}>
                    <Link<Route> to={Route::Donate} classes={styles::HERO_CTA_BUTTON}>
                        {"Fuel the chaos"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
