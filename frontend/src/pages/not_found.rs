use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{styles, Route};

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class={styles::FLEX_CENTER}>
            <div class={classes!(styles::CARD, "max-w-md", "mx-auto", "text-center", "space-y-4")}>
                <h1 class={styles::TEXT_H1}>{"Lost in the chaos"}</h1>
                <p class={styles::TEXT_BODY}>{"That page wandered off."}</p>
                <Link<Route> to={Route::Home} classes={styles::BUTTON_PRIMARY}>{"Go home"}</Link<Route>>
            </div>
        </div>
    }
}
