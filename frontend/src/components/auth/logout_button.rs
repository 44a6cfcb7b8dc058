use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct LogoutButtonProps {
    pub on_success: Callback<()>,
}

#[function_component(LogoutButton)]
pub fn logout_button(props: &LogoutButtonProps) -> Html {
    let loading = use_state(|| false);

    let onclick = {
        let loading = loading.clone();
        let on_success = props.on_success.clone();
        Callback::from(move |_: MouseEvent| {
            if *loading {
                return;
            }
            loading.set(true);

            let loading = loading.clone();
            let on_success = on_success.clone();
            spawn_local(async move {
                match api::logout().await {
                    Ok(()) => on_success.emit(()),
                    Err(e) => log::error!("Logout failed: {}", e),
                }
                loading.set(false);
            });
        })
    };

    html! {
        <button {onclick} disabled={*loading} class={styles::BUTTON_SECONDARY}>
            { if *loading { "Signing out..." } else { "Logout" } }
        </button>
    }
}
