use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::auth::{AuthPanel, LogoutButton};
use crate::hooks::use_session;
use crate::{styles, Route};

#[function_component(Header)]
pub fn header() -> Html {
    let session = use_session();
    let auth_open = use_state(|| false);

    // A successful check from any source closes the panel
    {
        let auth_open = auth_open.clone();
        use_effect_with(session.authenticated, move |authenticated| {
            if *authenticated {
                auth_open.set(false);
            }
            || ()
        });
    }

    let toggle_auth = {
        let auth_open = auth_open.clone();
        Callback::from(move |_: MouseEvent| auth_open.set(!*auth_open))
    };

    let close_auth = {
        let auth_open = auth_open.clone();
        Callback::from(move |_: ()| auth_open.set(false))
    };

    let on_authenticated = {
        let set_authenticated = session.set_authenticated.clone();
        Callback::from(move |_: ()| set_authenticated.emit(true))
    };

    // Drop the flag right away, then confirm with the relay.
    let on_logout = {
        let set_authenticated = session.set_authenticated.clone();
        let refresh = session.refresh.clone();
        Callback::from(move |_: ()| {
            set_authenticated.emit(false);
            refresh.emit(());
        })
    };

    html! {
        <nav class={styles::NAV}>
            <div class={styles::NAV_INNER}>
                <div class={styles::NAV_CONTENT}>
                    <Link<Route> to={Route::Home} classes={styles::NAV_BRAND}>{"Fuel the Chaos"}</Link<Route>>

                    <div class={styles::NAV_ITEMS}>
                        <Link<Route> to={Route::Home} classes={styles::NAV_LINK}>{"Home"}</Link<Route>>
                        <Link<Route> to={Route::Donate} classes={styles::NAV_LINK}>{"Donate"}</Link<Route>>

                        if session.authenticated {
                            <LogoutButton on_success={on_logout} />
                        } else {
                            <div class="relative">
                                <button onclick={toggle_auth} class={styles::BUTTON_SECONDARY}>
                                    {"Login"}
                                </button>
                                if *auth_open {
                                    <div class={styles::AUTH_DROPDOWN}>
                                        <AuthPanel {on_authenticated} on_close={close_auth} />
                                    </div>
                                }
                            </div>
                        }
                    </div>
                </div>
            </div>
        </nav>
    }
}
