use gloo::events::EventListener;
use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;

use shared::constants::SESSION_POLL_INTERVAL;
use shared::session::SessionPoller;

use crate::api;

/// What components see of the session: the current flag, a way to ask
/// again, and a way to set it directly after a sign-in or sign-out.
#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    pub authenticated: bool,
    pub refresh: Callback<()>,
    pub set_authenticated: Callback<bool>,
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self {
            authenticated: false,
            refresh: Callback::noop(),
            set_authenticated: Callback::noop(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Html,
}

/// Polls the check-auth relay on mount, every 30 seconds and whenever the
/// window regains focus. Checks that finish after unmount are ignored.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let authenticated = use_state(|| false);
    let poller = use_memo((), |_| SessionPoller::new());

    // Both callbacks are built once so the context value only changes
    // when the flag does.
    let refresh = {
        let setter = authenticated.setter();
        let poller = poller.clone();
        use_callback((), move |_: (), _| {
            let setter = setter.clone();
            let poller = (*poller).clone();
            spawn_local(async move {
                if let Some(flag) = poller.refresh(api::check_session).await {
                    setter.set(flag);
                }
            });
        })
    };

    {
        let refresh = refresh.clone();
        let poller = poller.clone();
        use_effect_with((), move |_| {
            refresh.emit(());

            let tick = refresh.clone();
            let interval = Interval::new(SESSION_POLL_INTERVAL.as_millis() as u32, move || {
                tick.emit(());
            });

            let focus = window().map(|w| {
                EventListener::new(&w, "focus", move |_| refresh.emit(()))
            });

            move || {
                poller.shut_down();
                drop(interval);
                drop(focus);
            }
        });
    }

    let set_authenticated = {
        let setter = authenticated.setter();
        use_callback((), move |flag: bool, _| setter.set(flag))
    };

    let handle = SessionHandle {
        authenticated: *authenticated,
        refresh,
        set_authenticated,
    };

    html! {
        <ContextProvider<SessionHandle> context={handle}>
            { props.children.clone() }
        </ContextProvider<SessionHandle>>
    }
}

#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(authenticated: bool, refresh: &Callback<()>, set: &Callback<bool>) -> SessionHandle {
        SessionHandle {
            authenticated,
            refresh: refresh.clone(),
            set_authenticated: set.clone(),
        }
    }

    #[test]
    fn test_handle_with_same_callbacks_is_equal() {
        let refresh = Callback::from(|_: ()| ());
        let set = Callback::from(|_: bool| ());
        assert!(handle(true, &refresh, &set) == handle(true, &refresh, &set));
    }

    #[test]
    fn test_handle_changes_with_the_flag_only() {
        let refresh = Callback::from(|_: ()| ());
        let set = Callback::from(|_: bool| ());
        assert!(handle(true, &refresh, &set) != handle(false, &refresh, &set));
        assert!(handle(true, &refresh, &set) != handle(true, &Callback::from(|_: ()| ()), &set));
    }
}
