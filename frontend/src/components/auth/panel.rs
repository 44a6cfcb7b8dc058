use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use shared::auth_flow::{AuthFlow, Feedback, Field, FlowEffect, ViewKind};

use crate::api;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct AuthPanelProps {
    pub on_authenticated: Callback<()>,
    pub on_close: Callback<()>,
}

fn field_input(
    input_type: &'static str,
    placeholder: &'static str,
    value: &str,
    oninput: Callback<InputEvent>,
    disabled: bool,
) -> Html {
    html! {
        <input
            type={input_type}
            placeholder={placeholder}
            value={value.to_string()}
            {oninput}
            {disabled}
            required=true
            class={styles::INPUT}
        />
    }
}

#[function_component(AuthPanel)]
pub fn auth_panel(props: &AuthPanelProps) -> Html {
    let flow = use_mut_ref(AuthFlow::new);
    let redraw = use_force_update();

    let switch_to = {
        let flow = flow.clone();
        let redraw = redraw.clone();
        move |kind: ViewKind| {
            let flow = flow.clone();
            let redraw = redraw.clone();
            Callback::from(move |_: MouseEvent| {
                flow.borrow_mut().switch_to(kind);
                redraw.force_update();
            })
        }
    };

    let on_field = {
        let flow = flow.clone();
        let redraw = redraw.clone();
        move |field: Field| {
            let flow = flow.clone();
            let redraw = redraw.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                if flow.borrow_mut().update(field, input.value()) {
                    redraw.force_update();
                }
            })
        }
    };

    let on_submit = {
        let flow = flow.clone();
        let redraw = redraw.clone();
        let on_authenticated = props.on_authenticated.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let submission = flow.borrow_mut().begin_submit();
            redraw.force_update();
            let Some(submission) = submission else {
                return;
            };

            let flow = flow.clone();
            let redraw = redraw.clone();
            let on_authenticated = on_authenticated.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                let outcome = api::submit_auth(&submission).await;
                let effect = flow.borrow_mut().finish(&submission, outcome);
                redraw.force_update();

                if matches!(effect, FlowEffect::Authenticated) {
                    on_authenticated.emit(());
                    on_close.emit(());
                }
            });
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let state = flow.borrow();
    let kind = state.kind();
    let loading = state.is_loading();
    let value = |field: Field| state.view().field(field).unwrap_or_default().to_string();

    let tab_class = |tab: ViewKind| {
        if kind == tab {
            styles::AUTH_TAB_ACTIVE
        } else {
            styles::AUTH_TAB
        }
    };

    let submit_label = match kind {
        ViewKind::Login => "Sign in",
        ViewKind::Signup => "Create account",
        ViewKind::Forgot => "Send reset token",
        ViewKind::Reset => "Reset password",
    };

    let fields = match kind {
        ViewKind::Login => html! {
            <>
                { field_input("email", "Email", &value(Field::Email), on_field(Field::Email), loading) }
                { field_input("password", "Password", &value(Field::Password), on_field(Field::Password), loading) }
            </>
        },
        ViewKind::Signup => html! {
            <>
                { field_input("text", "Full name", &value(Field::Name), on_field(Field::Name), loading) }
                { field_input("email", "Email", &value(Field::Email), on_field(Field::Email), loading) }
                { field_input("password", "Password", &value(Field::Password), on_field(Field::Password), loading) }
            </>
        },
        ViewKind::Forgot => html! {
            { field_input("email", "Email for reset", &value(Field::Email), on_field(Field::Email), loading) }
        },
        ViewKind::Reset => html! {
            <>
                { field_input("text", "Reset token", &value(Field::Token), on_field(Field::Token), loading) }
                { field_input("password", "New password", &value(Field::NewPassword), on_field(Field::NewPassword), loading) }
            </>
        },
    };

    html! {
        <div class={styles::AUTH_PANEL}>
            <div class="flex space-x-2">
                <button type="button" class={tab_class(ViewKind::Login)} onclick={switch_to(ViewKind::Login)}>
                    {"Login"}
                </button>
                <button type="button" class={tab_class(ViewKind::Signup)} onclick={switch_to(ViewKind::Signup)}>
                    {"Sign up"}
                </button>
            </div>

            <form onsubmit={on_submit} class={styles::FORM}>
                { fields }
                <button type="submit" disabled={loading} class={styles::AUTH_BUTTON}>
                    { if loading { "Working..." } else { submit_label } }
                </button>
                if kind == ViewKind::Forgot {
                    <button type="button" class={styles::LINK_BUTTON} onclick={switch_to(ViewKind::Reset)}>
                        {"I already have a token"}
                    </button>
                }
            </form>

            <div class="flex items-center justify-between mt-4">
                if matches!(kind, ViewKind::Login | ViewKind::Signup) {
                    <button type="button" class={styles::LINK_BUTTON} onclick={switch_to(ViewKind::Forgot)}>
                        {"Forgot password?"}
                    </button>
                } else {
                    <button type="button" class={styles::LINK_BUTTON} onclick={switch_to(ViewKind::Login)}>
                        {"Back to login"}
                    </button>
                }
                <button type="button" class={styles::LINK_BUTTON} onclick={close}>
                    {"Close"}
                </button>
            </div>

            {
                match state.feedback() {
                    Feedback::Message(message) => html! {
                        <p class={classes!(styles::TEXT_SUCCESS, "mt-3")}>{message}</p>
                    },
                    Feedback::Error(error) => html! {
                        <p class={classes!(styles::TEXT_ERROR, "mt-3")}>{error}</p>
                    },
                    Feedback::None => html! {},
                }
            }
        </div>
    }
}
