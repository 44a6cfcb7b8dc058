use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, InputEvent};
use yew::prelude::*;

use shared::checkout::{CheckoutPlan, CheckoutSettings, CheckoutState};
use shared::donations::{DONATION_TIERS, PERKS};

use crate::api;
use crate::components::donation_leaderboard::DonationLeaderboard;
use crate::config::{current_origin, navigate_to};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct DonateFormProps {
    pub settings: CheckoutSettings,
}

#[function_component(DonateForm)]
pub fn donate_form(props: &DonateFormProps) -> Html {
    let custom_amount = use_state(|| "15".to_string());
    let email = use_state(String::new);
    let checkout = use_mut_ref(CheckoutState::new);
    let redraw = use_force_update();

    let start_checkout = {
        let checkout = checkout.clone();
        let redraw = redraw.clone();
        let email = email.clone();
        let settings = props.settings.clone();

        Callback::from(move |amount: f64| {
            let plan = checkout
                .borrow_mut()
                .start(&settings, amount, &email, &current_origin());
            redraw.force_update();

            match plan {
                Ok(CheckoutPlan::Redirect(url)) => {
                    checkout.borrow_mut().finish(Some(url.clone()));
                    navigate_to(&url);
                }
                Ok(CheckoutPlan::Relay { endpoint, request }) => {
                    let checkout = checkout.clone();
                    let redraw = redraw.clone();
                    spawn_local(async move {
                        let url = api::request_checkout(&endpoint, &request).await;
                        let next = checkout.borrow_mut().finish(url);
                        redraw.force_update();
                        if let Some(url) = next {
                            navigate_to(&url);
                        }
                    });
                }
                Err(e) => log::debug!("Checkout not started: {:?}", e),
            }
        })
    };

    let on_amount = {
        let custom_amount = custom_amount.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            custom_amount.set(input.value());
        })
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let donate_custom = {
        let start_checkout = start_checkout.clone();
        let custom_amount = custom_amount.clone();
        Callback::from(move |_: MouseEvent| {
            let amount = custom_amount.trim().parse::<f64>().unwrap_or(f64::NAN);
            start_checkout.emit(amount);
        })
    };

    let state = checkout.borrow();
    let pending = state.pending_amount();

    html! {
        <div class="space-y-10">
            <section class="space-y-4">
                <div class="flex flex-wrap items-center gap-3">
                    <h2 class={styles::TEXT_H2}>{"Pick your mischief level"}</h2>
                    <span class={styles::BADGE}>{"Stripe ready"}</span>
                </div>
                <div class={styles::TIER_GRID}>
                    { for DONATION_TIERS.iter().map(|tier| {
                        let amount = f64::from(tier.amount);
                        let onclick = {
                            let start_checkout = start_checkout.clone();
                            Callback::from(move |_: MouseEvent| start_checkout.emit(amount))
                        };
                        html! {
                            <div key={tier.amount} class={styles::CARD_HOVER}>
                                <div class="flex items-center justify-between">
                                    <h3 class={styles::TEXT_H3}>{format!("${}", tier.amount)}</h3>
                                    <span class={styles::BADGE}>{tier.badge}</span>
                                </div>
                                <p class={classes!(styles::CARD_TITLE, "mt-2")}>{tier.title}</p>
                                <p class={styles::CARD_TEXT}>{tier.description}</p>
                                <button {onclick} disabled={pending.is_some()} class={classes!(styles::BUTTON_SECONDARY, "mt-4", "w-full")}>
                                    { if pending == Some(amount) { "Launching..." } else { "Donate" } }
                                </button>
                            </div>
                        }
                    }) }
                </div>
            </section>

            <section class={styles::CARD}>
                <h3 class={styles::TEXT_H3}>{"Donation details"}</h3>
                <p class={classes!(styles::TEXT_SMALL, "mt-1")}>
                    {"Email is required for the receipt and to show up on the leaderboard."}
                </p>
                <div class="mt-4 flex flex-col md:flex-row gap-3 md:items-end">
                    <input
                        type="number"
                        min="1"
                        value={(*custom_amount).clone()}
                        oninput={on_amount}
                        placeholder="Amount in INR"
                        aria-label="Custom donation amount"
                        class={styles::INPUT}
                    />
                    <input
                        type="email"
                        value={(*email).clone()}
                        oninput={on_email}
                        placeholder="you@example.com"
                        aria-label="Receipt email"
                        required=true
                        class={styles::INPUT}
                    />
                    <button onclick={donate_custom} disabled={pending.is_some()} class={classes!(styles::BUTTON_PRIMARY, "whitespace-nowrap")}>
                        { if pending.is_some() { "Preparing checkout..." } else { "Donate this amount" } }
                    </button>
                </div>
                if let Some(error) = state.error() {
                    <p class={classes!(styles::TEXT_ERROR, "mt-3")}>{error}</p>
                }
            </section>

            <DonationLeaderboard />

            <section class="space-y-4">
                <h2 class={styles::TEXT_H2}>{"Perks of generosity"}</h2>
                <div class={styles::PERK_GRID}>
                    { for PERKS.iter().map(|perk| html! {
                        <div key={perk.title} class={styles::CARD}>
                            <h3 class={styles::CARD_TITLE}>{perk.title}</h3>
                            <p class={styles::CARD_TEXT}>{perk.description}</p>
                        </div>
                    }) }
                </div>
            </section>
        </div>
    }
}
