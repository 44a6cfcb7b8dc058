use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;
use yew_router::prelude::*;

use shared::constants::RESULT_REDIRECT_DELAY;

use crate::{styles, Route};

const COUNTDOWN_START: u32 = 5;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DonateOutcome {
    Success,
    Failure,
}

/// Seconds shown before the automatic trip home. Never drops below one.
#[derive(Clone, Copy, PartialEq, Debug)]
struct Countdown(u32);

impl Reducible for Countdown {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(Countdown(self.0.saturating_sub(1).max(1)))
    }
}

#[derive(Properties, PartialEq)]
pub struct DonateResultProps {
    pub outcome: DonateOutcome,
}

#[function_component(DonateResult)]
pub fn donate_result(props: &DonateResultProps) -> Html {
    let seconds = use_reducer(|| Countdown(COUNTDOWN_START));
    let navigator = use_navigator();

    {
        let seconds = seconds.clone();
        use_effect_with((), move |_| {
            let interval = Interval::new(1000, move || seconds.dispatch(()));
            let redirect = Timeout::new(RESULT_REDIRECT_DELAY.as_millis() as u32, move || {
                if let Some(navigator) = navigator {
                    navigator.push(&Route::Home);
                }
            });

            move || {
                drop(interval);
                drop(redirect);
            }
        });
    }

    let (heading, lead, primary, secondary) = match props.outcome {
        DonateOutcome::Success => (
            "Donation received. Chaos fueled.",
            "Thank you for the boost!",
            ("Donate again", Route::Donate),
            ("Go to home now", Route::Home),
        ),
        DonateOutcome::Failure => (
            "Payment failed. Sad trombone.",
            "It happens!",
            ("Go to home now", Route::Home),
            ("Try again", Route::Donate),
        ),
    };

    html! {
        <div class={styles::FLEX_CENTER}>
            <div class={classes!(styles::CARD, "max-w-xl", "mx-auto", "text-center", "space-y-4")}>
                <h1 class={styles::TEXT_H1}>{heading}</h1>
                <p class={styles::TEXT_BODY}>
                    {format!("{} Redirecting you home in {} seconds.", lead, seconds.0)}
                </p>
                <div class="flex flex-wrap justify-center gap-3">
                    <Link<Route> to={secondary.1} classes={styles::BUTTON_SECONDARY}>{secondary.0}</Link<Route>>
                    <Link<Route> to={primary.1} classes={styles::BUTTON_PRIMARY}>{primary.0}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
