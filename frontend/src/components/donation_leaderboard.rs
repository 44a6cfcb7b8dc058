use yew::prelude::*;

use shared::constants::LEADERBOARD_LOAD_FAILED;
use shared::donations::LeaderboardEntry;
use shared::leaderboard::DonorRow;

use crate::api;
use crate::styles;

#[function_component(DonationLeaderboard)]
pub fn donation_leaderboard() -> Html {
    let entries = use_state(Vec::<LeaderboardEntry>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let entries = entries.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_leaderboard().await {
                    Ok(data) => {
                        entries.set(data);
                        error.set(None);
                    }
                    Err(e) => {
                        log::error!("Failed to fetch leaderboard: {}", e);
                        error.set(Some(LEADERBOARD_LOAD_FAILED.to_string()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let body = if *loading {
        html! { <p class={styles::TEXT_SMALL}>{"Loading heroic donors..."}</p> }
    } else if let Some(err) = &*error {
        html! { <p class={styles::TEXT_ERROR}>{err}</p> }
    } else if entries.is_empty() {
        html! { <p class={styles::TEXT_SMALL}>{"No donations yet. Be the first legend."}</p> }
    } else {
        html! {
            <div class="space-y-3">
                { for entries.iter().map(DonorRow::from).map(|row| html! {
                    <div key={row.key.clone()} class={styles::LEADERBOARD_ROW}>
                        <div class="flex items-center space-x-3">
                            <div class={styles::AVATAR} style={format!("background-color: {}", row.color)}>
                                {row.initial.clone()}
                            </div>
                            <div>
                                <p class={styles::CARD_TITLE}>{row.label.clone()}</p>
                                <p class={styles::TEXT_HINT}>{row.display_email.clone()}</p>
                            </div>
                        </div>
                        <span class="text-lg font-bold text-gray-900 dark:text-white">{row.amount.clone()}</span>
                    </div>
                }) }
            </div>
        }
    };

    html! {
        <section class={styles::CARD}>
            <div class="flex flex-wrap items-center justify-between gap-3 mb-4">
                <h2 class={styles::TEXT_H2}>{"Leaderboard of legends"}</h2>
                <span class={styles::BADGE}>{"Top 6 donors"}</span>
            </div>
            { body }
        </section>
    }
}
