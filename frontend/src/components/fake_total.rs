use yew::prelude::*;

use shared::donations::{fake_total, format_inr_whole};

use crate::styles;

/// Decorative "raised so far" figure, rolled once per mount.
#[function_component(FakeTotal)]
pub fn fake_total_display() -> Html {
    let total = use_state(|| None::<u32>);

    {
        let total = total.clone();
        use_effect_with((), move |_| {
            total.set(Some(fake_total(&mut rand::thread_rng())));
            || ()
        });
    }

    let label = match *total {
        Some(value) => format_inr_whole(value),
        None => "₹—".to_string(),
    };

    html! {
        <span class={styles::STAT_VALUE}>{label}</span>
    }
}
