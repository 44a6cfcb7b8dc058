use yew::prelude::*;

use crate::components::{DonateForm, FakeTotal};
use crate::config;
use crate::styles;

#[function_component(Donate)]
pub fn donate() -> Html {
    let settings = config::checkout_settings();

    html! {
        <div class={classes!(styles::CONTAINER_LG, "space-y-10")}>
            <section class={styles::CARD}>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 items-center">
                    <div class="md:col-span-2 space-y-4">
                        <div class="flex flex-wrap gap-2">
                            <span class={styles::BADGE}>{"Operation: Keep The Lights On"}</span>
                            <span class={styles::BADGE}>{"100% goof-powered"}</span>
                        </div>
                        <h1 class={styles::TEXT_H1}>{"Fuel the chaos. Save a dev from instant noodles."}</h1>
                        <p class={styles::TEXT_BODY}>
                            {"Your donation powers late-night experiments, suspiciously optimistic roadmaps, and a steady supply of keyboard snacks. No capes, just caffeine."}
                        </p>
                        <div class="flex items-center gap-6">
                            <div>
                                <FakeTotal />
                                <p class={styles::TEXT_SMALL}>{"Raised for tiny victories"}</p>
                            </div>
                            <div class="h-12 w-px bg-gray-300 dark:bg-gray-700"></div>
                            <div>
                                <span class={styles::STAT_VALUE}>{"24/7"}</span>
                                <p class={styles::TEXT_SMALL}>{"Bug-whispering hours"}</p>
                            </div>
                        </div>
                        <p class={styles::TEXT_SMALL}>{"Donate once, brag forever. Mild bragging encouraged."}</p>
                    </div>
                    <div class="text-center">
                        <div class={styles::JAR}>{"🫙"}</div>
                        <p class={classes!(styles::TEXT_SMALL, "mt-2")}>{"The official jar of questionable ideas."}</p>
                    </div>
                </div>
            </section>

            <DonateForm {settings} />
        </div>
    }
}
