use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{PREMIUM_SECTION_SELECTOR, TAGLINES, TAGLINE_INTERVAL_MS};
use crate::dom;
use crate::state::tagline::next_index;

#[function_component(Hero)]
pub fn hero() -> Html {
    let tagline = use_state(|| 0_usize);

    {
        let tagline = tagline.clone();
        use_interval(
            move || {
                let next = next_index(*tagline, TAGLINES.len());
                debug!("Hero tagline -> {}", next);
                tagline.set(next);
            },
            TAGLINE_INTERVAL_MS,
        );
    }

    let browse = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        dom::scroll_to(PREMIUM_SECTION_SELECTOR);
    });

    html! {
        <header class="hero">
            <div class="hero-background"></div>
            <div class="hero-content">
                <p class="hero-eyebrow">{"Showroom"}</p>
                <h1 class="hero-title">
                    {"Your destination for "}
                    <span class="hero-tagline" data-hero-tagline="">
                        { TAGLINES.get(*tagline).copied().unwrap_or_default() }
                    </span>
                </h1>
                <p class="hero-subtitle">
                    {"Hand-picked cars and motorcycles, inspected, serviced and ready for the road."}
                </p>
                <div class="hero-cta-group">
                    <button class="hero-cta" data-scroll="premium" onclick={browse}>
                        {"Browse the collection"}
                    </button>
                </div>
            </div>
        </header>
    }
}
