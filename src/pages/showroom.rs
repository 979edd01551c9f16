use chrono::{Datelike, Local};
use log::info;
use yew::prelude::*;

use crate::catalog;
use crate::components::{
    contact_drawer::ContactDrawer,
    counter::Counter,
    details_modal::DetailsModal,
    hero::Hero,
    premium::Premium,
    reveal::Reveal,
    scroll_progress::ScrollProgress,
};
use crate::state::detail::{ModalAction, ModalState};

#[function_component(Showroom)]
pub fn showroom() -> Html {
    let vehicles = use_memo(|_| catalog::vehicles(), ());
    let modal = use_reducer(ModalState::default);

    {
        let count = vehicles.len();
        use_effect_with_deps(
            move |_| {
                info!("Showroom mounted with {} vehicles", count);
                || ()
            },
            (),
        );
    }

    let dispatch = {
        let dispatcher = modal.dispatcher();
        use_callback(move |action: ModalAction, _| dispatcher.dispatch(action), ())
    };
    let on_details = dispatch.reform(ModalAction::Open);

    let models: Vec<AttrValue> = vehicles
        .iter()
        .map(|v| AttrValue::from(v.name.clone()))
        .collect();
    let year = Local::now().year();

    html! {
        <div class="showroom">
            <style>{ STYLES }</style>
            <ScrollProgress />
            <Hero />

            <Reveal class="stats">
                <Counter target="25" suffix="+" label="Years on the road" />
                <Counter target="1200" suffix="+" label="Vehicles delivered" />
                <Counter target="98" suffix="%" label="Happy owners" />
            </Reveal>

            <Premium vehicles={vehicles.clone()} on_details={on_details} />

            <Reveal class="why-us">
                <h2>{"Why buy with us"}</h2>
                <ul class="feature-list">
                    <li>{"Multi-point inspection on every vehicle"}</li>
                    <li>{"Free test drives, at the showroom or at your door"}</li>
                    <li>{"Flexible financing and trade-in valuations"}</li>
                </ul>
            </Reveal>

            <footer class="site-footer">
                <p>
                    {"© "}
                    <span data-current-year="">{ year.to_string() }</span>
                    {" Showroom. All rights reserved."}
                </p>
            </footer>

            <DetailsModal state={(*modal).clone()} dispatch={dispatch} />
            <ContactDrawer models={models} />
        </div>
    }
}

const STYLES: &str = r#"
    .scroll-progress {
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        height: 3px;
        z-index: 50;
    }
    .scroll-progress-bar {
        height: 100%;
        background: #c9a227;
    }
    [data-reveal] {
        opacity: 0;
        transform: translateY(24px);
        transition: opacity 0.6s ease, transform 0.6s ease;
    }
    [data-reveal].is-visible {
        opacity: 1;
        transform: none;
    }
    .premium-card[hidden] {
        display: none;
    }
    .filter-button.active {
        background: #c9a227;
        color: #111;
    }
    .details-modal {
        position: fixed;
        inset: 0;
        display: flex;
        align-items: center;
        justify-content: center;
        background: rgba(0, 0, 0, 0.7);
        opacity: 0;
        pointer-events: none;
        transition: opacity 0.3s ease;
        z-index: 40;
    }
    .details-modal.is-open {
        opacity: 1;
        pointer-events: auto;
    }
    .details-dialog {
        background: #1a1a1a;
        color: #eee;
        border-radius: 16px;
        max-width: 720px;
        width: 90%;
        overflow: hidden;
    }
    .details-image {
        width: 100%;
        height: 280px;
        object-fit: cover;
    }
    .details-image.placeholder {
        background: linear-gradient(135deg, #2a2a2a, #111);
    }
    .toast-stack {
        position: fixed;
        bottom: 24px;
        right: 24px;
        display: flex;
        flex-direction: column;
        gap: 8px;
        z-index: 60;
    }
    .toast-message {
        background: rgba(26, 26, 26, 0.95);
        color: #fff;
        padding: 12px 18px;
        border-radius: 10px;
        opacity: 0;
        transform: translateY(12px);
        transition: opacity 0.3s ease, transform 0.3s ease;
    }
    .toast-message.is-visible {
        opacity: 1;
        transform: none;
    }
    .contact-drawer {
        position: fixed;
        top: 0;
        right: 0;
        height: 100%;
        width: min(380px, 100%);
        background: #141414;
        transform: translateX(100%);
        transition: transform 0.3s ease;
        z-index: 45;
    }
    .contact-drawer.is-open {
        transform: none;
    }
    @media (prefers-reduced-motion: reduce) {
        .toast-message, .details-modal, .contact-drawer, [data-reveal] {
            transition: none;
        }
    }
"#;
