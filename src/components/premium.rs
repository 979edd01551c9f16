use std::rc::Rc;

use log::{debug, info};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::catalog::Vehicle;
use crate::components::toast::use_toaster;
use crate::dom;
use crate::state::detail::{test_drive_message, Item};
use crate::state::filter::{filter_options, BrandFilter};

#[derive(Properties, PartialEq)]
pub struct PremiumProps {
    pub vehicles: Rc<Vec<Vehicle>>,
    pub on_details: Callback<Item>,
}

#[function_component(Premium)]
pub fn premium(props: &PremiumProps) -> Html {
    let filter = use_state(BrandFilter::default);
    let options = filter_options(props.vehicles.iter().map(|v| v.brand.as_str()));

    html! {
        <section class="premium" id="premium">
            <div class="section-heading">
                <h2>{"Premium collection"}</h2>
                <p>{"Filter by brand, open a card for the full spec sheet."}</p>
            </div>
            <div class="premium-filters" role="toolbar">
                { for options.into_iter().map(|option| {
                    let active = *filter == option;
                    let onclick = {
                        let filter = filter.clone();
                        let option = option.clone();
                        Callback::from(move |_: MouseEvent| {
                            debug!("Filter -> {}", option.value());
                            filter.set(option.clone());
                        })
                    };
                    html! {
                        <button
                            class={classes!("filter-button", active.then_some("active"))}
                            data-filter={option.value().to_string()}
                            {onclick}
                        >
                            { option.value().to_string() }
                        </button>
                    }
                }) }
            </div>
            <div class="premium-grid">
                { for props.vehicles.iter().map(|vehicle| html! {
                    <PremiumCard
                        vehicle={vehicle.clone()}
                        hidden={!vehicle.is_visible(&filter)}
                        on_details={props.on_details.clone()}
                    />
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct PremiumCardProps {
    pub vehicle: Vehicle,
    pub hidden: bool,
    pub on_details: Callback<Item>,
}

/// A catalogue card. Its data attributes are what the details button reads.
#[function_component(PremiumCard)]
pub fn premium_card(props: &PremiumCardProps) -> Html {
    let vehicle = &props.vehicle;
    let toaster = use_toaster();

    let on_details = {
        let on_details = props.on_details.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(item) = dom::enclosing_item(&e) {
                on_details.emit(item);
            }
        })
    };

    let on_test_drive = Callback::from(move |e: MouseEvent| {
        let item = dom::enclosing_item(&e).unwrap_or_default();
        let message = test_drive_message(item.name.as_deref());
        info!("{}", message);
        if let Some(toaster) = &toaster {
            toaster.show(message);
        }
    });

    html! {
        <article
            class="premium-card"
            hidden={props.hidden}
            data-brand={vehicle.brand.clone()}
            data-name={vehicle.name.clone()}
            data-description={vehicle.description.clone()}
            data-year={vehicle.year.clone()}
            data-engine={vehicle.engine.clone()}
            data-fuel={vehicle.fuel.clone()}
            data-price={vehicle.price.clone()}
            data-img={vehicle.img.clone()}
        >
            {
                match &vehicle.img {
                    Some(src) => html! { <img src={src.clone()} alt={vehicle.name.clone()} loading="lazy" /> },
                    None => html! { <div class="premium-card-placeholder"></div> },
                }
            }
            <div class="premium-card-body">
                <h3>{ vehicle.name.clone() }</h3>
                <p class="premium-card-price">{ vehicle.price.clone().unwrap_or_default() }</p>
                <div class="premium-card-actions">
                    <button class="btn-ghost" data-details-trigger="" onclick={on_details}>
                        {"Details"}
                    </button>
                    <button class="btn-primary" data-testdrive-trigger="" onclick={on_test_drive}>
                        {"Test drive"}
                    </button>
                </div>
            </div>
        </article>
    }
}
