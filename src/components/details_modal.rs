use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent, Node};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::toast::use_toaster;
use crate::dom;
use crate::state::detail::{is_backdrop_click, ModalAction, ModalState};

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DetailsModalProps {
    pub state: ModalState,
    pub dispatch: Callback<ModalAction>,
}

#[function_component(DetailsModal)]
pub fn details_modal(props: &DetailsModalProps) -> Html {
    let DetailsModalProps { state, dispatch } = props;
    let toaster = use_toaster();
    let backdrop = use_node_ref();
    let is_open = state.is_open();

    // Keep the page behind the dialog still while it is up.
    {
        let overflow = state.body_overflow();
        use_effect_with_deps(
            move |_| {
                dom::set_body_overflow(overflow);
                || dom::set_body_overflow("")
            },
            is_open,
        );
    }

    {
        let dispatch = dispatch.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                dispatch.emit(ModalAction::Escape);
            }
        });
    }

    let on_backdrop = {
        let dispatch = dispatch.clone();
        let backdrop = backdrop.clone();
        // Yew delegates listeners to the app root, so `current_target` is not
        // the container here; compare against the mounted node instead.
        Callback::from(move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            let target_is_backdrop = is_backdrop_click(target.as_ref(), backdrop.get().as_ref());
            dispatch.emit(ModalAction::Backdrop { target_is_backdrop });
        })
    };

    let on_close = dispatch.reform(|_: MouseEvent| ModalAction::Close);

    let on_confirm = {
        let dispatch = dispatch.clone();
        let message = state.confirm_message();
        Callback::from(move |_: MouseEvent| {
            if let Some(toaster) = &toaster {
                toaster.show(message.clone());
            }
            dispatch.emit(ModalAction::Confirm);
        })
    };

    let view = state.view().cloned().unwrap_or_default();
    let title = view.title.clone();

    html! {
        <div
            ref={backdrop}
            class={classes!("details-modal", is_open.then_some("is-open"))}
            data-details-modal=""
            aria-hidden={state.aria_hidden()}
            onclick={on_backdrop}
        >
            <div class="details-dialog" role="dialog" aria-modal="true" aria-labelledby="details-title">
                <button class="details-close" data-details-close="" aria-label="Close" onclick={on_close.clone()}>
                    {"×"}
                </button>
                {
                    match view.image_url.clone() {
                        Some(src) => html! {
                            <img class="details-image" data-details-image="" src={src} alt={title.clone()} />
                        },
                        None => html! {
                            <div class="details-image placeholder" data-details-image=""></div>
                        },
                    }
                }
                <div class="details-body">
                    <h3 id="details-title" data-details-title="">{ title.clone() }</h3>
                    <p data-details-description="">{ view.description.clone() }</p>
                    <dl class="details-specs">
                        <dt>{"Year"}</dt>
                        <dd data-details-year="">{ view.year.clone() }</dd>
                        <dt>{"Engine"}</dt>
                        <dd data-details-engine="">{ view.engine.clone() }</dd>
                        <dt>{"Fuel"}</dt>
                        <dd data-details-fuel="">{ view.fuel.clone() }</dd>
                        <dt>{"Price"}</dt>
                        <dd data-details-price="">{ view.price.clone() }</dd>
                    </dl>
                    <div class="details-actions">
                        <button class="btn-primary" data-details-testdrive="" onclick={on_confirm}>
                            {"Book a test drive"}
                        </button>
                        <button class="btn-ghost" data-details-close="" onclick={on_close}>
                            {"Back to catalogue"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
