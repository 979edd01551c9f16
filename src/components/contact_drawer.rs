use gloo_timers::callback::Timeout;
use log::info;
use web_sys::{FormData, HtmlFormElement, KeyboardEvent, MouseEvent, SubmitEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::CONTACT_CLOSE_DELAY_MS;
use crate::state::contact::contact_feedback;

#[derive(Properties, PartialEq)]
pub struct ContactDrawerProps {
    pub models: Vec<AttrValue>,
}

#[function_component(ContactDrawer)]
pub fn contact_drawer(props: &ContactDrawerProps) -> Html {
    let open = use_state(|| false);
    let feedback = use_state(|| None::<String>);

    {
        let open = open.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                open.set(false);
            }
        });
    }

    let on_toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(true))
    };

    let on_close = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };

    let on_submit = {
        let open = open.clone();
        let feedback = feedback.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form: HtmlFormElement = e.target_unchecked_into();
            let data = FormData::new_with_form(&form).ok();
            let field = |key: &str| data.as_ref().and_then(|d| d.get(key).as_string());
            let name = field("name");
            let model = field("model");

            let message = contact_feedback(name.as_deref(), model.as_deref());
            info!("Contact request sent: {}", message);
            feedback.set(Some(message));
            form.reset();

            let open = open.clone();
            Timeout::new(CONTACT_CLOSE_DELAY_MS, move || open.set(false)).forget();
        })
    };

    html! {
        <>
            <button class="contact-toggle" data-contact-toggle="" onclick={on_toggle}>
                {"Contact us"}
            </button>
            <aside class={classes!("contact-drawer", (*open).then_some("is-open"))} data-contact-drawer="">
                <div class="contact-drawer-header">
                    <h2>{"Talk to a specialist"}</h2>
                    <button class="details-close" data-contact-close="" aria-label="Close" onclick={on_close}>
                        {"×"}
                    </button>
                </div>
                <form class="contact-form" data-contact-form="" onsubmit={on_submit}>
                    <label>
                        {"Name"}
                        <input type="text" name="name" required=true />
                    </label>
                    <label>
                        {"Phone"}
                        <input type="tel" name="phone" />
                    </label>
                    <label>
                        {"Model of interest"}
                        <select name="model">
                            { for props.models.iter().map(|model| html! {
                                <option value={model.clone()}>{ model.clone() }</option>
                            }) }
                        </select>
                    </label>
                    <button type="submit" class="btn-primary">{"Request a call back"}</button>
                </form>
                <p class="contact-feedback" data-contact-feedback="" role="status">
                    { (*feedback).clone().unwrap_or_default() }
                </p>
            </aside>
        </>
    }
}
