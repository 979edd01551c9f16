use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use web_sys::TransitionEvent;
use yew::prelude::*;

use crate::config::{TOAST_DISPLAY_MS, TOAST_REMOVE_FALLBACK_MS};
use crate::dom;
use crate::state::toast::{Toast, ToastAction, ToastPhase, ToastQueue};

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Handle for putting a toast on screen, shared through context.
#[derive(Clone, PartialEq)]
pub struct Toaster {
    show: Callback<String>,
}

impl Toaster {
    pub fn show(&self, message: impl Into<String>) {
        self.show.emit(message.into());
    }
}

/// `None` outside a [`ToastProvider`]; callers then simply skip the toast.
#[hook]
pub fn use_toaster() -> Option<Toaster> {
    use_context::<Toaster>()
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);

    let on_action = {
        let dispatcher = queue.dispatcher();
        use_callback(move |action: ToastAction, _| dispatcher.dispatch(action), ())
    };

    let toaster = {
        let on_action = on_action.clone();
        use_memo(
            move |_| Toaster {
                show: Callback::from(move |message: String| {
                    info!("Showing toast: {}", message);
                    on_action.emit(ToastAction::Show(message));
                }),
            },
            (),
        )
    };

    html! {
        <ContextProvider<Toaster> context={(*toaster).clone()}>
            { for props.children.iter() }
            <div class="toast-stack" data-toast-stack="" aria-live="polite">
                { for queue.iter().map(|toast| html! {
                    <ToastView key={toast.id} toast={toast.clone()} on_action={on_action.clone()} />
                }) }
            </div>
        </ContextProvider<Toaster>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastViewProps {
    toast: Toast,
    on_action: Callback<ToastAction>,
}

#[function_component(ToastView)]
fn toast_view(props: &ToastViewProps) -> Html {
    let id = props.toast.id;
    let phase = props.toast.phase;

    // Show on the next frame so the CSS transition has a starting point,
    // then hide after the display time. Timers are never cancelled; a late
    // one for a removed toast is ignored by the queue.
    {
        let on_action = props.on_action.clone();
        use_effect_with_deps(
            move |id| {
                let id = *id;
                let reveal = on_action.clone();
                dom::next_frame(move || reveal.emit(ToastAction::Reveal(id)));
                Timeout::new(TOAST_DISPLAY_MS, move || on_action.emit(ToastAction::Hide(id)))
                    .forget();
                || ()
            },
            id,
        );
    }

    {
        let on_action = props.on_action.clone();
        use_effect_with_deps(
            move |(id, phase)| {
                if *phase == ToastPhase::Hidden {
                    let id = *id;
                    Timeout::new(TOAST_REMOVE_FALLBACK_MS, move || {
                        on_action.emit(ToastAction::Remove(id))
                    })
                    .forget();
                }
                || ()
            },
            (id, phase),
        );
    }

    let ontransitionend = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: TransitionEvent| {
            if phase == ToastPhase::Hidden {
                on_action.emit(ToastAction::Remove(id));
            }
        })
    };

    html! {
        <div
            class={classes!("toast-message", props.toast.is_visible().then_some("is-visible"))}
            role="status"
            {ontransitionend}
        >
            { props.toast.message.clone() }
        </div>
    }
}
