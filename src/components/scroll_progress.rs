use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::dom;
use crate::state::scroll::scroll_progress;

fn current_progress() -> f64 {
    dom::scroll_metrics()
        .map(|(scroll_y, height, viewport)| scroll_progress(scroll_y, height, viewport))
        .unwrap_or(0.0)
}

#[function_component(ScrollProgress)]
pub fn scroll_progress_bar() -> Html {
    let progress = use_state(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                progress.set(current_progress());
                let window = web_sys::window();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    progress.set(current_progress());
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    html! {
        <div class="scroll-progress">
            <div class="scroll-progress-bar" data-progress="" style={format!("width: {}%;", *progress)}></div>
        </div>
    }
}
