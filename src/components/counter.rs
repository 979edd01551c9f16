use gloo_timers::callback::Interval;
use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::components::reveal::use_visible_once;
use crate::config::{COUNTER_DURATION_MS, COUNTER_FRAME_MS, COUNTER_THRESHOLD};
use crate::state::counter::{counter_text, parse_target};

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub target: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    pub label: AttrValue,
}

#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let node = use_node_ref();
    let started = use_visible_once(node.clone(), COUNTER_THRESHOLD);
    let elapsed = use_state(|| 0.0_f64);
    let target = parse_target(&props.target);
    let finished = *elapsed >= COUNTER_DURATION_MS;

    {
        let elapsed = elapsed.clone();
        use_effect_with_deps(
            move |(started, finished)| {
                let ticker = (*started && !*finished).then(|| {
                    let start = Date::now();
                    Interval::new(COUNTER_FRAME_MS, move || elapsed.set(Date::now() - start))
                });
                move || drop(ticker)
            },
            (started, finished),
        );
    }

    html! {
        <div class="stat" ref={node} data-count-target={props.target.clone()} data-count-suffix={props.suffix.clone()}>
            <span class="stat-value" data-count-value="">
                { counter_text(target, &props.suffix, *elapsed, COUNTER_DURATION_MS) }
            </span>
            <span class="stat-label">{ props.label.clone() }</span>
        </div>
    }
}
