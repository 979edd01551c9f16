use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;
use crate::dom::VisibilityObserver;

/// Flips to `true` the first time `node` is at least `threshold` visible
/// and stays there.
#[hook]
pub fn use_visible_once(node: NodeRef, threshold: f64) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = match node.cast::<Element>() {
                    Some(element) => VisibilityObserver::observe_once(&element, threshold, move || {
                        visible.set(true)
                    }),
                    None => {
                        warn!("Nothing mounted to observe");
                        None
                    }
                };
                move || drop(observer)
            },
            node,
        );
    }

    *visible
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// A section that fades in once it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_visible_once(node.clone(), REVEAL_THRESHOLD);

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!(props.class.clone(), visible.then_some("is-visible"))}
            data-reveal=""
        >
            { for props.children.iter() }
        </section>
    }
}
