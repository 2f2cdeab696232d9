use log::debug;
use web_sys::Element;
use yew::prelude::*;

use crate::dom::{self, ObserverGuard};

/// Flips to `true` the first time `node` is at least `amount` visible in the
/// browser viewport, then stops observing. Always `true` for users who ask
/// for reduced motion, so content never waits on an animation.
#[hook]
pub fn use_reveal(node: NodeRef, amount: f64) -> bool {
    let reduced_motion = use_memo(|_| dom::prefers_reduced_motion(), ());
    let revealed = use_state(|| *reduced_motion);

    {
        let revealed = revealed.clone();
        let already = *revealed;
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut observer = None;
                if !already {
                    if let Some(target) = node.cast::<Element>() {
                        let on_visible = revealed.clone();
                        let handler = move |entries: Vec<web_sys::IntersectionObserverEntry>,
                                            observer: &web_sys::IntersectionObserver| {
                            let visible = entries
                                .iter()
                                .any(|e| e.is_intersecting() && e.intersection_ratio() + 0.01 >= amount);
                            if visible {
                                debug!("section revealed");
                                on_visible.set(true);
                                observer.disconnect();
                            }
                        };
                        observer = ObserverGuard::observe(None, &[amount], &[target], handler);
                        if observer.is_none() {
                            // no observer support, show everything
                            revealed.set(true);
                        }
                    }
                }
                move || drop(observer)
            },
            node.clone(),
        );
    }

    *revealed
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(crate::config::REVEAL_AMOUNT)]
    pub amount: f64,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps children in a block that fades up once scrolled into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), props.amount);

    html! {
        <div ref={node} class={classes!("reveal", visible.then(|| "visible"), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
