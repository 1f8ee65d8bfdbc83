use web_sys::Element;
use yew::prelude::*;

use super::dom::{self, VisibilityObserver};
use crate::reveal::{RevealAnimation, RevealLatch, RevealState, REVEAL_THRESHOLD};

/// Latches to `Revealed` once `node` is at least [`REVEAL_THRESHOLD`] visible.
#[hook]
pub fn use_reveal(node: NodeRef) -> RevealState {
    let state = use_state(|| {
        if dom::prefers_reduced_motion() {
            RevealState::Revealed
        } else {
            RevealState::Unseen
        }
    });

    {
        let state = state.clone();
        use_effect_with(node, move |node| {
            let mut observer = None;

            if *state == RevealState::Unseen {
                match node.cast::<Element>() {
                    Some(element) => {
                        let on_ratio = {
                            let state = state.clone();
                            let mut latch = RevealLatch::new(REVEAL_THRESHOLD);
                            move |ratio: f64| {
                                if latch.observe(ratio) {
                                    state.set(RevealState::Revealed);
                                }
                            }
                        };

                        match VisibilityObserver::observe(&element, REVEAL_THRESHOLD, on_ratio) {
                            Ok(created) => observer = Some(created),
                            Err(_) => {
                                log::warn!("IntersectionObserver unavailable; revealing immediately");
                                state.set(RevealState::Revealed);
                            }
                        }
                    }
                    None => state.set(RevealState::Revealed),
                }
            }

            move || drop(observer)
        });
    }

    *state
}

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let node = use_node_ref();
    let state = use_reveal(node.clone());
    let style = RevealAnimation::default().style(state);

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!("section", props.class.clone())}
            style={style}
        >
            {props.children.clone()}
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub animation: RevealAnimation,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub cursor: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let state = use_reveal(node.clone());

    html! {
        <div
            ref={node}
            class={props.class.clone()}
            style={props.animation.style(state)}
            data-cursor={props.cursor.clone()}
        >
            {props.children.clone()}
        </div>
    }
}
