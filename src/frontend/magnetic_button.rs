use std::{cell::RefCell, rc::Rc};
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use super::dom::{self, FrameLoop};
use crate::{
    geometry::Point,
    magnetic::{Displacement, MagneticElement, MagneticField, DEFAULT_STRENGTH},
};

#[derive(Properties, PartialEq)]
pub struct MagneticButtonProps {
    #[prop_or_default]
    pub children: Html,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    // `<button>` only.
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or(DEFAULT_STRENGTH)]
    pub strength: f64,
}

fn offset_style(offset: Displacement) -> String {
    format!(
        "transform: translate3d({:.2}px, {:.2}px, 0);",
        offset.dx, offset.dy
    )
}

fn opens_new_tab(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

#[function_component(MagneticButton)]
pub fn magnetic_button(props: &MagneticButtonProps) -> Html {
    let wrapper = use_node_ref();
    let magnet = use_mut_ref(|| MagneticElement::new(MagneticField::new(props.strength)));
    let frame_loop: Rc<RefCell<Option<FrameLoop>>> = use_mut_ref(|| None);

    {
        let magnet = magnet.clone();
        use_effect_with(props.strength, move |strength| {
            magnet.borrow_mut().set_field(MagneticField::new(*strength));
        });
    }

    {
        let wrapper = wrapper.clone();
        let magnet = magnet.clone();
        let frame_loop = frame_loop.clone();
        use_effect_with((), move |_| {
            let driver = FrameLoop::new(move |dt_seconds| {
                let mut magnet = magnet.borrow_mut();
                let offset = magnet.frame(dt_seconds);
                if let Some(element) = wrapper.cast::<Element>() {
                    let _ = element.set_attribute("style", &offset_style(offset));
                }
                !magnet.is_at_rest()
            });
            *frame_loop.borrow_mut() = Some(driver);

            move || {
                if let Some(driver) = frame_loop.borrow_mut().take() {
                    driver.stop();
                }
            }
        });
    }

    let wake = {
        let frame_loop = frame_loop.clone();
        move || {
            if let Some(driver) = frame_loop.borrow().as_ref() {
                driver.wake();
            }
        }
    };

    let onmousemove = {
        let wrapper = wrapper.clone();
        let magnet = magnet.clone();
        let wake = wake.clone();
        Callback::from(move |event: MouseEvent| {
            let bounds = wrapper.cast::<Element>().and_then(|element| dom::element_bounds(&element));
            let pointer = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
            magnet.borrow_mut().pointer_moved(pointer, bounds);
            wake();
        })
    };

    let onmouseleave = {
        let magnet = magnet.clone();
        Callback::from(move |_: MouseEvent| {
            magnet.borrow_mut().pointer_left();
            wake();
        })
    };

    let inner = match props.href.as_ref() {
        Some(href) if opens_new_tab(href) => html! {
            <a
                class={props.class.clone()}
                href={href.clone()}
                aria-label={props.label.clone()}
                target="_blank"
                rel="noopener noreferrer"
                onclick={props.onclick.clone()}
            >
                {props.children.clone()}
            </a>
        },
        Some(href) => html! {
            <a
                class={props.class.clone()}
                href={href.clone()}
                aria-label={props.label.clone()}
                onclick={props.onclick.clone()}
            >
                {props.children.clone()}
            </a>
        },
        None => html! {
            <button
                class={props.class.clone()}
                type={props.button_type.clone()}
                aria-label={props.label.clone()}
                onclick={props.onclick.clone()}
            >
                {props.children.clone()}
            </button>
        },
    };

    html! {
        <div
            ref={wrapper}
            class="magnetic"
            data-cursor="pointer"
            onmousemove={onmousemove}
            onmouseleave={onmouseleave}
        >
            {inner}
        </div>
    }
}
