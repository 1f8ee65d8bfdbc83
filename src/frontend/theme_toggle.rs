use std::{cell::RefCell, rc::Rc};
use web_sys::Element;
use yew::prelude::*;

use super::dom::FrameLoop;
use crate::{
    motion::{Spring, TOGGLE_SPRING},
    theme::Theme,
};

const KNOB_TRAVEL: f64 = 20.0;

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

fn knob_position(theme: Theme) -> f64 {
    if theme.is_dark() {
        KNOB_TRAVEL
    } else {
        0.0
    }
}

#[function_component(DarkModeToggle)]
pub fn dark_mode_toggle() -> Html {
    let context = use_context::<ThemeContext>();
    let theme = context.as_ref().map(|context| context.theme).unwrap_or_default();
    let knob = use_node_ref();
    let spring = use_mut_ref(|| Spring::new(TOGGLE_SPRING, knob_position(theme)));
    let frame_loop: Rc<RefCell<Option<FrameLoop>>> = use_mut_ref(|| None);

    {
        let knob = knob.clone();
        let spring = spring.clone();
        let frame_loop = frame_loop.clone();
        use_effect_with((), move |_| {
            let driver = FrameLoop::new(move |dt_seconds| {
                let mut spring = spring.borrow_mut();
                let x = spring.step(dt_seconds);
                if let Some(element) = knob.cast::<Element>() {
                    let _ = element.set_attribute("style", &format!("transform: translateX({x:.2}px);"));
                }
                !spring.is_settled()
            });
            driver.wake();
            *frame_loop.borrow_mut() = Some(driver);

            move || {
                if let Some(driver) = frame_loop.borrow_mut().take() {
                    driver.stop();
                }
            }
        });
    }

    {
        let spring = spring.clone();
        let frame_loop = frame_loop.clone();
        use_effect_with(theme, move |theme| {
            spring.borrow_mut().set_target(knob_position(*theme));
            if let Some(driver) = frame_loop.borrow().as_ref() {
                driver.wake();
            }
            || ()
        });
    }

    let onclick = {
        let toggle = context.map(|context| context.toggle).unwrap_or_default();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    html! {
        <button
            class={classes!("theme-toggle", theme.is_dark().then_some("is-dark"))}
            type="button"
            aria-label={theme.toggle_label()}
            aria-pressed={theme.is_dark().to_string()}
            onclick={onclick}
        >
            <span ref={knob} class="theme-toggle-knob">
                <span class="theme-toggle-icon" aria-hidden="true">{theme.icon()}</span>
            </span>
        </button>
    }
}
