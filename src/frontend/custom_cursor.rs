use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::JsCast;
use web_sys::{window, Element, Event, MouseEvent};
use yew::prelude::*;

use super::dom::{self, ContentObserver, DomZoneRegistry, FrameLoop};
use crate::{
    cursor::{
        bind_zone_variants, prune_detached_zones, CursorIndicator, IndicatorFrame,
        PointerTracker, SharedTracker, ZoneRegistry, BLEND_MODE, ZONE_SETTLE_DELAY_MS,
    },
    geometry::Point,
};

const HIDE_NATIVE_CURSOR: &str = "* { cursor: none !important; }";

fn primary_style(frame: &IndicatorFrame) -> String {
    let appearance = frame.appearance;
    format!(
        "transform: translate3d({:.2}px, {:.2}px, 0) scale({:.3}, {:.3}); opacity: {}; \
         background-color: {}; border: {}; mix-blend-mode: {BLEND_MODE};",
        frame.primary.x,
        frame.primary.y,
        frame.scale_x,
        frame.scale_y,
        frame.primary_opacity,
        appearance.background,
        appearance.border,
    )
}

fn trail_style(frame: &IndicatorFrame) -> String {
    format!(
        "transform: translate3d({:.2}px, {:.2}px, 0); opacity: {};",
        frame.trail.x, frame.trail.y, frame.trail_opacity
    )
}

fn write_style(node: &NodeRef, style: &str) {
    if let Some(element) = node.cast::<Element>() {
        let _ = element.set_attribute("style", style);
    }
}

// Zones already under the pointer get no fresh `mouseenter`, so they are
// re-entered by hand.
fn rescan_zones(registry: &Rc<RefCell<DomZoneRegistry>>, tracker: &SharedTracker, notify: &Rc<dyn Fn()>) {
    let Some(document) = dom::document() else {
        return;
    };

    let mut registry = registry.borrow_mut();
    registry.clear();
    bind_zone_variants(&mut *registry, tracker, Rc::clone(notify));
    registry.scan(&document);

    let mut tracker = tracker.borrow_mut();
    tracker.reset_zones();
    for (tag, zone) in registry.hovered() {
        tracker.zone_entered(tag, zone);
    }
    drop(tracker);
    notify();
}

type PendingScan = Rc<RefCell<Option<Timeout>>>;

fn schedule_rescan(
    pending: &PendingScan,
    registry: &Rc<RefCell<DomZoneRegistry>>,
    tracker: &SharedTracker,
    notify: &Rc<dyn Fn()>,
) {
    let registry = Rc::clone(registry);
    let tracker = Rc::clone(tracker);
    let notify = Rc::clone(notify);
    let timeout = Timeout::new(ZONE_SETTLE_DELAY_MS, move || {
        rescan_zones(&registry, &tracker, &notify)
    });
    *pending.borrow_mut() = Some(timeout);
}

#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let tracker = use_mut_ref(|| PointerTracker::new(dom::viewport_width()));
    let enabled = use_state(|| tracker.borrow().is_enabled());
    let primary = use_node_ref();
    let trail = use_node_ref();

    {
        let tracker = tracker.clone();
        let enabled = enabled.clone();
        let primary = primary.clone();
        let trail = trail.clone();

        use_effect_with((), move |_| {
            let indicator = Rc::new(RefCell::new(CursorIndicator::new()));
            let frame_loop = {
                let tracker = tracker.clone();
                let indicator = indicator.clone();
                FrameLoop::new(move |dt_seconds| {
                    let state = tracker.borrow().state();
                    let mut indicator = indicator.borrow_mut();
                    indicator.retarget(&state);
                    let frame = indicator.frame(dt_seconds);
                    write_style(&primary, &primary_style(&frame));
                    write_style(&trail, &trail_style(&frame));
                    !indicator.is_at_rest()
                })
            };

            let notify: Rc<dyn Fn()> = {
                let frame_loop = frame_loop.clone();
                Rc::new(move || frame_loop.wake())
            };
            let registry = Rc::new(RefCell::new(DomZoneRegistry::default()));

            let pending: PendingScan = Rc::new(RefCell::new(None));

            let mut listeners = Vec::new();
            if let Some(win) = window() {
                let tracker = tracker.clone();
                let registry = registry.clone();
                let notify = notify.clone();
                listeners.push(EventListener::new(&win, "mousemove", move |event: &Event| {
                    let Some(event) = event.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    tracker.borrow_mut().pointer_moved(Point::new(
                        f64::from(event.client_x()),
                        f64::from(event.client_y()),
                    ));
                    if let Ok(registry) = registry.try_borrow() {
                        prune_detached_zones(&*registry, &tracker);
                    }
                    notify();
                }));
            }

            if let Some(document) = dom::document() {
                let leave_tracker = tracker.clone();
                let leave_notify = notify.clone();
                listeners.push(EventListener::new(&document, "mouseleave", move |_| {
                    leave_tracker.borrow_mut().pointer_left_document();
                    leave_notify();
                }));

                let enter_tracker = tracker.clone();
                let enter_notify = notify.clone();
                listeners.push(EventListener::new(&document, "mouseenter", move |_| {
                    enter_tracker.borrow_mut().pointer_entered_document();
                    enter_notify();
                }));
            }

            if let Some(win) = window() {
                let tracker = tracker.clone();
                let registry = registry.clone();
                let notify = notify.clone();
                let pending = pending.clone();
                listeners.push(EventListener::new(&win, "resize", move |_| {
                    let switched = tracker
                        .borrow_mut()
                        .set_viewport_width(dom::viewport_width());
                    if switched {
                        enabled.set(tracker.borrow().is_enabled());
                    }
                    schedule_rescan(&pending, &registry, &tracker, &notify);
                    notify();
                }));
            }

            // Re-rendered sections (form errors, late content) need fresh zones.
            let content_observer = dom::document()
                .and_then(|document| document.body())
                .and_then(|body| {
                    let pending = pending.clone();
                    let registry = registry.clone();
                    let tracker = tracker.clone();
                    let notify = notify.clone();
                    ContentObserver::observe(&body, move || {
                        schedule_rescan(&pending, &registry, &tracker, &notify)
                    })
                    .map_err(|error| log::warn!("content changes will not rescan cursor zones: {error:?}"))
                    .ok()
                });

            schedule_rescan(&pending, &registry, &tracker, &notify);

            move || {
                drop(content_observer);
                pending.borrow_mut().take();
                drop(listeners);
                registry.borrow_mut().clear();
                frame_loop.stop();
            }
        });
    }

    if !*enabled {
        return html! {};
    }

    html! {
        <>
            <style>{HIDE_NATIVE_CURSOR}</style>
            <div ref={primary} class="cursor-ring" aria-hidden="true" />
            <div ref={trail} class="cursor-trail" aria-hidden="true" />
        </>
    }
}
