use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use js_sys::{Array, Function, Reflect};
use std::{
    cell::{Cell, RefCell},
    cmp::Ordering,
    collections::HashMap,
    rc::Rc,
};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MutationObserver, MutationObserverInit, Storage,
};

use crate::{
    cursor::{ZoneCallback, ZoneId, ZoneRegistry, ZoneTag},
    geometry::Rect,
    theme::{StorageError, Theme, ThemeMarker, ThemeStorage},
};

const FALLBACK_VIEWPORT_WIDTH: f64 = 1280.0;
const FALLBACK_FRAME_SECONDS: f64 = 1.0 / 60.0;

pub fn document() -> Option<Document> {
    window()?.document()
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

fn media_matches(query: &str) -> Option<bool> {
    window()?
        .match_media(query)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
}

pub fn system_prefers_dark() -> Option<bool> {
    media_matches("(prefers-color-scheme: dark)")
}

pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)").unwrap_or(false)
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT_WIDTH)
}

pub fn element_bounds(element: &Element) -> Option<Rect> {
    // Detached elements report an all-zero box.
    if !element.is_connected() {
        return None;
    }
    let rect = element.get_bounding_client_rect();
    Some(Rect::new(rect.left(), rect.top(), rect.width(), rect.height()))
}

fn describe_js_error(error: &JsValue) -> String {
    if let Some(message) = error.as_string() {
        return message;
    }
    error
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .unwrap_or_else(|| "unknown error".to_string())
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl ThemeStorage for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = local_storage().ok_or(StorageError::Unavailable)?;
        storage.get_item(key).map_err(|_| StorageError::Unavailable)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|error| StorageError::WriteRejected(describe_js_error(&error)))
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentThemeMarker;

impl ThemeMarker for DocumentThemeMarker {
    fn apply(&mut self, theme: Theme, animate: bool) {
        if animate {
            apply_theme_with_transition(theme);
        } else {
            apply_theme(theme);
        }
    }
}

fn apply_theme(theme: Theme) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute("data-theme", theme.as_str());
        let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
    }
}

fn apply_theme_with_transition(theme: Theme) {
    let animated = !prefers_reduced_motion()
        && document().is_some_and(|document| start_view_transition(&document, move || apply_theme(theme)));
    if !animated {
        apply_theme(theme);
    }
}

/// Runs `update` inside `document.startViewTransition` where the browser
/// has it. Returns false (without running `update`) otherwise.
fn start_view_transition(document: &Document, update: impl FnOnce() + 'static) -> bool {
    let start = Reflect::get(document, &JsValue::from_str("startViewTransition"))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok());
    let Some(start) = start else {
        return false;
    };

    start
        .call1(document, &Closure::once_into_js(update))
        .map_err(|error| log::debug!("view transition refused: {}", describe_js_error(&error)))
        .is_ok()
}

#[derive(Default)]
pub struct DomZoneRegistry {
    zones: Vec<(ZoneId, ZoneTag, Element)>,
    enter: HashMap<ZoneTag, Vec<ZoneCallback>>,
    leave: HashMap<ZoneTag, Vec<ZoneCallback>>,
    listeners: Vec<EventListener>,
    // Never reset, so ids from before a clear cannot alias new zones.
    next_id: u32,
}

impl DomZoneRegistry {
    pub fn scan(&mut self, document: &Document) {
        for tag in ZoneTag::ALL {
            let Ok(nodes) = document.query_selector_all(tag.selector()) else {
                log::warn!("zone selector for {} failed", tag.as_str());
                continue;
            };

            for index in 0..nodes.length() {
                if let Some(element) = nodes.item(index).and_then(|node| node.dyn_into::<Element>().ok()) {
                    self.register_zone(tag, element);
                }
            }
        }
        log::debug!("registered {} cursor zones", self.zones.len());
    }

    /// Zones currently under the pointer, outermost first.
    pub fn hovered(&self) -> Vec<(ZoneTag, ZoneId)> {
        let mut hovered: Vec<_> = self
            .zones
            .iter()
            .filter(|(_, _, element)| element.matches(":hover").unwrap_or(false))
            .collect();
        // Hovered elements share one ancestor chain.
        hovered.sort_by(|(_, _, a), (_, _, b)| {
            if a == b {
                Ordering::Equal
            } else if a.contains(Some(b.as_ref())) {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        });
        hovered.into_iter().map(|(id, tag, _)| (*tag, *id)).collect()
    }

    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    fn elements_for(&self, tag: ZoneTag) -> Vec<(ZoneId, Element)> {
        self.zones
            .iter()
            .filter(|(_, zone, _)| *zone == tag)
            .map(|(id, _, element)| (*id, element.clone()))
            .collect()
    }

    fn attach(&mut self, element: &Element, event: &'static str, tag: ZoneTag, id: ZoneId, callback: ZoneCallback) {
        self.listeners
            .push(EventListener::new(element, event, move |_| callback(tag, id)));
    }
}

impl ZoneRegistry for DomZoneRegistry {
    type Element = Element;

    fn register_zone(&mut self, tag: ZoneTag, element: Element) -> ZoneId {
        let id = ZoneId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        let enter = self.enter.get(&tag).cloned().unwrap_or_default();
        let leave = self.leave.get(&tag).cloned().unwrap_or_default();
        for callback in enter {
            self.attach(&element, "mouseenter", tag, id, callback);
        }
        for callback in leave {
            self.attach(&element, "mouseleave", tag, id, callback);
        }
        self.zones.push((id, tag, element));
        id
    }

    fn on_enter(&mut self, tag: ZoneTag, callback: ZoneCallback) {
        for (id, element) in self.elements_for(tag) {
            self.attach(&element, "mouseenter", tag, id, Rc::clone(&callback));
        }
        self.enter.entry(tag).or_default().push(callback);
    }

    fn on_leave(&mut self, tag: ZoneTag, callback: ZoneCallback) {
        for (id, element) in self.elements_for(tag) {
            self.attach(&element, "mouseleave", tag, id, Rc::clone(&callback));
        }
        self.leave.entry(tag).or_default().push(callback);
    }

    fn is_attached(&self, zone: ZoneId) -> bool {
        self.zones
            .iter()
            .any(|(id, _, element)| *id == zone && element.is_connected())
    }

    fn clear(&mut self) {
        self.listeners.clear();
        self.zones.clear();
        self.enter.clear();
        self.leave.clear();
    }
}

pub struct ContentObserver {
    observer: MutationObserver,
    _callback: Closure<dyn FnMut(Array, MutationObserver)>,
}

impl ContentObserver {
    pub fn observe(target: &Element, mut on_change: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Array, MutationObserver)>::new(
            move |_records: Array, _observer: MutationObserver| on_change(),
        );

        let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
        let options = MutationObserverInit::new();
        options.set_child_list(true);
        options.set_subtree(true);
        observer.observe_with_options(target, &options)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ContentObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn observe(
        element: &Element,
        threshold: f64,
        mut on_ratio: impl FnMut(f64) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let ratio = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .filter(|entry| entry.is_intersecting())
                    .map(|entry| entry.intersection_ratio())
                    .fold(0.0, f64::max);
                on_ratio(ratio);
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

// Runs while the tick returns true; `stop` breaks the loop/frame cycle.
#[derive(Clone)]
pub struct FrameLoop {
    inner: Rc<FrameLoopInner>,
}

struct FrameLoopInner {
    frame: RefCell<Option<AnimationFrame>>,
    last_timestamp: Cell<Option<f64>>,
    tick: RefCell<Box<dyn FnMut(f64) -> bool>>,
}

impl FrameLoop {
    pub fn new(tick: impl FnMut(f64) -> bool + 'static) -> Self {
        Self {
            inner: Rc::new(FrameLoopInner {
                frame: RefCell::new(None),
                last_timestamp: Cell::new(None),
                tick: RefCell::new(Box::new(tick)),
            }),
        }
    }

    pub fn wake(&self) {
        if self.inner.frame.borrow().is_some() {
            return;
        }
        self.schedule();
    }

    pub fn stop(&self) {
        self.inner.frame.borrow_mut().take();
        self.inner.last_timestamp.set(None);
    }

    fn schedule(&self) {
        let this = self.clone();
        let handle = request_animation_frame(move |timestamp| this.on_frame(timestamp));
        *self.inner.frame.borrow_mut() = Some(handle);
    }

    fn on_frame(&self, timestamp: f64) {
        self.inner.frame.borrow_mut().take();

        let dt_seconds = self
            .inner
            .last_timestamp
            .get()
            .map(|previous| ((timestamp - previous) / 1_000.0).max(0.0))
            .unwrap_or(FALLBACK_FRAME_SECONDS);

        let keep_running = {
            let mut tick = self.inner.tick.borrow_mut();
            (*tick)(dt_seconds)
        };

        if keep_running {
            self.inner.last_timestamp.set(Some(timestamp));
            self.schedule();
        } else {
            self.inner.last_timestamp.set(None);
        }
    }
}
