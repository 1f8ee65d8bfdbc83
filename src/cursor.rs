use std::{cell::RefCell, rc::Rc};

use crate::{
    geometry::Point,
    motion::{Spring, Spring2, CURSOR_SPRING, TRAIL_SPRING},
};

pub const MOBILE_BREAKPOINT: f64 = 768.0;
pub const ZONE_SETTLE_DELAY_MS: u32 = 100;
pub const BLEND_MODE: &str = "difference";
pub const PRIMARY_SIZE: f64 = 32.0;
pub const TRAIL_SIZE: f64 = 8.0;
const TRAIL_OFFSET: f64 = TRAIL_SIZE / 2.0;
const TRAIL_OPACITY: f64 = 0.6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CursorVariant {
    #[default]
    Default,
    Hover,
    Text,
    Project,
}

impl CursorVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Hover => "hover",
            Self::Text => "text",
            Self::Project => "project",
        }
    }

    pub fn appearance(self) -> CursorAppearance {
        match self {
            Self::Default => CursorAppearance {
                offset: Point::new(16.0, 16.0),
                scale_x: 1.0,
                scale_y: 1.0,
                background: "rgba(0, 255, 65, 0.1)",
                border: "2px solid rgba(0, 255, 65, 0.5)",
            },
            Self::Hover => CursorAppearance {
                offset: Point::new(24.0, 24.0),
                scale_x: 1.5,
                scale_y: 1.5,
                background: "rgba(0, 255, 65, 0.2)",
                border: "2px solid rgba(0, 255, 65, 0.8)",
            },
            Self::Text => CursorAppearance {
                offset: Point::new(2.0, 16.0),
                scale_x: 0.1,
                scale_y: 1.0,
                background: "rgba(0, 255, 65, 0.8)",
                border: "none",
            },
            Self::Project => CursorAppearance {
                offset: Point::new(32.0, 32.0),
                scale_x: 2.0,
                scale_y: 2.0,
                background: "rgba(0, 255, 65, 0.1)",
                border: "3px solid rgba(0, 255, 65, 1)",
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorAppearance {
    pub offset: Point,
    pub scale_x: f64,
    pub scale_y: f64,
    pub background: &'static str,
    pub border: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoneTag {
    Pointer,
    Text,
    Project,
}

impl ZoneTag {
    pub const ALL: [Self; 3] = [Self::Pointer, Self::Text, Self::Project];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pointer => "pointer",
            Self::Text => "text",
            Self::Project => "project",
        }
    }

    pub fn from_attribute(value: &str) -> Option<Self> {
        match value.trim() {
            "pointer" => Some(Self::Pointer),
            "text" => Some(Self::Text),
            "project" => Some(Self::Project),
            _ => None,
        }
    }

    pub fn selector(self) -> &'static str {
        match self {
            Self::Pointer => r#"a, button, [data-cursor="pointer"]"#,
            Self::Text => r#"h1, h2, h3, p, span, [data-cursor="text"]"#,
            Self::Project => r#"[data-cursor="project"]"#,
        }
    }

    pub fn variant(self) -> CursorVariant {
        match self {
            Self::Pointer => CursorVariant::Hover,
            Self::Text => CursorVariant::Text,
            Self::Project => CursorVariant::Project,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
    pub visible: bool,
    pub variant: CursorVariant,
}

impl PointerState {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

pub fn is_pointer_viewport(viewport_width: f64) -> bool {
    viewport_width >= MOBILE_BREAKPOINT
}

/// Identity of one registered zone element, unique for the registry's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ZoneId(pub u32);

#[derive(Clone, Debug)]
pub struct PointerTracker {
    state: PointerState,
    enabled: bool,
    // Innermost zone last; the variant follows the top of the stack.
    active_zones: Vec<(ZoneTag, ZoneId)>,
}

impl PointerTracker {
    pub fn new(viewport_width: f64) -> Self {
        Self {
            state: PointerState::default(),
            enabled: is_pointer_viewport(viewport_width),
            active_zones: Vec::new(),
        }
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns true when the tracker switched on or off.
    pub fn set_viewport_width(&mut self, viewport_width: f64) -> bool {
        let enabled = is_pointer_viewport(viewport_width);
        if enabled == self.enabled {
            return false;
        }

        self.enabled = enabled;
        if !enabled {
            self.state = PointerState::default();
            self.active_zones.clear();
        }
        log::debug!("pointer tracker enabled={enabled} (viewport width {viewport_width})");
        true
    }

    pub fn pointer_moved(&mut self, position: Point) {
        if !self.enabled {
            return;
        }
        self.state.x = position.x;
        self.state.y = position.y;
        self.state.visible = true;
    }

    pub fn pointer_left_document(&mut self) {
        self.state.visible = false;
        self.active_zones.clear();
        self.state.variant = CursorVariant::Default;
    }

    pub fn pointer_entered_document(&mut self) {
        if self.enabled {
            self.state.visible = true;
        }
    }

    pub fn zone_entered(&mut self, tag: ZoneTag, zone: ZoneId) {
        if !self.enabled || self.active_zones.contains(&(tag, zone)) {
            return;
        }
        self.active_zones.push((tag, zone));
        self.refresh_variant();
    }

    pub fn zone_left(&mut self, tag: ZoneTag, zone: ZoneId) {
        self.active_zones.retain(|active| *active != (tag, zone));
        self.refresh_variant();
    }

    /// Drops zones whose element went away without a leave event (a
    /// re-rendered node never fires `mouseleave`). Returns true if any
    /// were dropped.
    pub fn prune_zones(&mut self, is_live: impl Fn(ZoneId) -> bool) -> bool {
        let before = self.active_zones.len();
        self.active_zones.retain(|(_, zone)| is_live(*zone));
        if self.active_zones.len() == before {
            return false;
        }
        log::debug!("dropped {} detached cursor zones", before - self.active_zones.len());
        self.refresh_variant();
        true
    }

    pub fn reset_zones(&mut self) {
        self.active_zones.clear();
        self.refresh_variant();
    }

    fn refresh_variant(&mut self) {
        let variant = self
            .active_zones
            .last()
            .map(|(tag, _)| tag.variant())
            .unwrap_or_default();

        if variant != self.state.variant {
            log::debug!("cursor variant {} -> {}", self.state.variant.as_str(), variant.as_str());
            self.state.variant = variant;
        }
    }
}

pub type SharedTracker = Rc<RefCell<PointerTracker>>;
pub type ZoneCallback = Rc<dyn Fn(ZoneTag, ZoneId)>;

pub trait ZoneRegistry {
    type Element;

    fn register_zone(&mut self, tag: ZoneTag, element: Self::Element) -> ZoneId;
    fn on_enter(&mut self, tag: ZoneTag, callback: ZoneCallback);
    fn on_leave(&mut self, tag: ZoneTag, callback: ZoneCallback);
    /// False once the zone's element has left the page or was cleared.
    fn is_attached(&self, zone: ZoneId) -> bool;
    fn clear(&mut self);
}

pub fn bind_zone_variants<R: ZoneRegistry>(
    registry: &mut R,
    tracker: &SharedTracker,
    notify: Rc<dyn Fn()>,
) {
    for tag in ZoneTag::ALL {
        let enter_tracker = Rc::clone(tracker);
        let enter_notify = Rc::clone(&notify);
        registry.on_enter(
            tag,
            Rc::new(move |tag, zone| {
                enter_tracker.borrow_mut().zone_entered(tag, zone);
                enter_notify();
            }),
        );

        let leave_tracker = Rc::clone(tracker);
        let leave_notify = Rc::clone(&notify);
        registry.on_leave(
            tag,
            Rc::new(move |tag, zone| {
                leave_tracker.borrow_mut().zone_left(tag, zone);
                leave_notify();
            }),
        );
    }
}

pub fn prune_detached_zones<R: ZoneRegistry>(registry: &R, tracker: &SharedTracker) -> bool {
    tracker
        .borrow_mut()
        .prune_zones(|zone| registry.is_attached(zone))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorFrame {
    pub primary: Point,
    pub scale_x: f64,
    pub scale_y: f64,
    pub primary_opacity: f64,
    pub trail: Point,
    pub trail_opacity: f64,
    pub appearance: CursorAppearance,
}

#[derive(Clone, Debug)]
pub struct CursorIndicator {
    primary: Spring2,
    scale_x: Spring,
    scale_y: Spring,
    trail: Spring2,
    variant: CursorVariant,
    visible: bool,
    primed: bool,
}

impl Default for CursorIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorIndicator {
    pub fn new() -> Self {
        let appearance = CursorVariant::Default.appearance();
        Self {
            primary: Spring2::new(CURSOR_SPRING, Point::ORIGIN),
            scale_x: Spring::new(CURSOR_SPRING, appearance.scale_x),
            scale_y: Spring::new(CURSOR_SPRING, appearance.scale_y),
            trail: Spring2::new(TRAIL_SPRING, Point::ORIGIN),
            variant: CursorVariant::Default,
            visible: false,
            primed: false,
        }
    }

    pub fn retarget(&mut self, state: &PointerState) {
        let appearance = state.variant.appearance();
        let primary_target = Point::new(state.x - appearance.offset.x, state.y - appearance.offset.y);
        let trail_target = Point::new(state.x - TRAIL_OFFSET, state.y - TRAIL_OFFSET);

        // First sighting snaps into place instead of flying in from the corner.
        if state.visible && !self.primed {
            self.primary.jump_to(primary_target);
            self.trail.jump_to(trail_target);
            self.primed = true;
        } else {
            self.primary.set_target(primary_target);
            self.trail.set_target(trail_target);
        }

        self.scale_x.set_target(appearance.scale_x);
        self.scale_y.set_target(appearance.scale_y);
        self.variant = state.variant;
        self.visible = state.visible;
    }

    pub fn frame(&mut self, dt_seconds: f64) -> IndicatorFrame {
        let primary = self.primary.step(dt_seconds);
        let scale_x = self.scale_x.step(dt_seconds);
        let scale_y = self.scale_y.step(dt_seconds);
        let trail = self.trail.step(dt_seconds);

        IndicatorFrame {
            primary,
            scale_x,
            scale_y,
            primary_opacity: if self.visible { 1.0 } else { 0.0 },
            trail,
            trail_opacity: if self.visible { TRAIL_OPACITY } else { 0.0 },
            appearance: self.variant.appearance(),
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.primary.is_settled()
            && self.trail.is_settled()
            && self.scale_x.is_settled()
            && self.scale_y.is_settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        geometry::Rect,
        magnetic::{Displacement, MagneticField},
    };
    use std::{cell::Cell, collections::HashMap};

    /// Hit-tests rectangles and fires enter/leave like DOM `mouseenter`/`mouseleave`.
    #[derive(Default)]
    struct RectRegistry {
        zones: Vec<RectZone>,
        enter: HashMap<ZoneTag, Vec<ZoneCallback>>,
        leave: HashMap<ZoneTag, Vec<ZoneCallback>>,
        next_id: u32,
    }

    struct RectZone {
        id: ZoneId,
        tag: ZoneTag,
        rect: Rect,
        inside: bool,
        attached: bool,
    }

    impl RectRegistry {
        fn move_to(&mut self, point: Point) {
            let mut left = Vec::new();
            let mut entered = Vec::new();

            for zone in self.zones.iter_mut().filter(|zone| zone.attached) {
                let now_inside = zone.rect.contains(point);
                if zone.inside && !now_inside {
                    left.push((zone.tag, zone.id));
                } else if !zone.inside && now_inside {
                    entered.push((zone.tag, zone.id));
                }
                zone.inside = now_inside;
            }

            for (tag, id) in left {
                for callback in self.leave.get(&tag).into_iter().flatten() {
                    callback(tag, id);
                }
            }
            for (tag, id) in entered {
                for callback in self.enter.get(&tag).into_iter().flatten() {
                    callback(tag, id);
                }
            }
        }

        /// Removes the element from the page without any leave event.
        fn detach(&mut self, id: ZoneId) {
            if let Some(zone) = self.zones.iter_mut().find(|zone| zone.id == id) {
                zone.attached = false;
            }
        }

        fn listener_count(&self) -> usize {
            self.enter.values().map(Vec::len).sum::<usize>()
                + self.leave.values().map(Vec::len).sum::<usize>()
        }
    }

    impl ZoneRegistry for RectRegistry {
        type Element = Rect;

        fn register_zone(&mut self, tag: ZoneTag, element: Rect) -> ZoneId {
            let id = ZoneId(self.next_id);
            self.next_id += 1;
            self.zones.push(RectZone {
                id,
                tag,
                rect: element,
                inside: false,
                attached: true,
            });
            id
        }

        fn on_enter(&mut self, tag: ZoneTag, callback: ZoneCallback) {
            self.enter.entry(tag).or_default().push(callback);
        }

        fn on_leave(&mut self, tag: ZoneTag, callback: ZoneCallback) {
            self.leave.entry(tag).or_default().push(callback);
        }

        fn is_attached(&self, zone: ZoneId) -> bool {
            self.zones.iter().any(|entry| entry.id == zone && entry.attached)
        }

        fn clear(&mut self) {
            self.zones.clear();
            self.enter.clear();
            self.leave.clear();
        }
    }

    fn desktop_tracker() -> SharedTracker {
        Rc::new(RefCell::new(PointerTracker::new(1280.0)))
    }

    fn move_pointer(registry: &mut RectRegistry, tracker: &SharedTracker, point: Point) {
        tracker.borrow_mut().pointer_moved(point);
        registry.move_to(point);
    }

    #[test]
    fn variant_matches_zone_tag_inside_and_default_outside() {
        let tracker = desktop_tracker();
        let mut registry = RectRegistry::default();
        registry.register_zone(ZoneTag::Pointer, Rect::new(0.0, 0.0, 100.0, 40.0));
        registry.register_zone(ZoneTag::Text, Rect::new(0.0, 100.0, 300.0, 60.0));
        registry.register_zone(ZoneTag::Project, Rect::new(400.0, 250.0, 200.0, 150.0));
        bind_zone_variants(&mut registry, &tracker, Rc::new(|| {}));

        let samples = [
            (Point::new(50.0, 20.0), CursorVariant::Hover),
            (Point::new(150.0, 120.0), CursorVariant::Text),
            (Point::new(450.0, 390.0), CursorVariant::Project),
            (Point::new(700.0, 700.0), CursorVariant::Default),
            (Point::new(99.0, 39.0), CursorVariant::Hover),
            (Point::new(350.0, 200.0), CursorVariant::Default),
        ];

        for (point, expected) in samples {
            move_pointer(&mut registry, &tracker, point);
            let state = tracker.borrow().state();
            assert_eq!(state.variant, expected, "at {point:?}");
            assert_eq!(state.position(), point);
            assert!(state.visible);
        }
    }

    #[test]
    fn nested_zone_falls_back_to_enclosing_zone() {
        let tracker = desktop_tracker();
        let mut registry = RectRegistry::default();
        registry.register_zone(ZoneTag::Project, Rect::new(0.0, 0.0, 400.0, 300.0));
        registry.register_zone(ZoneTag::Pointer, Rect::new(20.0, 240.0, 80.0, 30.0));
        bind_zone_variants(&mut registry, &tracker, Rc::new(|| {}));

        move_pointer(&mut registry, &tracker, Point::new(200.0, 100.0));
        assert_eq!(tracker.borrow().state().variant, CursorVariant::Project);

        move_pointer(&mut registry, &tracker, Point::new(50.0, 250.0));
        assert_eq!(tracker.borrow().state().variant, CursorVariant::Hover);

        move_pointer(&mut registry, &tracker, Point::new(200.0, 250.0));
        assert_eq!(tracker.borrow().state().variant, CursorVariant::Project);

        move_pointer(&mut registry, &tracker, Point::new(500.0, 500.0));
        assert_eq!(tracker.borrow().state().variant, CursorVariant::Default);
    }

    #[test]
    fn visibility_follows_document_enter_and_leave() {
        let mut tracker = PointerTracker::new(1280.0);
        assert!(!tracker.state().visible);

        tracker.pointer_moved(Point::new(10.0, 10.0));
        assert!(tracker.state().visible);

        tracker.zone_entered(ZoneTag::Text, ZoneId(0));
        tracker.pointer_left_document();
        assert!(!tracker.state().visible);
        assert_eq!(tracker.state().variant, CursorVariant::Default);

        tracker.pointer_entered_document();
        assert!(tracker.state().visible);
        assert_eq!(tracker.state().position(), Point::new(10.0, 10.0));
    }

    #[test]
    fn narrow_viewport_disables_tracking() {
        let mut tracker = PointerTracker::new(767.0);
        assert!(!tracker.is_enabled());

        tracker.pointer_moved(Point::new(10.0, 10.0));
        tracker.zone_entered(ZoneTag::Project, ZoneId(0));
        assert_eq!(tracker.state(), PointerState::default());

        assert!(tracker.set_viewport_width(1024.0));
        assert!(!tracker.set_viewport_width(1100.0));
        tracker.pointer_moved(Point::new(10.0, 10.0));
        tracker.zone_entered(ZoneTag::Project, ZoneId(0));
        assert_eq!(tracker.state().variant, CursorVariant::Project);

        assert!(tracker.set_viewport_width(600.0));
        assert_eq!(tracker.state(), PointerState::default());
    }

    #[test]
    fn breakpoint_is_inclusive_of_desktop_width() {
        assert!(is_pointer_viewport(768.0));
        assert!(!is_pointer_viewport(767.9));
    }

    #[test]
    fn stale_leave_without_enter_is_ignored() {
        let mut tracker = PointerTracker::new(1280.0);
        tracker.zone_entered(ZoneTag::Project, ZoneId(0));
        tracker.zone_left(ZoneTag::Text, ZoneId(1));
        tracker.zone_left(ZoneTag::Project, ZoneId(2));
        assert_eq!(tracker.state().variant, CursorVariant::Project);

        tracker.reset_zones();
        assert_eq!(tracker.state().variant, CursorVariant::Default);
    }

    #[test]
    fn zone_removed_while_hovered_does_not_pin_variant() {
        let tracker = desktop_tracker();
        let mut registry = RectRegistry::default();
        let tagline = registry.register_zone(ZoneTag::Text, Rect::new(0.0, 100.0, 300.0, 40.0));
        registry.register_zone(ZoneTag::Text, Rect::new(0.0, 400.0, 300.0, 40.0));
        bind_zone_variants(&mut registry, &tracker, Rc::new(|| {}));

        move_pointer(&mut registry, &tracker, Point::new(50.0, 120.0));
        assert_eq!(tracker.borrow().state().variant, CursorVariant::Text);

        // Re-rendered under the pointer: the old node never reports a leave.
        registry.detach(tagline);
        move_pointer(&mut registry, &tracker, Point::new(900.0, 900.0));
        assert!(prune_detached_zones(&registry, &tracker));
        assert_eq!(tracker.borrow().state().variant, CursorVariant::Default);

        move_pointer(&mut registry, &tracker, Point::new(50.0, 420.0));
        assert_eq!(tracker.borrow().state().variant, CursorVariant::Text);
        move_pointer(&mut registry, &tracker, Point::new(900.0, 900.0));
        assert_eq!(tracker.borrow().state().variant, CursorVariant::Default);
        assert!(!prune_detached_zones(&registry, &tracker));
    }

    #[test]
    fn same_tag_zones_are_tracked_individually() {
        let mut tracker = PointerTracker::new(1280.0);
        tracker.zone_entered(ZoneTag::Text, ZoneId(1));
        tracker.zone_entered(ZoneTag::Pointer, ZoneId(2));
        tracker.zone_entered(ZoneTag::Text, ZoneId(3));
        tracker.zone_entered(ZoneTag::Text, ZoneId(3));
        assert_eq!(tracker.state().variant, CursorVariant::Text);

        tracker.zone_left(ZoneTag::Text, ZoneId(3));
        assert_eq!(tracker.state().variant, CursorVariant::Hover);

        assert!(tracker.prune_zones(|zone| zone != ZoneId(2)));
        assert_eq!(tracker.state().variant, CursorVariant::Text);
    }

    #[test]
    fn notify_runs_for_every_zone_transition_and_clear_detaches() {
        let tracker = desktop_tracker();
        let mut registry = RectRegistry::default();
        registry.register_zone(ZoneTag::Pointer, Rect::new(0.0, 0.0, 10.0, 10.0));
        let notifications = Rc::new(Cell::new(0));
        let counter = Rc::clone(&notifications);
        bind_zone_variants(&mut registry, &tracker, Rc::new(move || counter.set(counter.get() + 1)));

        assert_eq!(registry.listener_count(), ZoneTag::ALL.len() * 2);

        registry.move_to(Point::new(5.0, 5.0));
        registry.move_to(Point::new(50.0, 50.0));
        assert_eq!(notifications.get(), 2);

        registry.clear();
        assert_eq!(registry.listener_count(), 0);
        registry.move_to(Point::new(5.0, 5.0));
        assert_eq!(notifications.get(), 2);
    }

    #[test]
    fn tag_parsing_and_selectors() {
        assert_eq!(ZoneTag::from_attribute("project"), Some(ZoneTag::Project));
        assert_eq!(ZoneTag::from_attribute(" text "), Some(ZoneTag::Text));
        assert_eq!(ZoneTag::from_attribute("magnet"), None);
        assert!(ZoneTag::Pointer.selector().contains("button"));
        assert_eq!(ZoneTag::Pointer.variant(), CursorVariant::Hover);
    }

    #[test]
    fn project_zone_scenario_reports_variant_and_raw_displacement() {
        let tracker = desktop_tracker();
        let mut registry = RectRegistry::default();
        let card = Rect::new(400.0, 250.0, 200.0, 150.0);
        registry.register_zone(ZoneTag::Project, card);
        bind_zone_variants(&mut registry, &tracker, Rc::new(|| {}));

        let pointer = Point::new(500.0, 300.0);
        move_pointer(&mut registry, &tracker, pointer);

        assert_eq!(tracker.borrow().state().variant, CursorVariant::Project);
        let displacement = MagneticField::default().displacement(pointer, Some(card));
        assert_eq!(displacement.dx, 0.0);
        assert!((displacement.dy - -7.5).abs() < 1e-9);
        assert_ne!(displacement, Displacement::ZERO);
    }

    #[test]
    fn indicator_snaps_on_first_sighting_then_springs() {
        let mut indicator = CursorIndicator::new();
        let mut state = PointerState {
            x: 200.0,
            y: 100.0,
            visible: true,
            variant: CursorVariant::Default,
        };

        indicator.retarget(&state);
        let frame = indicator.frame(1.0 / 60.0);
        assert_eq!(frame.primary, Point::new(184.0, 84.0));
        assert_eq!(frame.trail, Point::new(196.0, 96.0));
        assert_eq!(frame.primary_opacity, 1.0);
        assert_eq!(frame.trail_opacity, 0.6);

        state.x = 400.0;
        state.variant = CursorVariant::Project;
        indicator.retarget(&state);
        let frame = indicator.frame(1.0 / 60.0);
        assert!(frame.primary.x > 184.0 && frame.primary.x < 368.0);
        assert!(frame.trail.x > 196.0 && frame.trail.x < 396.0);
        assert_eq!(frame.appearance.border, "3px solid rgba(0, 255, 65, 1)");

        for _ in 0..240 {
            indicator.frame(1.0 / 60.0);
        }
        assert!(indicator.is_at_rest());
        let frame = indicator.frame(1.0 / 60.0);
        assert_eq!(frame.primary, Point::new(368.0, 68.0));
        assert_eq!(frame.scale_x, 2.0);
    }

    #[test]
    fn hidden_pointer_fades_indicator() {
        let mut indicator = CursorIndicator::new();
        indicator.retarget(&PointerState::default());

        let frame = indicator.frame(1.0 / 60.0);
        assert_eq!(frame.primary_opacity, 0.0);
        assert_eq!(frame.trail_opacity, 0.0);
    }
}
