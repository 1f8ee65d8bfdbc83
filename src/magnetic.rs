use crate::{
    geometry::{Point, Rect},
    motion::{Spring2, MAGNETIC_SPRING},
};

pub const DEFAULT_STRENGTH: f64 = 0.3;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Displacement {
    pub dx: f64,
    pub dy: f64,
}

impl Displacement {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    fn as_point(self) -> Point {
        Point::new(self.dx, self.dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagneticField {
    strength: f64,
}

impl Default for MagneticField {
    fn default() -> Self {
        Self::new(DEFAULT_STRENGTH)
    }
}

impl MagneticField {
    pub fn new(strength: f64) -> Self {
        Self { strength }
    }

    pub fn strength(&self) -> f64 {
        self.strength
    }

    /// Raw offset toward the pointer, proportional to its distance from the
    /// element's center. A missing measurement (element already unmounted)
    /// yields no displacement.
    pub fn displacement(&self, pointer: Point, bounds: Option<Rect>) -> Displacement {
        let Some(bounds) = bounds else {
            return Displacement::ZERO;
        };

        let center = bounds.center();
        Displacement {
            dx: (pointer.x - center.x) * self.strength,
            dy: (pointer.y - center.y) * self.strength,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MagneticElement {
    field: MagneticField,
    target: Displacement,
    spring: Spring2,
}

impl MagneticElement {
    pub fn new(field: MagneticField) -> Self {
        Self {
            field,
            target: Displacement::ZERO,
            spring: Spring2::new(MAGNETIC_SPRING, Point::ORIGIN),
        }
    }

    pub fn target(&self) -> Displacement {
        self.target
    }

    pub fn field(&self) -> MagneticField {
        self.field
    }

    /// Takes effect from the next pointer move; the current offset eases on.
    pub fn set_field(&mut self, field: MagneticField) {
        self.field = field;
    }

    pub fn pointer_moved(&mut self, pointer: Point, bounds: Option<Rect>) -> Displacement {
        self.target = self.field.displacement(pointer, bounds);
        self.spring.set_target(self.target.as_point());
        self.target
    }

    pub fn pointer_left(&mut self) {
        self.target = Displacement::ZERO;
        self.spring.set_target(Point::ORIGIN);
    }

    pub fn frame(&mut self, dt_seconds: f64) -> Displacement {
        let value = self.spring.step(dt_seconds);
        Displacement {
            dx: value.x,
            dy: value.y,
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.spring.is_settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_strength_applies_to_next_pointer_move() {
        let bounds = Some(Rect::new(0.0, 0.0, 100.0, 100.0));
        let pointer = Point::new(100.0, 50.0);
        let mut element = MagneticElement::new(MagneticField::new(0.3));
        assert_eq!(element.pointer_moved(pointer, bounds), Displacement { dx: 15.0, dy: 0.0 });

        element.set_field(MagneticField::new(0.5));
        assert_eq!(element.target(), Displacement { dx: 15.0, dy: 0.0 });
        assert_eq!(element.pointer_moved(pointer, bounds), Displacement { dx: 25.0, dy: 0.0 });
        assert_eq!(element.field().strength(), 0.5);
    }

    #[test]
    fn displacement_is_proportional_to_offset_from_center() {
        let field = MagneticField::default();
        let bounds = Rect::new(400.0, 250.0, 200.0, 150.0);

        let displacement = field.displacement(Point::new(500.0, 300.0), Some(bounds));

        assert_eq!(displacement.dx, 0.0);
        assert!((displacement.dy - -7.5).abs() < 1e-9);
    }

    #[test]
    fn displacement_is_unbounded_far_from_the_element() {
        let field = MagneticField::new(0.5);
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);

        for (x, y) in [(50.0, 50.0), (1050.0, 50.0), (-950.0, 2050.0), (51.0, 49.0)] {
            let displacement = field.displacement(Point::new(x, y), Some(bounds));
            assert_eq!(displacement.dx, (x - 50.0) * 0.5);
            assert_eq!(displacement.dy, (y - 50.0) * 0.5);
        }
    }

    #[test]
    fn missing_bounds_produce_no_displacement() {
        let field = MagneticField::default();
        assert_eq!(
            field.displacement(Point::new(900.0, 900.0), None),
            Displacement::ZERO
        );
    }

    #[test]
    fn element_springs_toward_target_then_back_on_leave() {
        let mut element = MagneticElement::new(MagneticField::default());
        let bounds = Rect::new(0.0, 0.0, 100.0, 40.0);

        let target = element.pointer_moved(Point::new(100.0, 40.0), Some(bounds));
        assert_eq!(target, Displacement { dx: 15.0, dy: 6.0 });

        let first = element.frame(1.0 / 60.0);
        assert!(first.dx > 0.0 && first.dx < 15.0);

        for _ in 0..180 {
            element.frame(1.0 / 60.0);
        }
        assert!(element.is_at_rest());
        assert_eq!(element.frame(1.0 / 60.0), Displacement { dx: 15.0, dy: 6.0 });

        element.pointer_left();
        assert_eq!(element.target(), Displacement::ZERO);
        for _ in 0..180 {
            element.frame(1.0 / 60.0);
        }
        assert_eq!(element.frame(1.0 / 60.0), Displacement::ZERO);
    }
}
