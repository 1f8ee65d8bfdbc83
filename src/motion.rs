use crate::geometry::Point;

const MAX_SUBSTEP_SECONDS: f64 = 1.0 / 240.0;
const MAX_FRAME_SECONDS: f64 = 0.1;
const REST_DELTA: f64 = 0.01;
const REST_SPEED: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

pub const CURSOR_SPRING: SpringConfig = SpringConfig::new(500.0, 28.0, 0.5);
pub const TRAIL_SPRING: SpringConfig = SpringConfig::new(150.0, 15.0, 0.1);
pub const MAGNETIC_SPRING: SpringConfig = SpringConfig::new(150.0, 15.0, 0.1);
pub const TOGGLE_SPRING: SpringConfig = SpringConfig::new(500.0, 30.0, 1.0);

impl SpringConfig {
    pub const fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Below 1.0 the spring overshoots its target before settling.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            position: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn jump_to(&mut self, value: f64) {
        self.position = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        (self.target - self.position).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }

    pub fn step(&mut self, dt_seconds: f64) -> f64 {
        if self.is_settled() {
            self.position = self.target;
            self.velocity = 0.0;
            return self.position;
        }

        let mut remaining = dt_seconds.clamp(0.0, MAX_FRAME_SECONDS);
        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;

        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP_SECONDS);
            let spring_force = -stiffness * (self.position - self.target);
            let damping_force = -damping * self.velocity;
            self.velocity += (spring_force + damping_force) / mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }

        if self.is_settled() {
            self.position = self.target;
            self.velocity = 0.0;
        }

        self.position
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Spring2 {
    x: Spring,
    y: Spring,
}

impl Spring2 {
    pub fn new(config: SpringConfig, initial: Point) -> Self {
        Self {
            x: Spring::new(config, initial.x),
            y: Spring::new(config, initial.y),
        }
    }

    pub fn value(&self) -> Point {
        Point::new(self.x.value(), self.y.value())
    }

    pub fn target(&self) -> Point {
        Point::new(self.x.target(), self.y.target())
    }

    pub fn set_target(&mut self, target: Point) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn jump_to(&mut self, value: Point) {
        self.x.jump_to(value.x);
        self.y.jump_to(value.y);
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }

    pub fn step(&mut self, dt_seconds: f64) -> Point {
        Point::new(self.x.step(dt_seconds), self.y.step(dt_seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn run(spring: &mut Spring, seconds: f64) -> Vec<f64> {
        let frames = (seconds / FRAME).round() as usize;
        (0..frames).map(|_| spring.step(FRAME)).collect()
    }

    #[test]
    fn cursor_spring_is_underdamped_and_magnetic_is_not() {
        assert!(CURSOR_SPRING.damping_ratio() < 1.0);
        assert!(MAGNETIC_SPRING.damping_ratio() > 1.0);
    }

    #[test]
    fn underdamped_spring_overshoots_then_settles_on_target() {
        let mut spring = Spring::new(CURSOR_SPRING, 0.0);
        spring.set_target(100.0);

        let samples = run(&mut spring, 2.0);
        let peak = samples.iter().cloned().fold(f64::MIN, f64::max);

        assert!(peak > 100.0, "expected overshoot, peak was {peak}");
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 100.0);
    }

    #[test]
    fn overdamped_spring_approaches_without_crossing() {
        let mut spring = Spring::new(MAGNETIC_SPRING, 0.0);
        spring.set_target(-7.5);

        let samples = run(&mut spring, 3.0);

        assert!(samples.iter().all(|value| *value >= -7.5));
        assert_eq!(spring.value(), -7.5);
    }

    #[test]
    fn settled_spring_stays_put() {
        let mut spring = Spring::new(TRAIL_SPRING, 42.0);

        assert!(spring.is_settled());
        assert_eq!(spring.step(FRAME), 42.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn oversized_frame_is_clamped_and_stays_finite() {
        let mut spring = Spring::new(CURSOR_SPRING, 0.0);
        spring.set_target(500.0);

        let value = spring.step(5.0);

        assert!(value.is_finite());
        assert!(!spring.is_settled());
    }

    #[test]
    fn jump_to_clears_momentum() {
        let mut spring = Spring::new(CURSOR_SPRING, 0.0);
        spring.set_target(50.0);
        spring.step(FRAME);

        spring.jump_to(10.0);

        assert_eq!(spring.value(), 10.0);
        assert_eq!(spring.target(), 10.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn spring2_tracks_both_axes() {
        let mut spring = Spring2::new(TRAIL_SPRING, Point::ORIGIN);
        spring.set_target(Point::new(30.0, -20.0));

        for _ in 0..240 {
            spring.step(FRAME);
        }

        assert!(spring.is_settled());
        assert_eq!(spring.value(), Point::new(30.0, -20.0));
    }
}
