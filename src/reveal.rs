use std::time::Duration;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_DURATION: Duration = Duration::from_millis(800);
pub const REVEAL_RISE_PX: f64 = 60.0;
// 1 - (1 - t)^3
const EASE_OUT_CUBIC: &str = "cubic-bezier(0.33, 1, 0.68, 1)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Unseen,
    Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    state: RevealState,
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD)
    }
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            state: RevealState::Unseen,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Feeds the visible fraction of the section. Returns true only on the
    /// observation that performs the `Unseen -> Revealed` transition.
    pub fn observe(&mut self, visible_ratio: f64) -> bool {
        if self.is_revealed() || visible_ratio < self.threshold {
            return false;
        }

        self.state = RevealState::Revealed;
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealFrame {
    pub opacity: f64,
    pub offset_y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealAnimation {
    pub duration: Duration,
    pub delay: Duration,
    pub rise_px: f64,
}

impl Default for RevealAnimation {
    fn default() -> Self {
        Self {
            duration: REVEAL_DURATION,
            delay: Duration::ZERO,
            rise_px: REVEAL_RISE_PX,
        }
    }
}

impl RevealAnimation {
    pub fn staggered(index: usize, step: Duration, duration: Duration, rise_px: f64) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        Self {
            duration,
            delay: step.saturating_mul(index),
            rise_px,
        }
    }

    pub fn initial(&self) -> RevealFrame {
        RevealFrame {
            opacity: 0.0,
            offset_y: self.rise_px,
        }
    }

    pub fn style(&self, state: RevealState) -> String {
        let frame = match state {
            RevealState::Unseen => self.initial(),
            RevealState::Revealed => RevealFrame {
                opacity: 1.0,
                offset_y: 0.0,
            },
        };
        let duration = self.duration.as_secs_f64();
        let delay = self.delay.as_secs_f64();

        format!(
            "opacity: {:.2}; transform: translateY({:.2}px); \
             transition: opacity {duration:.2}s {EASE_OUT_CUBIC} {delay:.2}s, \
             transform {duration:.2}s {EASE_OUT_CUBIC} {delay:.2}s;",
            frame.opacity, frame.offset_y
        )
    }
}
