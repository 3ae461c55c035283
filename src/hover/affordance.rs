use rustc_hash::FxHashMap;
use web_time::{Duration, Instant};

use crate::orbit::BodyId;
use crate::util::easing::EasingFunction;
use crate::util::tween::{lerp_f32, Tween};

/// Visual hint values of one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affordance {
    /// Scale multiplier applied to the body mesh.
    pub scale: f32,
    /// Opacity of the body's label overlay.
    pub label_opacity: f32,
}

impl Affordance {
    /// The resting (not hovered) affordance.
    pub const REST: Affordance = Affordance {
        scale: 1.0,
        label_opacity: 0.0,
    };

    fn lerp(self, to: Affordance, t: f32) -> Affordance {
        Affordance {
            scale: lerp_f32(self.scale, to.scale, t),
            label_opacity: lerp_f32(self.label_opacity, to.label_opacity, t),
        }
    }
}

impl Default for Affordance {
    fn default() -> Self {
        Self::REST
    }
}

/// Which way an affordance tween goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenKind {
    /// Pointer entered the body.
    Enter,
    /// Pointer left the body.
    Exit,
}

/// A running affordance tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffordanceTween {
    /// Enter or exit.
    pub kind: TweenKind,
    /// Timing of the tween.
    pub tween: Tween,
    /// Value when the tween started.
    pub from: Affordance,
    /// Value the tween settles on.
    pub to: Affordance,
}

impl AffordanceTween {
    fn value_at(&self, now: Instant) -> Affordance {
        self.from.lerp(self.to, self.tween.eased_progress(now))
    }
}

/// Arena of affordance state keyed by body id.
///
/// Each body has at most one running tween; starting another on the same
/// body replaces it, starting from the value it had reached. Bodies never
/// affect each other.
#[derive(Debug, Clone, Default)]
pub struct AffordanceTweens {
    values: FxHashMap<BodyId, Affordance>,
    running: FxHashMap<BodyId, AffordanceTween>,
    started: u64,
}

impl AffordanceTweens {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a tween of `id` towards `to`, replacing any running one.
    pub fn start(
        &mut self,
        id: BodyId,
        kind: TweenKind,
        to: Affordance,
        duration: Duration,
        easing: EasingFunction,
        now: Instant,
    ) {
        let from = self.value_at(id, now);
        let _ = self.running.insert(
            id,
            AffordanceTween {
                kind,
                tween: Tween::new(now, duration, easing),
                from,
                to,
            },
        );
        let _ = self.values.insert(id, from);
        self.started += 1;
    }

    /// Value of `id` at `now`, including any running tween.
    fn value_at(&self, id: BodyId, now: Instant) -> Affordance {
        self.running.get(&id).map_or_else(
            || self.value(id),
            |running| running.value_at(now),
        )
    }

    /// Advance every running tween to `now`, retiring finished ones.
    pub fn tick(&mut self, now: Instant) {
        let values = &mut self.values;
        self.running.retain(|id, running| {
            let finished = running.tween.is_finished(now);
            let value = if finished {
                running.to
            } else {
                running.value_at(now)
            };
            if finished && value == Affordance::REST {
                let _ = values.remove(id);
            } else {
                let _ = values.insert(*id, value);
            }
            !finished
        });
    }

    /// Value of `id` as of the last tick ([`Affordance::REST`] if untouched).
    pub fn value(&self, id: BodyId) -> Affordance {
        self.values.get(&id).copied().unwrap_or(Affordance::REST)
    }

    /// Running tween of `id`, if any.
    pub fn running(&self, id: BodyId) -> Option<&AffordanceTween> {
        self.running.get(&id)
    }

    /// Whether any tween is running.
    pub fn is_animating(&self) -> bool {
        !self.running.is_empty()
    }

    /// Total number of tweens ever started.
    pub fn tweens_started(&self) -> u64 {
        self.started
    }

    /// Forget all state of a disposed body.
    pub fn remove(&mut self, id: BodyId) {
        let _ = self.running.remove(&id);
        let _ = self.values.remove(&id);
    }
}
