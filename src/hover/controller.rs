use glam::Vec2;
use web_time::{Duration, Instant};

use super::affordance::{Affordance, AffordanceTweens, TweenKind};
use crate::camera::Camera;
use crate::input::PointerKind;
use crate::options::HoverOptions;
use crate::orbit::BodyId;
use crate::scene::{Pickable, SceneAdapter};

/// Tracks which body is under the pointer and drives enter/exit
/// affordance tweens.
///
/// An unchanged hover result does nothing, so hovering the same body on
/// every pointer move starts exactly one enter tween.
#[derive(Debug, Clone)]
pub struct HoverHitTestController {
    hovered: Option<BodyId>,
    pointer_kind: PointerKind,
    tweens: AffordanceTweens,
    options: HoverOptions,
}

impl HoverHitTestController {
    /// Create a controller for a mouse-like device with nothing hovered.
    pub fn new(options: HoverOptions) -> Self {
        Self {
            hovered: None,
            pointer_kind: PointerKind::Mouse,
            tweens: AffordanceTweens::new(),
            options,
        }
    }

    /// Replace the hover options. Running tweens keep their targets.
    pub fn set_options(&mut self, options: HoverOptions) {
        self.options = options;
    }

    /// Body currently hovered.
    pub fn hovered(&self) -> Option<BodyId> {
        self.hovered
    }

    /// Whether hover is active for the current device class.
    pub fn is_enabled(&self) -> bool {
        self.pointer_kind.supports_hover()
    }

    /// Device class of the pointer. Switching to touch clears the hover.
    pub fn set_pointer_kind(&mut self, kind: PointerKind, now: Instant) {
        self.pointer_kind = kind;
        if !kind.supports_hover() {
            self.update(None, now);
        }
    }

    /// Affordance values of `id` as of the last tick.
    pub fn affordance(&self, id: BodyId) -> Affordance {
        self.tweens.value(id)
    }

    /// The tween arena, for inspection.
    pub fn tweens(&self) -> &AffordanceTweens {
        &self.tweens
    }

    /// Pick radius of a body with the given display radius.
    pub fn pick_radius(&self, display_radius: f32) -> f32 {
        display_radius * self.options.pick_radius_scale
    }

    /// Frontmost body under `pointer_ndc`, or `None` when hover is disabled
    /// or there is no pointer.
    pub fn hit_test<S: SceneAdapter + ?Sized>(
        &self,
        scene: &S,
        pointer_ndc: Option<Vec2>,
        camera: &Camera,
        pickables: &[Pickable],
    ) -> Option<BodyId> {
        if !self.is_enabled() {
            return None;
        }
        let ndc = pointer_ndc.filter(|p| p.is_finite())?;
        scene.raycast_pick(ndc, camera, pickables)
    }

    /// Apply a hit-test result.
    ///
    /// On a change the old body's exit tween starts before the new body's
    /// enter tween; an unchanged id is a no-op.
    pub fn update(&mut self, hit: Option<BodyId>, now: Instant) {
        let hit = if self.is_enabled() { hit } else { None };
        if hit == self.hovered {
            return;
        }
        let duration = Duration::from_millis(self.options.tween_ms);
        let easing = self.options.easing;
        if let Some(old) = self.hovered {
            let rest = Affordance::REST;
            self.tweens
                .start(old, TweenKind::Exit, rest, duration, easing, now);
        }
        if let Some(new) = hit {
            let to = Affordance {
                scale: self.options.hover_scale,
                label_opacity: self.options.label_opacity,
            };
            self.tweens.start(new, TweenKind::Enter, to, duration, easing, now);
        }
        log::debug!("hover {:?} -> {:?}", self.hovered, hit);
        self.hovered = hit;
    }

    /// Advance affordance tweens.
    pub fn tick(&mut self, now: Instant) {
        self.tweens.tick(now);
    }

    /// Drop all state of a disposed body.
    pub fn forget(&mut self, id: BodyId) {
        if self.hovered == Some(id) {
            self.hovered = None;
        }
        self.tweens.remove(id);
    }
}
