use super::constants::{DRAG_ALPHA, HIT_RADIUS, REST_RADIUS, SETTLE_ALPHA};
use super::geometry::{project_onto_circle, RopeGeometry, FALLBACK_DIRECTION};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KinematicsConfig {
    /// Max distance from the rope end that still counts as a grab.
    pub hit_radius: f32,
    /// Radius of the circle the rope end settles onto after release.
    pub rest_radius: f32,
    pub drag_alpha: f32,
    pub settle_alpha: f32,
}

impl Default for KinematicsConfig {
    fn default() -> Self {
        Self {
            hit_radius: HIT_RADIUS,
            rest_radius: REST_RADIUS,
            drag_alpha: DRAG_ALPHA,
            settle_alpha: SETTLE_ALPHA,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    Dragging,
    #[default]
    Released,
}

/// Owns the rope end and everything that moves it.
///
/// Layout facts (the window center) are pushed in by the caller; the
/// controller never looks anything up on its own.
#[derive(Clone, Debug)]
pub struct KinematicsController {
    pub config: KinematicsConfig,
    rope_end: Vec2,
    rest_position: Vec2,
    window_center: Vec2,
    pointer_pos: Vec2,
    drag: DragState,
}

impl KinematicsController {
    pub fn new(window_center: Vec2, config: KinematicsConfig) -> Self {
        let rest_position = window_center + FALLBACK_DIRECTION * config.rest_radius;
        Self {
            config,
            rope_end: rest_position,
            rest_position,
            window_center,
            pointer_pos: rest_position,
            drag: DragState::Released,
        }
    }

    /// Returns true when `p` grabbed the rope end.
    pub fn on_pointer_down(&mut self, p: Vec2) -> bool {
        if !p.is_finite() {
            return false;
        }
        if p.distance(self.rope_end) > self.config.hit_radius {
            return false;
        }
        self.drag = DragState::Dragging;
        self.pointer_pos = p;
        true
    }

    pub fn on_pointer_move(&mut self, p: Vec2) {
        if self.is_dragging() && p.is_finite() {
            self.pointer_pos = p;
        }
    }

    /// Ends any drag and recomputes the rest position from the last pointer
    /// position. Returns whether a drag was in progress.
    pub fn on_pointer_up(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.drag = DragState::Released;
        self.rest_position =
            project_onto_circle(self.window_center, self.pointer_pos, self.config.rest_radius);
        was_dragging
    }

    /// Re-centers on new layout. Rope end and rest position keep their
    /// screen coordinates.
    pub fn set_window_center(&mut self, center: Vec2) {
        if center.is_finite() {
            self.window_center = center;
        }
    }

    /// Re-center and put the rope back at rest straight below the center,
    /// dropping any drag.
    pub fn reset(&mut self, center: Vec2) {
        if center.is_finite() {
            *self = Self::new(center, self.config);
        }
    }

    pub fn tick(&mut self) -> RopeGeometry {
        let (target, alpha) = match self.drag {
            DragState::Dragging => (self.pointer_pos, self.config.drag_alpha),
            DragState::Released => (self.rest_position, self.config.settle_alpha),
        };
        self.rope_end = self.rope_end.lerp(target, alpha);
        self.geometry()
    }

    pub fn geometry(&self) -> RopeGeometry {
        RopeGeometry::between(self.window_center, self.rope_end)
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag == DragState::Dragging
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn rope_end(&self) -> Vec2 {
        self.rope_end
    }

    pub fn rest_position(&self) -> Vec2 {
        self.rest_position
    }

    pub fn window_center(&self) -> Vec2 {
        self.window_center
    }

    pub fn pointer_pos(&self) -> Vec2 {
        self.pointer_pos
    }
}
