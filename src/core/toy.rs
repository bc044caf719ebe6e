//! The rope toy: kinematics, mapping and the synth session wired together.
//!
//! The web shell forwards pointer and layout events here and calls
//! [`RopeToy::tick`] once per animation frame. Nothing in this module touches
//! the browser, so the whole interaction can be driven from tests.

use super::constants::{BOX_MAX_PX, BOX_MIN_PX};
use super::geometry::{lerp, RopeGeometry};
use super::kinematics::{KinematicsConfig, KinematicsController};
use super::mapper::{MapperConfig, SynthTargets, SynthesisMapper};
use super::retry::RetryPolicy;
use super::scale::Scale;
use super::synth::{Synth, SynthSession};
use glam::Vec2;

/// How the host window box is sized each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizingMode {
    /// Edge length follows the normalized rope length.
    #[default]
    DragDriven,
    /// Edge length jumps between min and max on hover; the shell animates it.
    Hover,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualConfig {
    pub box_min_px: f32,
    pub box_max_px: f32,
    pub sizing: SizingMode,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            box_min_px: BOX_MIN_PX,
            box_max_px: BOX_MAX_PX,
            sizing: SizingMode::DragDriven,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ToyConfig {
    pub kinematics: KinematicsConfig,
    pub mapper: MapperConfig,
    pub visual: VisualConfig,
    pub retry: RetryPolicy,
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    pub center: Vec2,
    pub rope_end: Vec2,
    pub geometry: RopeGeometry,
    /// Edge length of the host window box in pixels.
    pub box_size: f32,
    /// Targets sent to the synth, if it is running.
    pub targets: Option<SynthTargets>,
}

pub struct RopeToy<S: Synth> {
    pub config: ToyConfig,
    kinematics: KinematicsController,
    mapper: SynthesisMapper,
    session: SynthSession<S>,
    hovered: bool,
}

impl<S: Synth> RopeToy<S> {
    pub fn new(window_center: Vec2, config: ToyConfig) -> Self {
        Self {
            config,
            kinematics: KinematicsController::new(window_center, config.kinematics),
            mapper: SynthesisMapper::new(config.mapper, Scale::default()),
            session: SynthSession::new(),
            hovered: false,
        }
    }

    /// Grab the rope end if `p` is on it. The synth is built by `factory`
    /// on the first successful grab only.
    pub fn pointer_down<E, F>(&mut self, p: Vec2, factory: F) -> bool
    where
        F: FnOnce() -> Result<S, E>,
        E: std::fmt::Debug,
    {
        if !self.kinematics.on_pointer_down(p) {
            return false;
        }
        log::debug!("[rope] grab at ({:.1},{:.1})", p.x, p.y);
        self.session.ensure_started(factory);
        true
    }

    pub fn pointer_move(&mut self, p: Vec2) {
        self.kinematics.on_pointer_move(p);
    }

    pub fn pointer_up(&mut self) {
        if self.kinematics.on_pointer_up() {
            let rest = self.kinematics.rest_position();
            log::debug!("[rope] release, rest at ({:.1},{:.1})", rest.x, rest.y);
            let mapper = &self.mapper;
            self.session.with(|s| mapper.release(s));
        }
    }

    /// New layout facts from the shell (resize or scroll).
    pub fn relayout(&mut self, window_center: Vec2) {
        self.kinematics.set_window_center(window_center);
    }

    /// Like [`RopeToy::relayout`], but also re-hangs the rope at rest. Used
    /// when the shell first learns the real layout.
    pub fn reset_layout(&mut self, window_center: Vec2) {
        self.kinematics.reset(window_center);
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn tick(&mut self) -> FrameOutput {
        let geometry = self.kinematics.tick();
        let held = self.kinematics.is_dragging();
        let mapper = &self.mapper;
        let targets = self.session.with(|s| mapper.apply(geometry, held, s));
        FrameOutput {
            center: self.kinematics.window_center(),
            rope_end: self.kinematics.rope_end(),
            geometry,
            box_size: self.box_size(geometry.length),
            targets,
        }
    }

    pub fn box_size(&self, length: f32) -> f32 {
        let v = &self.config.visual;
        match v.sizing {
            SizingMode::DragDriven => {
                lerp(v.box_min_px, v.box_max_px, self.mapper.normalized_length(length))
            }
            SizingMode::Hover if self.hovered => v.box_max_px,
            SizingMode::Hover => v.box_min_px,
        }
    }

    pub fn teardown(&mut self) {
        self.session.teardown();
    }

    pub fn kinematics(&self) -> &KinematicsController {
        &self.kinematics
    }

    pub fn mapper(&self) -> &SynthesisMapper {
        &self.mapper
    }

    pub fn session(&self) -> &SynthSession<S> {
        &self.session
    }
}
