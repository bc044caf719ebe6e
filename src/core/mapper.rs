use super::constants::*;
use super::geometry::{lerp, normalize_angle, normalize_length, RopeGeometry};
use super::scale::Scale;
use super::synth::Synth;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapperConfig {
    pub length_min: f32,
    pub length_max: f32,
    pub pitch_min_hz: f32,
    pub pitch_max_hz: f32,
    pub mod_rate_min_hz: f32,
    pub mod_rate_max_hz: f32,
    pub mod_depth_min: f32,
    pub mod_depth_max: f32,
    pub filter_min_hz: f32,
    pub filter_max_hz: f32,
    /// Rope length below which the output is silent.
    pub gain_min_length: f32,
    /// Upper bound on output gain, kept well below clipping.
    pub gain_cap: f32,
    pub ramp_tau_sec: f32,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            length_min: LENGTH_MIN,
            length_max: LENGTH_MAX,
            pitch_min_hz: PITCH_MIN_HZ,
            pitch_max_hz: PITCH_MAX_HZ,
            mod_rate_min_hz: MOD_RATE_MIN_HZ,
            mod_rate_max_hz: MOD_RATE_MAX_HZ,
            mod_depth_min: MOD_DEPTH_MIN,
            mod_depth_max: MOD_DEPTH_MAX,
            filter_min_hz: FILTER_CUTOFF_MIN_HZ,
            filter_max_hz: FILTER_CUTOFF_MAX_HZ,
            gain_min_length: GAIN_MIN_LENGTH,
            gain_cap: GAIN_CAP,
            ramp_tau_sec: RAMP_TAU_SEC,
        }
    }
}

/// Parameter targets for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SynthTargets {
    /// Scale note nearest the angle-mapped frequency.
    pub pitch_hz: f32,
    /// What the carrier is actually sent: `pitch_hz + mod_depth`.
    pub oscillator_hz: f32,
    pub mod_rate_hz: f32,
    pub mod_depth: f32,
    pub filter_cutoff_hz: f32,
    pub gain: f32,
}

/// Stateless mapping from rope geometry to synth parameters.
#[derive(Clone, Debug, Default)]
pub struct SynthesisMapper {
    pub config: MapperConfig,
    pub scale: Scale,
}

impl SynthesisMapper {
    pub fn new(config: MapperConfig, scale: Scale) -> Self {
        Self { config, scale }
    }

    #[inline]
    pub fn normalized_length(&self, length: f32) -> f32 {
        normalize_length(length, self.config.length_min, self.config.length_max)
    }

    /// Unquantized frequency for an angle.
    #[inline]
    pub fn angle_to_hz(&self, angle: f32) -> f32 {
        let c = &self.config;
        lerp(c.pitch_min_hz, c.pitch_max_hz, normalize_angle(angle))
    }

    pub fn targets(&self, geometry: RopeGeometry) -> SynthTargets {
        let c = &self.config;
        let n = self.normalized_length(geometry.length);

        let pitch_hz = self.scale.snap(self.angle_to_hz(geometry.angle));
        let mod_depth = lerp(c.mod_depth_min, c.mod_depth_max, n);
        let gain = if geometry.length < c.gain_min_length {
            0.0
        } else {
            (n * c.gain_cap).min(c.gain_cap)
        };

        SynthTargets {
            pitch_hz,
            // The live depth is added to the carrier target, not only applied
            // around it through the LFO.
            oscillator_hz: pitch_hz + mod_depth,
            mod_rate_hz: lerp(c.mod_rate_min_hz, c.mod_rate_max_hz, n),
            mod_depth,
            filter_cutoff_hz: lerp(c.filter_min_hz, c.filter_max_hz, n),
            gain,
        }
    }

    /// Recompute and send every parameter for this tick.
    ///
    /// With `held` false the rope is settling after a release: everything is
    /// still tracked, but the gain target stays at 0 so the fade-out sticks.
    pub fn apply<S: Synth + ?Sized>(
        &self,
        geometry: RopeGeometry,
        held: bool,
        synth: &mut S,
    ) -> SynthTargets {
        let mut t = self.targets(geometry);
        if !held {
            t.gain = 0.0;
        }
        let tau = self.config.ramp_tau_sec;
        synth.set_modulation_depth(t.mod_depth);
        synth.set_modulation_rate(t.mod_rate_hz);
        synth.set_oscillator_frequency(t.oscillator_hz, tau);
        if synth.has_filter() {
            synth.set_filter_cutoff(t.filter_cutoff_hz);
        }
        synth.set_gain(t.gain, tau);
        t
    }

    /// Fade out on release, whatever the geometry.
    pub fn release<S: Synth + ?Sized>(&self, synth: &mut S) {
        synth.set_gain(0.0, self.config.ramp_tau_sec);
    }
}
