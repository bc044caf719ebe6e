// Physics and audio tuning shared by the rope controller and the synth mapper.

// Rope kinematics (screen pixels)
pub const HIT_RADIUS: f32 = 18.0; // grab distance around the rope end (handle radius)
pub const REST_RADIUS: f32 = 120.0; // rope end settles on this circle after release
pub const DRAG_ALPHA: f32 = 0.2; // per-tick lerp factor while dragging
pub const SETTLE_ALPHA: f32 = 0.01; // per-tick lerp factor while drifting back to rest

// Length normalization interval (pixels)
pub const LENGTH_MIN: f32 = 150.0;
pub const LENGTH_MAX: f32 = 500.0;

// Pitch range mapped from the rope angle (Hz), three octaves
pub const PITCH_MIN_HZ: f32 = 110.0;
pub const PITCH_MAX_HZ: f32 = 880.0;

// LFO
pub const MOD_RATE_MIN_HZ: f32 = 0.5;
pub const MOD_RATE_MAX_HZ: f32 = 8.0;
pub const MOD_DEPTH_MIN: f32 = 2.0;
pub const MOD_DEPTH_MAX: f32 = 24.0;

// Lowpass
pub const FILTER_CUTOFF_MIN_HZ: f32 = 400.0;
pub const FILTER_CUTOFF_MAX_HZ: f32 = 4000.0;

// Output level
pub const GAIN_MIN_LENGTH: f32 = 150.0; // silent below this rope length
pub const GAIN_CAP: f32 = 0.5;

// Parameter ramp time constant (seconds)
pub const RAMP_TAU_SEC: f32 = 0.1;

// Host window box edge (pixels)
pub const BOX_MIN_PX: f32 = 120.0;
pub const BOX_MAX_PX: f32 = 360.0;

/// A minor pentatonic from A2 to A5.
pub const A_MINOR_PENTATONIC: &[f32] = &[
    110.00, 130.81, 146.83, 164.81, 196.00, // A2 C3 D3 E3 G3
    220.00, 261.63, 293.66, 329.63, 392.00, // A3 C4 D4 E4 G4
    440.00, 523.25, 587.33, 659.25, 783.99, // A4 C5 D5 E5 G5
    880.00, // A5
];
