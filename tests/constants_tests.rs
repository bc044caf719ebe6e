// Host-side tests for tuning constants and their relationships.

use rope_synth::core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_are_fractions() {
    assert!(DRAG_ALPHA > 0.0 && DRAG_ALPHA < 1.0);
    assert!(SETTLE_ALPHA > 0.0 && SETTLE_ALPHA < 1.0);
    // Dragging tracks the pointer much faster than release settles.
    assert!(DRAG_ALPHA > SETTLE_ALPHA * 10.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ranges_are_ordered() {
    assert!(LENGTH_MAX > LENGTH_MIN && LENGTH_MIN >= 0.0);
    assert!(PITCH_MAX_HZ > PITCH_MIN_HZ);
    assert!(MOD_RATE_MAX_HZ > MOD_RATE_MIN_HZ);
    assert!(MOD_DEPTH_MAX > MOD_DEPTH_MIN);
    assert!(FILTER_CUTOFF_MAX_HZ > FILTER_CUTOFF_MIN_HZ);
    assert!(BOX_MAX_PX > BOX_MIN_PX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn gain_stays_below_clipping() {
    assert!(GAIN_CAP >= 0.4 && GAIN_CAP <= 0.75);
    assert!(GAIN_MIN_LENGTH >= LENGTH_MIN);
}

#[test]
fn pentatonic_spans_three_octaves_in_order() {
    let notes = A_MINOR_PENTATONIC;
    assert_eq!(notes.first().copied(), Some(PITCH_MIN_HZ));
    assert_eq!(notes.last().copied(), Some(PITCH_MAX_HZ));
    assert!((PITCH_MAX_HZ / PITCH_MIN_HZ - 8.0).abs() < 1e-6);
    for pair in notes.windows(2) {
        assert!(pair[1] > pair[0], "scale not ascending at {:?}", pair);
    }
    // Five notes per octave plus the closing A.
    assert_eq!(notes.len(), 16);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn handle_is_grabbable_and_rest_circle_outside_it() {
    assert!(HIT_RADIUS >= 10.0 && HIT_RADIUS <= 18.0);
    assert!(REST_RADIUS > HIT_RADIUS);
    assert!(RAMP_TAU_SEC > 0.0);
}
