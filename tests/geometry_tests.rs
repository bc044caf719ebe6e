// Host-side tests for the pure rope geometry helpers.

use glam::Vec2;
use rope_synth::core::*;
use std::f32::consts::{FRAC_PI_2, PI};

#[test]
fn length_is_euclidean_distance() {
    let c = Vec2::new(500.0, 500.0);
    assert!((rope_length(c, Vec2::new(700.0, 500.0)) - 200.0).abs() < 1e-4);
    assert!((rope_length(c, Vec2::new(503.0, 504.0)) - 5.0).abs() < 1e-4);
    assert_eq!(rope_length(c, c), 0.0);
}

#[test]
fn angle_is_measured_from_the_downward_vertical() {
    let c = Vec2::new(500.0, 500.0);
    assert!(rope_angle(c, Vec2::new(500.0, 700.0)).abs() < 1e-6);
    assert!((rope_angle(c, Vec2::new(700.0, 500.0)) - FRAC_PI_2).abs() < 1e-6);
    assert!((rope_angle(c, Vec2::new(300.0, 500.0)) + FRAC_PI_2).abs() < 1e-6);
    assert!((rope_angle(c, Vec2::new(500.0, 300.0)) - PI).abs() < 1e-6);
}

#[test]
fn angle_never_returns_minus_pi() {
    // Straight up with a negative-zero dx would give -π from atan2.
    let a = rope_angle(Vec2::ZERO, Vec2::new(-0.0, -10.0));
    assert!(a > -PI && a <= PI, "angle {a} out of (-π, π]");
    assert_eq!(a, PI);
}

#[test]
fn length_and_angle_stay_in_range_over_a_grid() {
    let c = Vec2::new(400.0, 300.0);
    for ix in -20..=20 {
        for iy in -20..=20 {
            let p = c + Vec2::new(ix as f32 * 37.5, iy as f32 * 29.0);
            let g = RopeGeometry::between(c, p);
            assert!(g.length >= 0.0);
            assert!(g.angle > -PI && g.angle <= PI, "angle {} at {:?}", g.angle, p);
            // Pure: same inputs, same outputs.
            assert_eq!(g, RopeGeometry::between(c, p));
        }
    }
}

#[test]
fn normalize_length_clamps_both_ends() {
    assert_eq!(normalize_length(0.0, 150.0, 500.0), 0.0);
    assert_eq!(normalize_length(150.0, 150.0, 500.0), 0.0);
    assert_eq!(normalize_length(500.0, 150.0, 500.0), 1.0);
    assert_eq!(normalize_length(10_000.0, 150.0, 500.0), 1.0);
    assert!((normalize_length(325.0, 150.0, 500.0) - 0.5).abs() < 1e-6);
}

#[test]
fn normalize_length_handles_an_empty_interval() {
    assert_eq!(normalize_length(100.0, 200.0, 200.0), 0.0);
    assert_eq!(normalize_length(300.0, 200.0, 200.0), 1.0);
}

#[test]
fn normalize_angle_maps_to_unit_interval() {
    assert!((normalize_angle(-PI + 1e-6) - 0.0).abs() < 1e-5);
    assert!((normalize_angle(0.0) - 0.5).abs() < 1e-6);
    assert_eq!(normalize_angle(PI), 1.0);
}

#[test]
fn projection_lands_on_the_circle() {
    let c = Vec2::new(500.0, 500.0);
    assert_eq!(
        project_onto_circle(c, Vec2::new(600.0, 500.0), 120.0),
        Vec2::new(620.0, 500.0)
    );
    let p = project_onto_circle(c, Vec2::new(123.0, 987.0), 120.0);
    assert!((p.distance(c) - 120.0).abs() < 1e-3);
}

#[test]
fn projection_from_the_center_falls_back_to_straight_down() {
    let c = Vec2::new(500.0, 500.0);
    let p = project_onto_circle(c, c, 120.0);
    assert!(p.is_finite());
    assert_eq!(p, c + FALLBACK_DIRECTION * 120.0);
    assert_eq!(p, Vec2::new(500.0, 620.0));
}
