#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- construction ---

#[test]
fn new_subtracts_padding_on_both_sides() {
    let scale = BpScale::new(1000, 940.0, 20.0);
    assert_eq!(scale.drawable_width(), 900.0);
    assert_eq!(scale.length(), 1000.0);
}

#[test]
fn new_clamps_negative_drawable_width() {
    let scale = BpScale::new(1000, 30.0, 20.0);
    assert_eq!(scale.drawable_width(), 0.0);
}

#[test]
fn new_treats_non_finite_width_as_zero() {
    assert_eq!(BpScale::new(10, f64::NAN, 0.0).drawable_width(), 0.0);
    assert_eq!(BpScale::new(10, f64::INFINITY, 0.0).drawable_width(), 0.0);
}

#[test]
fn new_treats_non_positive_length_as_one() {
    assert_eq!(BpScale::new(0, 100.0, 0.0).length(), 1.0);
    assert_eq!(BpScale::new(-50, 100.0, 0.0).length(), 1.0);
}

// --- bp_to_x ---

#[test]
fn bp_to_x_maps_start_and_end() {
    let scale = BpScale::new(12000, 900.0, 0.0);
    assert_eq!(scale.bp_to_x(0.0), 0.0);
    assert!(approx_eq(scale.bp_to_x(12000.0), 900.0));
}

#[test]
fn bp_to_x_feature_left_edge_scenario() {
    let scale = BpScale::new(12000, 900.0, 0.0);
    assert!(approx_eq(scale.bp_to_x(400.0), 30.0));
}

#[test]
fn bp_to_x_zero_length_is_finite() {
    let scale = BpScale::new(0, 500.0, 0.0);
    let x = scale.bp_to_x(0.5);
    assert!(x.is_finite());
    assert!(approx_eq(x, 250.0));
}

// --- span_to_width ---

#[test]
fn span_to_width_proportional() {
    let scale = BpScale::new(12000, 900.0, 0.0);
    assert!(approx_eq(scale.span_to_width(400.0, 1200.0, 0.0), 60.0));
}

#[test]
fn span_to_width_floor_applies_to_degenerate_span() {
    let scale = BpScale::new(12000, 900.0, 0.0);
    assert_eq!(scale.span_to_width(500.0, 500.0, 2.0), 2.0);
}

#[test]
fn span_to_width_reversed_span_is_not_negative() {
    let scale = BpScale::new(100, 100.0, 0.0);
    assert_eq!(scale.span_to_width(80.0, 20.0, 0.0), 0.0);
    assert_eq!(scale.span_to_width(80.0, 20.0, -5.0), 0.0);
}

#[test]
fn span_to_width_zero_length_genome() {
    let scale = BpScale::new(0, 100.0, 0.0);
    let w = scale.span_to_width(0.0, 0.0, 0.0);
    assert!(w.is_finite());
    assert_eq!(w, 0.0);
}
