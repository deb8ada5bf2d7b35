// Host-side tests for constants and their relationships.
// The web constants module is wasm-crate-private, so it is included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use mixer_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn ring_bounds_are_ordered() {
    assert!(INNER_RADIUS > 0.0);
    assert!(INNER_RADIUS < START_RADIUS && START_RADIUS < OUTER_RADIUS);
    assert_eq!(MAX_DISTANCE, OUTER_RADIUS);
    assert!(RING_SELECTOR_RADIUS > OUTER_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn volume_ranges_are_consistent() {
    assert!(VOLUME_FLOOR > 0.0 && VOLUME_FLOOR < VOLUME_CEIL);
    assert!(MIN_MANUAL_VOLUME > 0.0);
    assert!(MIN_MANUAL_VOLUME <= DEFAULT_MANUAL_VOLUME);
    assert!(DEFAULT_MANUAL_VOLUME <= MAX_MANUAL_VOLUME);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn handle_is_pickable_at_the_smallest_size() {
    // The handle must stay outside the body centre even at minimum volume.
    let smallest = BASE_RADIUS * (RADIUS_VOLUME_OFFSET + MIN_MANUAL_VOLUME);
    assert!(smallest > HANDLE_HIT_RADIUS);
}

#[test]
fn largest_source_fits_between_listener_and_ring() {
    let largest = BASE_RADIUS * (RADIUS_VOLUME_OFFSET + MAX_MANUAL_VOLUME);
    assert!(largest < INNER_RADIUS);
}

#[test]
fn slot_angles_are_distinct_quadrants() {
    assert_eq!(SLOT_ANGLES.len(), SOURCE_COUNT);
    assert_eq!(DEFAULT_SOURCE_COLORS.len(), SOURCE_COUNT);
    let mut quadrants: Vec<(bool, bool)> = SLOT_ANGLES
        .iter()
        .map(|a| (a.cos() > 0.0, a.sin() > 0.0))
        .collect();
    quadrants.sort();
    quadrants.dedup();
    assert_eq!(quadrants.len(), SOURCE_COUNT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn controls_fit_the_default_viewport() {
    assert!(2.0 * SELECTOR_WIDTH < DEFAULT_VIEWPORT_WIDTH);
    assert!(BALANCE_BUTTON_WIDTH + BALANCE_BUTTON_MARGIN < DEFAULT_VIEWPORT_WIDTH);
    assert!(SOUND_FADE_OUT_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn visual_constants_are_sane() {
    assert!(GRID_RINGS > 0 && GRID_SPOKES > 0);
    assert!(GRID_RING_ALPHA_NEAR > GRID_RING_ALPHA_FAR);
    assert!(BODY_ALPHA_ACTIVE > BODY_ALPHA_IDLE && BODY_ALPHA_ACTIVE <= 1.0);
    assert!(LISTENER_RING_RADIUS > LISTENER_DOT_RADIUS);
    assert!((HANDLE_DRAW_RADIUS as f32) < HANDLE_HIT_RADIUS);
    assert!(!HELP_LINES.is_empty());
}
