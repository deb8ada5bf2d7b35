// Host-side tests for the position -> volume/pan mapping and the ring clamp.

mod common;

use common::approx;
use glam::Vec2;
use mixer_core::{
    clamp_to_annulus, compute_audio_params, distance_attenuation, pan_for_x, INNER_RADIUS,
    MAX_DISTANCE, OUTER_RADIUS, VOLUME_CEIL, VOLUME_FLOOR,
};

#[test]
fn attenuation_is_unity_at_the_listener() {
    assert_eq!(distance_attenuation(0.0), 1.0);
}

#[test]
fn attenuation_strictly_decreases_with_distance() {
    let mut prev = distance_attenuation(0.0);
    for d in 1..=800 {
        let a = distance_attenuation(d as f32);
        assert!(a < prev, "attenuation not decreasing at distance {d}");
        prev = a;
    }
}

#[test]
fn attenuation_at_max_distance_is_e_minus_two() {
    let a = distance_attenuation(MAX_DISTANCE);
    assert!(approx(a, (-2.0_f32).exp(), 1e-6));
    assert!(approx(a, 0.1353, 1e-4));
}

#[test]
fn volume_stays_in_bounds_for_extreme_inputs() {
    let positions = [
        Vec2::ZERO,
        Vec2::new(400.0, 0.0),
        Vec2::new(-1e9, 1e9),
        Vec2::new(f32::MAX, f32::MAX),
        Vec2::new(3.0, -4.0),
    ];
    let volumes = [
        -10.0,
        -0.0,
        0.0,
        0.1,
        1.0,
        2.0,
        1e6,
        f32::MAX,
        f32::INFINITY,
        f32::NEG_INFINITY,
        f32::NAN,
    ];
    for p in positions {
        for manual in volumes {
            for base in volumes {
                for auto_balance in [false, true] {
                    let v = compute_audio_params(p, manual, base, auto_balance).volume;
                    assert!(
                        (VOLUME_FLOOR..=VOLUME_CEIL).contains(&v),
                        "volume {v} out of range for p={p:?} manual={manual} base={base} auto={auto_balance}"
                    );
                }
            }
        }
    }
}

#[test]
fn pan_endpoints_and_clamping() {
    assert_eq!(pan_for_x(-400.0), -1.0);
    assert_eq!(pan_for_x(0.0), 0.0);
    assert_eq!(pan_for_x(400.0), 1.0);
    assert_eq!(pan_for_x(200.0), 0.5);
    assert_eq!(pan_for_x(-1000.0), -1.0);
    assert_eq!(pan_for_x(1e9), 1.0);
    assert_eq!(pan_for_x(f32::NEG_INFINITY), -1.0);
}

#[test]
fn pan_ignores_the_depth_axis() {
    let near = compute_audio_params(Vec2::new(120.0, 0.0), 1.0, 1.0, false);
    let far = compute_audio_params(Vec2::new(120.0, 350.0), 1.0, 1.0, false);
    assert_eq!(near.pan, far.pan);
    assert!(far.volume < near.volume);
}

#[test]
fn listener_position_full_volume_centred() {
    let p = compute_audio_params(Vec2::ZERO, 1.0, 1.0, false);
    assert_eq!(p.volume, 1.0);
    assert_eq!(p.pan, 0.0);
}

#[test]
fn hard_right_at_max_distance() {
    let p = compute_audio_params(Vec2::new(400.0, 0.0), 1.0, 1.0, false);
    assert!(approx(p.volume, 0.1353, 1e-4));
    assert_eq!(p.pan, 1.0);
}

#[test]
fn auto_balance_multiplies_by_base_volume() {
    let pos = Vec2::new(0.0, 200.0);
    let off = compute_audio_params(pos, 1.5, 0.5, false);
    let on = compute_audio_params(pos, 1.5, 0.5, true);
    assert!(approx(on.volume, off.volume * 0.5, 1e-6));
}

#[test]
fn loud_near_source_clips_to_unity() {
    let p = compute_audio_params(Vec2::new(10.0, 0.0), 2.0, 2.0, true);
    assert_eq!(p.volume, 1.0);
}

#[test]
fn annulus_clamp_leaves_in_range_points_alone() {
    for p in [
        Vec2::new(100.0, 0.0),
        Vec2::new(0.0, -400.0),
        Vec2::new(150.0, 150.0),
        Vec2::new(-250.0, 30.0),
    ] {
        assert_eq!(clamp_to_annulus(p, INNER_RADIUS, OUTER_RADIUS), p);
    }
}

#[test]
fn annulus_clamp_is_exactly_idempotent_at_every_angle() {
    for step in 0..3600 {
        let dir = Vec2::from_angle(step as f32 * std::f32::consts::TAU / 3600.0);
        for scale in [0.1_f32, 0.3, 1.0, 5.0, 1e6] {
            let once = clamp_to_annulus(dir * OUTER_RADIUS * scale, INNER_RADIUS, OUTER_RADIUS);
            let len = once.length();
            assert!(
                (INNER_RADIUS..=OUTER_RADIUS).contains(&len),
                "step {step} scale {scale}: {once:?} has length {len}"
            );
            let twice = clamp_to_annulus(once, INNER_RADIUS, OUTER_RADIUS);
            assert_eq!(twice, once, "step {step} scale {scale}");
        }
    }
}

#[test]
fn annulus_clamp_keeps_the_angle_of_tiny_vectors() {
    let p = clamp_to_annulus(Vec2::new(1e-20, -1e-20), INNER_RADIUS, OUTER_RADIUS);
    let half = INNER_RADIUS * std::f32::consts::FRAC_1_SQRT_2;
    assert!(approx(p.x, half, 1e-2) && approx(p.y, -half, 1e-2), "{p:?}");

    let q = clamp_to_annulus(Vec2::new(0.0, 1e-8), INNER_RADIUS, OUTER_RADIUS);
    assert!(approx(q.x, 0.0, 1e-3) && approx(q.y, INNER_RADIUS, 1e-3), "{q:?}");
}

#[test]
fn annulus_clamp_handles_lengths_that_overflow() {
    let p = clamp_to_annulus(Vec2::new(f32::MAX, f32::MAX), INNER_RADIUS, OUTER_RADIUS);
    let half = OUTER_RADIUS * std::f32::consts::FRAC_1_SQRT_2;
    assert!(approx(p.x, half, 1e-2) && approx(p.y, half, 1e-2), "{p:?}");
    assert!(p.length() <= OUTER_RADIUS);
}

#[test]
fn annulus_clamp_scales_radius_and_keeps_angle() {
    let inside = clamp_to_annulus(Vec2::new(30.0, 40.0), INNER_RADIUS, OUTER_RADIUS);
    assert!(approx(inside.length(), INNER_RADIUS, 1e-3));
    assert!(approx(inside.x / inside.y, 30.0 / 40.0, 1e-5));

    let outside = clamp_to_annulus(Vec2::new(-600.0, 800.0), INNER_RADIUS, OUTER_RADIUS);
    assert!(approx(outside.length(), OUTER_RADIUS, 1e-3));
    assert!(approx(outside.x, -240.0, 1e-3));
    assert!(approx(outside.y, 320.0, 1e-3));
}

#[test]
fn annulus_clamp_of_origin_is_deterministic() {
    let a = clamp_to_annulus(Vec2::ZERO, INNER_RADIUS, OUTER_RADIUS);
    let b = clamp_to_annulus(Vec2::ZERO, INNER_RADIUS, OUTER_RADIUS);
    assert_eq!(a, b);
    assert_eq!(a, Vec2::new(INNER_RADIUS, 0.0));
    assert!(a.x.is_finite() && a.y.is_finite());
}
