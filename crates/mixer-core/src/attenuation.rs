//! Position -> playback parameter mapping.
//!
//! Everything here is pure so it can be driven with synthetic inputs from tests
//! and called once per source per animation frame from the tick driver.

use crate::constants::{MAX_DISTANCE, PAN_SPAN, VOLUME_CEIL, VOLUME_FLOOR};
use glam::Vec2;

/// Volume and stereo pan for one source on one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AudioParams {
    /// Linear gain in \[VOLUME_FLOOR, VOLUME_CEIL\].
    pub volume: f32,
    /// Stereo position in \[-1, 1\], -1 hard left.
    pub pan: f32,
}

/// Linear remap of `value` from `[in_min, in_max]` to `[out_min, out_max]`, unclamped.
#[inline]
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}

/// Exponential distance falloff: 1.0 at the listener, e^-2 at `MAX_DISTANCE`.
#[inline]
pub fn distance_attenuation(distance: f32) -> f32 {
    (-distance / (MAX_DISTANCE / 2.0)).exp()
}

/// Horizontal pan from the x coordinate alone; depth never affects the stereo image.
#[inline]
pub fn pan_for_x(x: f32) -> f32 {
    if x.is_nan() {
        return 0.0;
    }
    map_range(x, -PAN_SPAN, PAN_SPAN, -1.0, 1.0).clamp(-1.0, 1.0)
}

pub fn compute_audio_params(
    position: Vec2,
    manual_volume: f32,
    base_volume: f32,
    auto_balance: bool,
) -> AudioParams {
    let attenuation = distance_attenuation(position.length());
    let balance = if auto_balance { base_volume } else { 1.0 };
    let raw = attenuation * manual_volume * balance;
    let volume = if raw.is_nan() {
        VOLUME_FLOOR
    } else {
        raw.clamp(VOLUME_FLOOR, VOLUME_CEIL)
    };
    AudioParams {
        volume,
        pan: pan_for_x(position.x),
    }
}

/// Radially clamp `candidate` into the ring `[inner, outer]` around the listener.
///
/// Only the radius changes; the angle is kept. A zero-length (or non-finite)
/// candidate has no angle, so it lands on the inner boundary along +x.
/// The result always measures inside the ring, so clamping it again is a no-op.
pub fn clamp_to_annulus(candidate: Vec2, inner: f32, outer: f32) -> Vec2 {
    if !candidate.is_finite() || candidate == Vec2::ZERO {
        return Vec2::new(inner, 0.0);
    }
    let distance = candidate.length();
    if distance >= inner && distance <= outer {
        return candidate;
    }
    let target = if distance < inner { inner } else { outer };
    let scale = target / distance;
    let mut p = if scale.is_finite() && scale > 0.0 {
        candidate * scale
    } else {
        // length() under- or overflowed; atan2 still recovers the exact angle.
        Vec2::from_angle(candidate.y.atan2(candidate.x)) * target
    };
    // Scaling rounds, and can leave the result a few ulps outside the ring.
    for _ in 0..8 {
        let d = p.length();
        if d > outer {
            p *= 1.0 - 4.0 * f32::EPSILON;
        } else if d < inner {
            p *= 1.0 + 4.0 * f32::EPSILON;
        } else {
            break;
        }
    }
    p
}
