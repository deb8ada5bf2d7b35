// Host-side tests for selector regions and screen-anchored controls.

use glam::Vec2;
use mixer_core::{
    Rect, SelectorLayout, SelectorRegion, SourceId, Viewport, RING_SELECTOR_RADIUS, SLOT_ANGLES,
};

#[test]
fn corner_selectors_occupy_the_four_corners() {
    let vp = Viewport::new(1200.0, 800.0);
    let rects: Vec<Rect> = (0..4)
        .map(|i| match SelectorLayout::Corners.region(SourceId(i), &vp) {
            Some(SelectorRegion::Screen(r)) => r,
            other => panic!("slot {i}: unexpected region {other:?}"),
        })
        .collect();
    assert_eq!(rects[0], Rect::new(0.0, 0.0, 200.0, 40.0));
    assert_eq!(rects[1], Rect::new(1000.0, 0.0, 200.0, 40.0));
    assert_eq!(rects[2], Rect::new(0.0, 760.0, 200.0, 40.0));
    assert_eq!(rects[3], Rect::new(1000.0, 760.0, 200.0, 40.0));
}

#[test]
fn no_region_for_slots_past_the_fourth() {
    let vp = Viewport::new(1200.0, 800.0);
    assert!(SelectorLayout::Corners.region(SourceId(4), &vp).is_none());
    let ring = SelectorLayout::Ring {
        radius: RING_SELECTOR_RADIUS,
    };
    assert!(ring.region(SourceId(4), &vp).is_none());
}

#[test]
fn ring_selectors_sit_at_slot_angles_tangent_to_the_ring() {
    let vp = Viewport::new(1200.0, 800.0);
    let ring = SelectorLayout::Ring { radius: 460.0 };
    for (i, angle) in SLOT_ANGLES.iter().enumerate() {
        let Some(SelectorRegion::Rotated {
            center,
            size,
            rotation,
        }) = ring.region(SourceId(i), &vp)
        else {
            panic!("slot {i} should be rotated");
        };
        assert!((center.length() - 460.0).abs() < 1e-3);
        assert!(center.angle_between(Vec2::from_angle(*angle)).abs() < 1e-4);
        assert_eq!(size, Vec2::new(200.0, 40.0));
        // Long axis runs perpendicular to the radius.
        assert!(Vec2::from_angle(rotation).dot(center.normalize()).abs() < 1e-4);
    }
}

#[test]
fn ring_selectors_ignore_viewport_size() {
    let ring = SelectorLayout::Ring { radius: 460.0 };
    let a = ring.region(SourceId(2), &Viewport::new(1200.0, 800.0));
    let b = ring.region(SourceId(2), &Viewport::new(640.0, 480.0));
    assert_eq!(a, b);
}

#[test]
fn balance_button_tracks_bottom_right_corner() {
    let small = Viewport::new(800.0, 600.0).balance_button();
    assert_eq!(small, Rect::new(600.0, 550.0, 180.0, 30.0));
    let big = Viewport::new(1920.0, 1080.0).balance_button();
    assert_eq!(big, Rect::new(1720.0, 1030.0, 180.0, 30.0));
    assert!(big.contains(big.center()));
}

#[test]
fn selector_layout_parses_from_camel_case_json() {
    let corners: SelectorLayout = serde_json::from_str(r#""corners""#).unwrap();
    assert_eq!(corners, SelectorLayout::Corners);
    let ring: SelectorLayout = serde_json::from_str(r#"{"ring":{"radius":500.0}}"#).unwrap();
    assert_eq!(ring, SelectorLayout::Ring { radius: 500.0 });
}
