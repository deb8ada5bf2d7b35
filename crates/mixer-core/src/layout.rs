//! Screen layout and hit regions for the global controls.
//!
//! Two coordinate spaces are in play: raw screen pixels (origin top-left) for
//! screen-anchored controls, and listener space (origin at the canvas centre)
//! for everything placed on the ring.

use crate::constants::{
    BALANCE_BUTTON_HEIGHT, BALANCE_BUTTON_MARGIN, BALANCE_BUTTON_WIDTH, SELECTOR_HEIGHT,
    SELECTOR_WIDTH, SLOT_ANGLES,
};
use crate::source::SourceId;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, edges inclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// Pointer position in both spaces the resolver needs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    pub screen: Vec2,
    pub local: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Build a pointer from raw screen pixels.
    #[inline]
    pub fn pointer(&self, screen: Vec2) -> Pointer {
        Pointer {
            screen,
            local: screen - self.center(),
        }
    }

    /// Auto-balance toggle, anchored to the bottom-right corner.
    pub fn balance_button(&self) -> Rect {
        Rect::new(
            self.width - BALANCE_BUTTON_WIDTH - BALANCE_BUTTON_MARGIN,
            self.height - BALANCE_BUTTON_HEIGHT - BALANCE_BUTTON_MARGIN,
            BALANCE_BUTTON_WIDTH,
            BALANCE_BUTTON_HEIGHT,
        )
    }
}

/// Where the per-source sound selectors live.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectorLayout {
    /// Screen-anchored boxes in the four canvas corners.
    #[default]
    Corners,
    /// Boxes centred on a ring at each slot's angle, rotated to lie tangent to it.
    Ring { radius: f32 },
}

/// A selector region resolved for one slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SelectorRegion {
    /// Axis-aligned box in screen space.
    Screen(Rect),
    /// Box of `size` centred at `center` (listener space) rotated by `rotation` radians.
    Rotated {
        center: Vec2,
        size: Vec2,
        rotation: f32,
    },
}

impl SelectorRegion {
    pub fn contains(&self, pointer: &Pointer) -> bool {
        match *self {
            SelectorRegion::Screen(rect) => rect.contains(pointer.screen),
            SelectorRegion::Rotated {
                center,
                size,
                rotation,
            } => {
                // Undo the box rotation so the test becomes axis-aligned.
                let local = Vec2::from_angle(-rotation).rotate(pointer.local - center);
                local.x.abs() <= size.x / 2.0 && local.y.abs() <= size.y / 2.0
            }
        }
    }
}

impl SelectorLayout {
    pub fn region(&self, slot: SourceId, viewport: &Viewport) -> Option<SelectorRegion> {
        match *self {
            SelectorLayout::Corners => {
                let right = viewport.width - SELECTOR_WIDTH;
                let bottom = viewport.height - SELECTOR_HEIGHT;
                let (x, y) = match slot.0 {
                    0 => (0.0, 0.0),
                    1 => (right, 0.0),
                    2 => (0.0, bottom),
                    3 => (right, bottom),
                    _ => return None,
                };
                Some(SelectorRegion::Screen(Rect::new(
                    x,
                    y,
                    SELECTOR_WIDTH,
                    SELECTOR_HEIGHT,
                )))
            }
            SelectorLayout::Ring { radius } => {
                let angle = *SLOT_ANGLES.get(slot.0)?;
                Some(SelectorRegion::Rotated {
                    center: Vec2::from_angle(angle) * radius,
                    size: Vec2::new(SELECTOR_WIDTH, SELECTOR_HEIGHT),
                    rotation: angle + std::f32::consts::FRAC_PI_2,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges_are_inclusive() {
        let r = Rect::new(10.0, 10.0, 20.0, 5.0);
        assert!(r.contains(Vec2::new(10.0, 10.0)));
        assert!(r.contains(Vec2::new(30.0, 15.0)));
        assert!(!r.contains(Vec2::new(30.1, 15.0)));
    }

    #[test]
    fn pointer_is_centred() {
        let vp = Viewport::new(1200.0, 800.0);
        let p = vp.pointer(Vec2::new(600.0, 400.0));
        assert_eq!(p.local, Vec2::ZERO);
    }
}
