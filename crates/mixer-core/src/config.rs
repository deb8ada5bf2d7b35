//! Runtime configuration for the mixer.
//!
//! Every field defaults to the matching constant in [`crate::constants`], so a
//! frontend only needs to override what differs (e.g. the selector layout).

use crate::constants::*;
use crate::layout::SelectorLayout;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MixerConfig {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub start_radius: f32,
    pub base_radius: f32,
    pub handle_hit_radius: f32,
    pub fade_out_sec: f64,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub selector_layout: SelectorLayout,
    pub storage_key: String,
}

impl Default for MixerConfig {
    fn default() -> Self {
        Self {
            inner_radius: INNER_RADIUS,
            outer_radius: OUTER_RADIUS,
            start_radius: START_RADIUS,
            base_radius: BASE_RADIUS,
            handle_hit_radius: HANDLE_HIT_RADIUS,
            fade_out_sec: SOUND_FADE_OUT_SEC,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            selector_layout: SelectorLayout::Corners,
            storage_key: STORAGE_KEY.to_string(),
        }
    }
}

impl MixerConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
