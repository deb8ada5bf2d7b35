//! Save/restore of source placement through a flat key -> string store.
//!
//! The blob is a JSON array with one entry per source, keyed by source name.
//! Restoring is all-or-nothing at the parse level: a blob that does not parse
//! leaves the mixer untouched. Within a parsed blob, unknown names and missing
//! fields are skipped.

use crate::attenuation::clamp_to_annulus;
use crate::error::{MixerError, Result};
use crate::mixer::Mixer;
use crate::source::clamp_manual_volume;
use fnv::FnvHashMap;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Flat string store (browser localStorage, or [`MemoryStore`] in tests).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&mut self, key: &str, value: String);
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FnvHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}

/// One source's persisted state. Every field but `name` may be absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourcePatch {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_volume: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_volume: Option<f32>,
    /// Catalog entry name, so saved blobs survive catalog reordering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
}

pub fn serialize(mixer: &Mixer) -> Result<String> {
    let patches: Vec<SourcePatch> = mixer
        .sources
        .iter()
        .map(|s| SourcePatch {
            name: s.name.clone(),
            x: Some(s.position.x),
            y: Some(s.position.y),
            manual_volume: Some(s.manual_volume),
            base_volume: Some(s.base_volume),
            sound: mixer.catalog.name(s.sound).map(str::to_string),
        })
        .collect();
    Ok(serde_json::to_string(&patches)?)
}

pub fn deserialize(blob: &str) -> Result<Vec<SourcePatch>> {
    Ok(serde_json::from_str(blob)?)
}

fn finite(v: Option<f32>) -> Option<f32> {
    v.filter(|v| v.is_finite())
}

impl Mixer {
    /// Apply parsed patches by source name. Returns how many sources changed.
    ///
    /// Values are forced back inside the usual invariants: volumes into their
    /// range and positions onto the ring. Non-finite numbers and unknown sound
    /// names are ignored.
    pub fn apply_patches(&mut self, patches: &[SourcePatch]) -> usize {
        let inner = self.config.inner_radius;
        let outer = self.config.outer_radius;
        let mut updated = 0;
        for patch in patches {
            let sound = patch
                .sound
                .as_deref()
                .and_then(|name| self.catalog.find_by_name(name));
            let Some(s) = self.source_by_name_mut(&patch.name) else {
                log::debug!("[persist] ignoring unknown source {:?}", patch.name);
                continue;
            };
            let x = finite(patch.x);
            let y = finite(patch.y);
            if x.is_some() || y.is_some() {
                let candidate = Vec2::new(x.unwrap_or(s.position.x), y.unwrap_or(s.position.y));
                s.position = clamp_to_annulus(candidate, inner, outer);
            }
            if let Some(v) = finite(patch.manual_volume) {
                s.manual_volume = clamp_manual_volume(v);
            }
            if let Some(v) = finite(patch.base_volume) {
                s.base_volume = clamp_manual_volume(v);
            }
            if let Some(sound) = sound {
                s.sound = sound;
            }
            updated += 1;
        }
        updated
    }
}

pub fn save(mixer: &Mixer, store: &mut dyn KeyValueStore) -> Result<()> {
    let blob = serialize(mixer)?;
    store.put(&mixer.config.storage_key, blob);
    log::info!("[persist] configuration saved");
    Ok(())
}

pub fn try_load(mixer: &mut Mixer, store: &dyn KeyValueStore) -> Result<usize> {
    let key = &mixer.config.storage_key;
    let blob = store
        .get(key)
        .ok_or_else(|| MixerError::MissingBlob(key.clone()))?;
    let patches = deserialize(&blob)?;
    Ok(mixer.apply_patches(&patches))
}

/// Restore from `store`, swallowing any failure. Returns whether anything was applied.
pub fn load(mixer: &mut Mixer, store: &dyn KeyValueStore) -> bool {
    match try_load(mixer, store) {
        Ok(n) => {
            log::info!("[persist] configuration loaded ({} sources)", n);
            n > 0
        }
        Err(e) => {
            log::info!("[persist] no saved configuration restored: {}", e);
            false
        }
    }
}
