//! Ordered catalog of named sound clips.
//!
//! Order is significant: "next sound" is the next index, wrapping at the end.

use crate::error::{MixerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of an entry in the [`SoundCatalog`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SoundId(pub usize);

impl fmt::Display for SoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub asset_path: String,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, asset_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            asset_path: asset_path.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SoundCatalog {
    entries: Vec<CatalogEntry>,
}

const REFERENCE_CLIPS: &[(&str, &str)] = &[
    ("Ripples", "assets/sazanami.mp3"),
    ("Tsukutsuku-boshi", "assets/tsukutsukuboushi.mp3"),
    ("Higurashi", "assets/higurashi.mp3"),
    ("Rain", "assets/rain.mp3"),
    ("River 1", "assets/river1.mp3"),
    ("River 2", "assets/river2.mp3"),
    ("Birdsong", "assets/birds.mp3"),
    ("Campfire", "assets/fire.mp3"),
    ("River 3", "assets/river3.mp3"),
    ("River 4", "assets/river4.mp3"),
];

impl Default for SoundCatalog {
    fn default() -> Self {
        Self::new(
            REFERENCE_CLIPS
                .iter()
                .map(|(name, path)| CatalogEntry::new(*name, *path))
                .collect(),
        )
    }
}

impl SoundCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: SoundId) -> bool {
        id.0 < self.entries.len()
    }

    pub fn get(&self, id: SoundId) -> Option<&CatalogEntry> {
        self.entries.get(id.0)
    }

    pub fn entry(&self, id: SoundId) -> Result<&CatalogEntry> {
        self.get(id).ok_or(MixerError::UnknownSound(id.0))
    }

    pub fn name(&self, id: SoundId) -> Option<&str> {
        self.get(id).map(|e| e.name.as_str())
    }

    pub fn find_by_name(&self, name: &str) -> Option<SoundId> {
        self.entries.iter().position(|e| e.name == name).map(SoundId)
    }

    /// The entry after `id`, wrapping to the first. An id outside the catalog
    /// restarts at the first entry.
    pub fn next(&self, id: SoundId) -> SoundId {
        if self.entries.is_empty() {
            return id;
        }
        if !self.contains(id) {
            return SoundId(0);
        }
        SoundId((id.0 + 1) % self.entries.len())
    }

    /// Round-robin initial assignment for slot `slot`.
    pub fn round_robin(&self, slot: usize) -> SoundId {
        if self.entries.is_empty() {
            SoundId(0)
        } else {
            SoundId(slot % self.entries.len())
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SoundId, &CatalogEntry)> {
        self.entries.iter().enumerate().map(|(i, e)| (SoundId(i), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_catalog_has_ten_clips() {
        let catalog = SoundCatalog::default();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.name(SoundId(0)), Some("Ripples"));
        assert_eq!(catalog.find_by_name("Campfire"), Some(SoundId(7)));
    }

    #[test]
    fn next_wraps_and_recovers_from_stale_ids() {
        let catalog = SoundCatalog::default();
        assert_eq!(catalog.next(SoundId(9)), SoundId(0));
        assert_eq!(catalog.next(SoundId(42)), SoundId(0));
        assert!(matches!(
            catalog.entry(SoundId(42)),
            Err(MixerError::UnknownSound(42))
        ));
    }
}
