use crate::attenuation::{clamp_to_annulus, compute_audio_params, AudioParams};
use crate::catalog::{SoundCatalog, SoundId};
use crate::config::MixerConfig;
use crate::constants::{
    DEFAULT_MANUAL_VOLUME, DEFAULT_SOURCE_COLORS, MAX_MANUAL_VOLUME, MIN_MANUAL_VOLUME,
    RADIUS_VOLUME_OFFSET, SLOT_ANGLES,
};
use glam::Vec2;
use smallvec::SmallVec;
use std::fmt;

/// Stable identity of a source; doubles as its UI slot index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceId(pub usize);

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionState {
    #[default]
    Idle,
    DraggingPosition,
    DraggingVolume,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Source {
    pub id: SourceId,
    pub name: String,
    pub position: Vec2,
    pub manual_volume: f32,
    pub base_volume: f32,
    pub sound: SoundId,
    pub color_rgb: [u8; 3],
    pub interaction: InteractionState,
}

pub type Sources = SmallVec<[Source; 4]>;

#[inline]
pub fn clamp_manual_volume(v: f32) -> f32 {
    v.clamp(MIN_MANUAL_VOLUME, MAX_MANUAL_VOLUME)
}

impl Source {
    pub fn new(id: SourceId, name: impl Into<String>, position: Vec2, sound: SoundId) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            manual_volume: DEFAULT_MANUAL_VOLUME,
            base_volume: DEFAULT_MANUAL_VOLUME,
            sound,
            color_rgb: DEFAULT_SOURCE_COLORS[id.0 % DEFAULT_SOURCE_COLORS.len()],
            interaction: InteractionState::Idle,
        }
    }

    /// Drawn (and picked) radius; grows with manual volume.
    #[inline]
    pub fn current_radius(&self, base_radius: f32) -> f32 {
        base_radius * (RADIUS_VOLUME_OFFSET + self.manual_volume)
    }

    /// Resize handle sits on the right-hand edge of the body.
    #[inline]
    pub fn handle_point(&self, base_radius: f32) -> Vec2 {
        self.position + Vec2::new(self.current_radius(base_radius), 0.0)
    }

    #[inline]
    pub fn hits_handle(&self, pointer: Vec2, base_radius: f32, hit_radius: f32) -> bool {
        pointer.distance(self.handle_point(base_radius)) < hit_radius
    }

    #[inline]
    pub fn hits_body(&self, pointer: Vec2, base_radius: f32) -> bool {
        pointer.distance(self.position) < self.current_radius(base_radius)
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.interaction != InteractionState::Idle
    }

    pub fn audio_params(&self, auto_balance: bool) -> AudioParams {
        compute_audio_params(
            self.position,
            self.manual_volume,
            self.base_volume,
            auto_balance,
        )
    }

    /// Move toward `pointer`, constrained to the ring.
    pub fn move_to(&mut self, pointer: Vec2, inner: f32, outer: f32) {
        self.position = clamp_to_annulus(pointer, inner, outer);
    }

    /// Resize so the body edge follows `pointer`. Returns the new manual volume.
    pub fn resize_toward(&mut self, pointer: Vec2, base_radius: f32) -> f32 {
        let reach = pointer.distance(self.position) / base_radius;
        self.manual_volume = clamp_manual_volume(reach - RADIUS_VOLUME_OFFSET);
        self.manual_volume
    }
}

/// The four sources at their fixed starting slots with round-robin sounds.
pub fn default_sources(config: &MixerConfig, catalog: &SoundCatalog) -> Sources {
    SLOT_ANGLES
        .iter()
        .enumerate()
        .map(|(i, angle)| {
            let position = Vec2::from_angle(*angle) * config.start_radius;
            Source::new(
                SourceId(i),
                format!("Source {}", i + 1),
                position,
                catalog.round_robin(i),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BASE_RADIUS;

    #[test]
    fn default_sources_occupy_the_four_corners() {
        let sources = default_sources(&MixerConfig::default(), &SoundCatalog::default());
        assert_eq!(sources.len(), 4);
        let signs: Vec<(bool, bool)> = sources
            .iter()
            .map(|s| (s.position.x < 0.0, s.position.y < 0.0))
            .collect();
        assert_eq!(
            signs,
            vec![(true, true), (false, true), (true, false), (false, false)]
        );
        for (i, s) in sources.iter().enumerate() {
            assert!((s.position.length() - 300.0).abs() < 1e-3);
            assert_eq!(s.sound, SoundId(i));
        }
    }

    #[test]
    fn radius_tracks_manual_volume() {
        let mut s = Source::new(SourceId(0), "a", Vec2::new(200.0, 0.0), SoundId(0));
        assert_eq!(s.current_radius(BASE_RADIUS), 45.0);
        s.manual_volume = 2.0;
        assert_eq!(s.current_radius(BASE_RADIUS), 75.0);
        assert_eq!(s.handle_point(BASE_RADIUS), Vec2::new(275.0, 0.0));
    }
}
