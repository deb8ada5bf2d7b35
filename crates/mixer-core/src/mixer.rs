use crate::attenuation::AudioParams;
use crate::catalog::{SoundCatalog, SoundId};
use crate::config::MixerConfig;
use crate::error::Result;
use crate::layout::{SelectorRegion, Viewport};
use crate::playback::Playback;
use crate::source::{default_sources, Source, SourceId, Sources};
use smallvec::SmallVec;

/// Owns every source plus the global mix state.
///
/// All mutation happens on the single event/tick thread, so there is no locking;
/// the web frontend keeps this behind an `Rc<RefCell<_>>`.
pub struct Mixer {
    pub config: MixerConfig,
    pub catalog: SoundCatalog,
    pub sources: Sources,
    pub viewport: Viewport,
    auto_balance: bool,
}

impl Mixer {
    pub fn new(config: MixerConfig, catalog: SoundCatalog) -> Self {
        let sources = default_sources(&config, &catalog);
        let viewport = Viewport::new(config.viewport_width, config.viewport_height);
        Self {
            config,
            catalog,
            sources,
            viewport,
            auto_balance: false,
        }
    }

    pub fn source(&self, id: SourceId) -> Option<&Source> {
        self.sources.iter().find(|s| s.id == id)
    }

    pub fn source_mut(&mut self, id: SourceId) -> Option<&mut Source> {
        self.sources.iter_mut().find(|s| s.id == id)
    }

    pub fn source_by_name_mut(&mut self, name: &str) -> Option<&mut Source> {
        self.sources.iter_mut().find(|s| s.name == name)
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }

    pub fn selector_region(&self, id: SourceId) -> Option<SelectorRegion> {
        self.config.selector_layout.region(id, &self.viewport)
    }

    // ---------------- Auto-balance ----------------

    pub fn auto_balance(&self) -> bool {
        self.auto_balance
    }

    /// Flip auto-balance and return the new state.
    pub fn toggle_auto_balance(&mut self) -> bool {
        self.set_auto_balance(!self.auto_balance);
        self.auto_balance
    }

    /// Turning auto-balance off snapshots every manual volume into the base
    /// volume in the same call, so the next tick already mixes the new values.
    pub fn set_auto_balance(&mut self, enabled: bool) {
        if self.auto_balance && !enabled {
            for s in &mut self.sources {
                s.base_volume = s.manual_volume;
            }
        }
        self.auto_balance = enabled;
        log::info!(
            "[mixer] auto-balance {}",
            if enabled { "on" } else { "off" }
        );
    }

    // ---------------- Audio ----------------

    pub fn audio_params(&self, id: SourceId) -> Option<AudioParams> {
        self.source(id).map(|s| s.audio_params(self.auto_balance))
    }

    pub fn all_audio_params(&self) -> SmallVec<[(SourceId, AudioParams); 4]> {
        self.sources
            .iter()
            .map(|s| (s.id, s.audio_params(self.auto_balance)))
            .collect()
    }

    /// Push every source's volume and pan to its sound, in id order.
    ///
    /// Two sources sharing a sound write to the same handle; the later source wins.
    pub fn tick(&self, playback: &mut dyn Playback) {
        for s in &self.sources {
            if !self.catalog.contains(s.sound) || !playback.is_ready(s.sound) {
                continue;
            }
            let params = s.audio_params(self.auto_balance);
            playback.set_volume(s.sound, params.volume, 0.0);
            playback.set_pan(s.sound, params.pan);
        }
    }

    /// Start every assigned sound looping at zero gain; the first tick brings them up.
    pub fn start_playback(&self, playback: &mut dyn Playback) {
        for s in &self.sources {
            if !self.catalog.contains(s.sound) || !playback.is_ready(s.sound) {
                continue;
            }
            if !playback.is_looping(s.sound) {
                playback.start_looping(s.sound);
            }
            playback.set_volume(s.sound, 0.0, 0.0);
        }
        log::info!("[mixer] playback started for {} sources", self.sources.len());
    }

    /// Advance a source to the next catalog entry, fading the old one out.
    ///
    /// Returns the newly assigned sound, or `None` for an unknown source.
    pub fn cycle_sound(&mut self, id: SourceId, playback: &mut dyn Playback) -> Option<SoundId> {
        let fade = self.config.fade_out_sec;
        let previous = self.source(id)?.sound;
        let next = self.catalog.next(previous);
        if self.catalog.contains(previous) && playback.is_ready(previous) {
            playback.set_volume(previous, 0.0, fade);
        }
        self.source_mut(id)?.sound = next;
        if self.catalog.contains(next) && playback.is_ready(next) && !playback.is_looping(next) {
            playback.start_looping(next);
        }
        log::info!(
            "[mixer] source {} sound {} -> {}",
            id,
            self.catalog.name(previous).unwrap_or("?"),
            self.catalog.name(next).unwrap_or("?")
        );
        Some(next)
    }

    /// Bring playback in line after sounds were reassigned in bulk (a restore).
    ///
    /// Sounds in `previous` that no source holds any more fade out; newly
    /// assigned sounds that are not yet looping start at zero gain.
    pub fn sync_assignments(&self, previous: &[SoundId], playback: &mut dyn Playback) {
        let fade = self.config.fade_out_sec;
        for &old in previous {
            let still_held = self.sources.iter().any(|s| s.sound == old);
            if !still_held && self.catalog.contains(old) && playback.is_ready(old) {
                playback.set_volume(old, 0.0, fade);
            }
        }
        for s in &self.sources {
            if self.catalog.contains(s.sound)
                && playback.is_ready(s.sound)
                && !playback.is_looping(s.sound)
            {
                playback.start_looping(s.sound);
                playback.set_volume(s.sound, 0.0, 0.0);
            }
        }
    }

    pub fn assigned_sounds(&self) -> SmallVec<[SoundId; 4]> {
        self.sources.iter().map(|s| s.sound).collect()
    }

    /// Assign a specific catalog entry to a source without fading.
    pub fn assign_sound(&mut self, id: SourceId, sound: SoundId) -> Result<()> {
        self.catalog.entry(sound)?;
        if let Some(s) = self.source_mut(id) {
            s.sound = sound;
        }
        Ok(())
    }

    /// Source currently holding the pointer, if any.
    pub fn active_source(&self) -> Option<&Source> {
        self.sources.iter().find(|s| s.is_active())
    }
}

impl Default for Mixer {
    fn default() -> Self {
        Self::new(MixerConfig::default(), SoundCatalog::default())
    }
}
