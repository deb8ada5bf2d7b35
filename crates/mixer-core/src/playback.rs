use crate::catalog::SoundId;

/// The audio backend as seen from the mixer: one looping handle per catalog entry.
///
/// Implementations should treat calls for an unknown or unloaded sound as no-ops;
/// the mixer also checks [`Playback::is_ready`] before every write.
pub trait Playback {
    fn start_looping(&mut self, sound: SoundId);
    /// Set gain, optionally ramping linearly over `ramp_sec` seconds.
    fn set_volume(&mut self, sound: SoundId, level: f32, ramp_sec: f64);
    fn set_pan(&mut self, sound: SoundId, pan: f32);
    fn is_looping(&self, sound: SoundId) -> bool;
    fn is_ready(&self, sound: SoundId) -> bool;
}
