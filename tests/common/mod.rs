// Shared fakes for host-side tests.

#![allow(dead_code)]

use mixer_core::{Playback, SoundId};
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Start(SoundId),
    Volume(SoundId, f32, f64),
    Pan(SoundId, f32),
}

/// Records every call; sounds listed in `unready` report not ready.
#[derive(Default)]
pub struct FakePlayback {
    pub calls: Vec<Call>,
    pub looping: HashSet<SoundId>,
    pub unready: HashSet<SoundId>,
}

impl FakePlayback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_volume(&self, sound: SoundId) -> Option<f32> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::Volume(s, v, _) if *s == sound => Some(*v),
            _ => None,
        })
    }

    pub fn last_pan(&self, sound: SoundId) -> Option<f32> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::Pan(s, p) if *s == sound => Some(*p),
            _ => None,
        })
    }

    pub fn touched(&self, sound: SoundId) -> bool {
        self.calls.iter().any(|c| match c {
            Call::Start(s) | Call::Volume(s, _, _) | Call::Pan(s, _) => *s == sound,
        })
    }
}

impl Playback for FakePlayback {
    fn start_looping(&mut self, sound: SoundId) {
        self.looping.insert(sound);
        self.calls.push(Call::Start(sound));
    }

    fn set_volume(&mut self, sound: SoundId, level: f32, ramp_sec: f64) {
        self.calls.push(Call::Volume(sound, level, ramp_sec));
    }

    fn set_pan(&mut self, sound: SoundId, pan: f32) {
        self.calls.push(Call::Pan(sound, pan));
    }

    fn is_looping(&self, sound: SoundId) -> bool {
        self.looping.contains(&sound)
    }

    fn is_ready(&self, sound: SoundId) -> bool {
        !self.unready.contains(&sound)
    }
}

pub fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}
