//! Pointer press/drag/release resolution.
//!
//! A press can land on several overlapping regions at once (a selector over a
//! source body, a resize handle on top of its own body, two overlapping
//! sources). [`classify_press`] picks exactly one target using a fixed
//! priority; [`press`] applies it. Which source owns the pointer is carried
//! in an explicit [`Session`] value rather than ambient state.

use crate::layout::Pointer;
use crate::mixer::Mixer;
use crate::playback::Playback;
use crate::source::{InteractionState, SourceId};

/// Which source (if any) owns the pointer, and what it is doing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Idle,
    Moving(SourceId),
    Resizing(SourceId),
}

impl Session {
    pub fn source(&self) -> Option<SourceId> {
        match *self {
            Session::Idle => None,
            Session::Moving(id) | Session::Resizing(id) => Some(id),
        }
    }

    pub fn is_idle(&self) -> bool {
        *self == Session::Idle
    }
}

/// Outcome of hit-testing one press, highest priority first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressTarget {
    AutoBalanceToggle,
    Selector(SourceId),
    Handle(SourceId),
    Body(SourceId),
    Nothing,
}

pub fn classify_press(mixer: &Mixer, pointer: &Pointer) -> PressTarget {
    if mixer.viewport.balance_button().contains(pointer.screen) {
        return PressTarget::AutoBalanceToggle;
    }

    // Selectors: ascending id, first match wins.
    for s in &mixer.sources {
        if let Some(region) = mixer.selector_region(s.id) {
            if region.contains(pointer) {
                return PressTarget::Selector(s.id);
            }
        }
    }

    let base_radius = mixer.config.base_radius;
    let hit_radius = mixer.config.handle_hit_radius;

    // Handles before bodies; reverse id so the last-drawn source wins ties.
    if let Some(s) = mixer
        .sources
        .iter()
        .rev()
        .find(|s| s.hits_handle(pointer.local, base_radius, hit_radius))
    {
        return PressTarget::Handle(s.id);
    }
    if let Some(s) = mixer
        .sources
        .iter()
        .rev()
        .find(|s| s.hits_body(pointer.local, base_radius))
    {
        return PressTarget::Body(s.id);
    }

    PressTarget::Nothing
}

/// Resolve and apply a pointer press.
///
/// Any drag still held in `session` is released first so at most one source is
/// ever non-idle.
pub fn press(
    mixer: &mut Mixer,
    session: &mut Session,
    pointer: &Pointer,
    playback: &mut dyn Playback,
) -> PressTarget {
    release(mixer, session);

    let target = classify_press(mixer, pointer);
    match target {
        PressTarget::AutoBalanceToggle => {
            mixer.toggle_auto_balance();
        }
        PressTarget::Selector(id) => {
            mixer.cycle_sound(id, playback);
        }
        PressTarget::Handle(id) => {
            if let Some(s) = mixer.source_mut(id) {
                s.interaction = InteractionState::DraggingVolume;
                *session = Session::Resizing(id);
                log::debug!("[pointer] resize source {}", id);
            }
        }
        PressTarget::Body(id) => {
            if let Some(s) = mixer.source_mut(id) {
                s.interaction = InteractionState::DraggingPosition;
                *session = Session::Moving(id);
                log::debug!("[pointer] move source {}", id);
            }
        }
        PressTarget::Nothing => {}
    }
    target
}

/// Apply a pointer move to the source owning the session. No-op when idle.
pub fn drag(mixer: &mut Mixer, session: &Session, pointer: &Pointer) {
    let auto_balance = mixer.auto_balance();
    let base_radius = mixer.config.base_radius;
    let inner = mixer.config.inner_radius;
    let outer = mixer.config.outer_radius;

    match *session {
        Session::Idle => {}
        Session::Resizing(id) => {
            if let Some(s) = mixer.source_mut(id) {
                let v = s.resize_toward(pointer.local, base_radius);
                if !auto_balance {
                    s.base_volume = v;
                }
            }
        }
        Session::Moving(id) => {
            if let Some(s) = mixer.source_mut(id) {
                s.move_to(pointer.local, inner, outer);
            }
        }
    }
}

/// End the current drag (pointer up, leave, or cancel). Idempotent.
pub fn release(mixer: &mut Mixer, session: &mut Session) {
    if let Some(id) = session.source() {
        log::debug!("[pointer] release source {}", id);
    }
    for s in &mut mixer.sources {
        s.interaction = InteractionState::Idle;
    }
    *session = Session::Idle;
}
