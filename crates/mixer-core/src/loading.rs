use crate::catalog::SoundId;
use instant::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ClipState {
    Pending,
    Loaded,
    Failed,
}

/// Tracks per-clip load completions and gates the "ready" transition.
///
/// A failed clip counts as settled: it never blocks the others, it just stays
/// unplayable for the rest of the session.
#[derive(Debug)]
pub struct LoadTracker {
    clips: Vec<ClipState>,
    started_at: Instant,
    announced: bool,
}

impl LoadTracker {
    pub fn new(total: usize) -> Self {
        Self {
            clips: vec![ClipState::Pending; total],
            started_at: Instant::now(),
            announced: false,
        }
    }

    pub fn total(&self) -> usize {
        self.clips.len()
    }

    pub fn loaded(&self) -> usize {
        self.count(ClipState::Loaded)
    }

    /// (settled, total), where settled counts both loaded and failed clips.
    pub fn progress(&self) -> (usize, usize) {
        let settled = self.total() - self.count(ClipState::Pending);
        (settled, self.total())
    }

    pub fn mark_loaded(&mut self, id: SoundId) {
        self.settle(id, ClipState::Loaded);
    }

    pub fn mark_failed(&mut self, id: SoundId) {
        log::warn!("[assets] sound {} failed to load; it will stay silent", id);
        self.settle(id, ClipState::Failed);
    }

    pub fn is_ready(&self) -> bool {
        self.clips.iter().all(|c| *c != ClipState::Pending)
    }

    pub fn is_playable(&self, id: SoundId) -> bool {
        self.clips.get(id.0) == Some(&ClipState::Loaded)
    }

    pub fn failed(&self) -> Vec<SoundId> {
        self.clips
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == ClipState::Failed)
            .map(|(i, _)| SoundId(i))
            .collect()
    }

    fn count(&self, state: ClipState) -> usize {
        self.clips.iter().filter(|c| **c == state).count()
    }

    fn settle(&mut self, id: SoundId, state: ClipState) {
        let Some(slot) = self.clips.get_mut(id.0) else {
            return;
        };
        // First report wins; a late duplicate callback cannot flip a clip.
        if *slot != ClipState::Pending {
            return;
        }
        *slot = state;
        if self.is_ready() && !self.announced {
            self.announced = true;
            log::info!(
                "[assets] {}/{} sounds ready in {:.2}s",
                self.loaded(),
                self.total(),
                self.started_at.elapsed().as_secs_f32()
            );
        }
    }
}
