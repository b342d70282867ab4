//! The editing session: pristine source, current adjustments, history.
//!
//! [`EditSession`] wires the pieces together the way an editor front end
//! needs them: selecting a preset rebuilds the adjustment state from
//! defaults plus the preset's overrides and renders with its stylistic
//! transform; dragging a slider updates one value and re-renders the numeric
//! pipeline only. Both paths always render from the *pristine* source — the
//! session never feeds a rendered image back into the pipeline, so repeated
//! edits are idempotent and rounding error cannot compound.
//!
//! Every successful render is pushed into the [`EditHistory`]: preset
//! renders are labeled with the preset name, slider renders carry an empty
//! label.
//!
//! Renders are memoized. The cache key is a SHA-256 over the stylistic
//! transform name and the full adjustment state; the source image is fixed
//! for the life of a session (the cache is dropped on
//! [`load`](EditSession::load)), so the key is complete. A hit returns the
//! stored pixels and performs zero operator calls — observable behavior is
//! identical either way.
//!
//! A session is single-owner. Share it across threads behind a mutex;
//! nothing here locks internally.

use crate::catalog::AdjustmentKind;
use crate::history::{EditHistory, HistoryEntry};
use crate::imaging::ImageOpBackend;
use crate::photo::Photo;
use crate::pipeline;
use crate::presets::FilterPreset;
use crate::state::AdjustmentState;
use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// Renders kept before the cache is flushed wholesale.
const CACHE_CAPACITY: usize = 32;

type CacheKey = [u8; 32];

#[derive(Debug, Default)]
struct RenderCache {
    entries: HashMap<CacheKey, Photo>,
}

impl RenderCache {
    fn get(&self, key: &CacheKey) -> Option<&Photo> {
        self.entries.get(key)
    }

    fn insert(&mut self, key: CacheKey, photo: Photo) {
        if self.entries.len() >= CACHE_CAPACITY {
            self.entries.clear();
        }
        self.entries.insert(key, photo);
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

fn cache_key(style_transform: Option<&str>, state: &AdjustmentState) -> CacheKey {
    let mut hasher = Sha256::new();
    hasher.update(style_transform.unwrap_or("").as_bytes());
    hasher.update([0u8]);
    for (_, value) in state.iter() {
        hasher.update(value.to_le_bytes());
    }
    hasher.finalize().into()
}

/// One image being edited: source, adjustments, undo/redo timeline.
pub struct EditSession {
    original: Photo,
    state: AdjustmentState,
    history: EditHistory,
    cache: RenderCache,
}

impl EditSession {
    /// Start a session on `photo`. The history opens with the untouched
    /// source as its single entry.
    pub fn new(photo: Photo) -> Self {
        Self {
            history: EditHistory::new(photo.clone()),
            original: photo,
            state: AdjustmentState::defaults(),
            cache: RenderCache::default(),
        }
    }

    /// Replace the source image: adjustments return to defaults, the
    /// history resets, memoized renders are dropped.
    pub fn load(&mut self, photo: Photo) {
        self.history.reset(photo.clone());
        self.original = photo;
        self.state = AdjustmentState::defaults();
        self.cache.clear();
    }

    /// The pristine source every render starts from.
    pub fn original(&self) -> &Photo {
        &self.original
    }

    /// The current adjustment values.
    pub fn state(&self) -> &AdjustmentState {
        &self.state
    }

    /// Apply a preset: state becomes defaults + overrides, the full
    /// pipeline (including the preset's stylistic transform) renders from
    /// the pristine source, and the result lands in history labeled with
    /// the preset name.
    pub fn apply_preset(
        &mut self,
        backend: &impl ImageOpBackend,
        preset: &FilterPreset,
    ) -> &HistoryEntry {
        self.state = preset.state();
        let rendered = self.render_cached(backend, Some(preset));
        self.history.add(rendered, preset.name.clone());
        self.history.current()
    }

    /// Apply a single slider edit: one state field changes (clamped), the
    /// numeric pipeline re-renders from the pristine source, and the result
    /// lands in history with an empty label. Stylistic transforms belong to
    /// preset application and are not re-run here.
    pub fn set_adjustment(
        &mut self,
        backend: &impl ImageOpBackend,
        kind: AdjustmentKind,
        value: f32,
    ) -> &HistoryEntry {
        self.state.set(kind, value);
        let rendered = self.render_cached(backend, None);
        self.history.add(rendered, "");
        self.history.current()
    }

    pub fn undo(&mut self) -> Option<&HistoryEntry> {
        self.history.undo()
    }

    pub fn redo(&mut self) -> Option<&HistoryEntry> {
        self.history.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// The image currently shown: the history entry under the cursor.
    pub fn current(&self) -> &HistoryEntry {
        self.history.current()
    }

    fn render_cached(&mut self, backend: &impl ImageOpBackend, preset: Option<&FilterPreset>) -> Photo {
        let style = preset.and_then(|p| p.style_transform.as_deref());
        let key = cache_key(style, &self.state);
        if let Some(hit) = self.cache.get(&key) {
            return hit.clone();
        }
        let rendered = pipeline::render(backend, &self.original, preset, &self.state);
        self.cache.insert(key, rendered.clone());
        rendered
    }
}
