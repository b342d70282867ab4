//! Linear edit history with undo/redo.
//!
//! [`EditHistory`] stores rendered snapshots paired with a label (the preset
//! name, or empty for slider edits) and a cursor into them. The timeline is
//! strictly linear: adding an entry while the cursor sits before the end
//! discards the entire redo tail first. There is no branching and no merge.
//!
//! Invariants, held from construction onward:
//! - the entry list is never empty;
//! - `cursor` always indexes a valid entry;
//! - only [`add`](EditHistory::add) grows or shrinks the list.
//!
//! Disabled `undo`/`redo` is a documented no-op returning `None` — not an
//! error, and distinguishable from a successful `Some(entry)` return.

use crate::photo::Photo;

/// One point in the timeline: a rendered image plus its label.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub image: Photo,
    pub label: String,
}

/// Bounded-from-below undo/redo log. Construct with the source image so the
/// cursor is valid from the first instant.
#[derive(Debug, Clone)]
pub struct EditHistory {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl EditHistory {
    /// A fresh history whose single entry is `image` with an empty label.
    pub fn new(image: Photo) -> Self {
        Self {
            entries: vec![HistoryEntry {
                image,
                label: String::new(),
            }],
            cursor: 0,
        }
    }

    /// Reinitialize to a single entry. Used when a new source image loads.
    pub fn reset(&mut self, image: Photo) {
        *self = Self::new(image);
    }

    /// Append a snapshot and move the cursor to it. If the cursor was not at
    /// the end, the redo tail is discarded first — the timeline stays linear.
    pub fn add(&mut self, image: Photo, label: impl Into<String>) {
        if self.cursor < self.entries.len() - 1 {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(HistoryEntry {
            image,
            label: label.into(),
        });
        self.cursor = self.entries.len() - 1;
    }

    /// Step back one entry. `None` when already at the oldest entry.
    pub fn undo(&mut self) -> Option<&HistoryEntry> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step forward one entry. `None` when already at the newest entry.
    pub fn redo(&mut self) -> Option<&HistoryEntry> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.entries.len() - 1
    }

    /// The entry the cursor points at. Total — the list is never empty.
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.cursor]
    }

    /// Number of entries currently in the timeline.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    /// Distinct single-pixel photos so entries are distinguishable.
    fn photo(tag: u8) -> Photo {
        Photo::from_rgb8(RgbImage::from_pixel(1, 1, Rgb([tag, tag, tag])))
    }

    fn history_with(labels: &[&str]) -> EditHistory {
        let mut history = EditHistory::new(photo(0));
        for (i, label) in labels.iter().enumerate() {
            history.add(photo(i as u8 + 1), *label);
        }
        history
    }

    #[test]
    fn fresh_history_has_one_unlabeled_entry() {
        let history = EditHistory::new(photo(7));
        assert_eq!(history.len(), 1);
        assert_eq!(history.current().label, "");
        assert_eq!(history.current().image, photo(7));
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn add_moves_cursor_to_newest() {
        let history = history_with(&["a", "b"]);
        assert_eq!(history.len(), 3);
        assert_eq!(history.current().label, "b");
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_walks_back_and_returns_the_new_current() {
        let mut history = history_with(&["a", "b"]);
        let entry = history.undo().unwrap();
        assert_eq!(entry.label, "a");
        assert_eq!(history.current().label, "a");
        assert!(history.can_redo());
    }

    #[test]
    fn undo_at_oldest_is_a_noop_signal() {
        let mut history = EditHistory::new(photo(0));
        assert!(history.undo().is_none());
        assert_eq!(history.current().image, photo(0));
    }

    #[test]
    fn redo_at_newest_is_a_noop_signal() {
        let mut history = history_with(&["a"]);
        assert!(history.redo().is_none());
        assert_eq!(history.current().label, "a");
    }

    #[test]
    fn add_after_undo_truncates_redo_tail() {
        // entries [A,B,C,D], cursor at D
        let mut history = history_with(&["b", "c", "d"]);
        assert_eq!(history.len(), 4);

        history.undo();
        history.undo();
        assert_eq!(history.current().label, "b");

        history.add(photo(9), "e");
        assert_eq!(history.len(), 3);
        assert_eq!(history.current().label, "e");
        // c and d are unreachable now
        assert!(history.redo().is_none());
    }

    #[test]
    fn undo_then_redo_round_trips() {
        let mut history = history_with(&["a", "b", "c", "d"]);
        let before = history.current().clone();

        for _ in 0..3 {
            history.undo();
        }
        for _ in 0..3 {
            history.redo();
        }

        assert_eq!(*history.current(), before);
        assert!(!history.can_redo());
    }

    #[test]
    fn redo_returns_entries_in_forward_order() {
        let mut history = history_with(&["a", "b"]);
        history.undo();
        history.undo();

        assert_eq!(history.redo().unwrap().label, "a");
        assert_eq!(history.redo().unwrap().label, "b");
        assert!(history.redo().is_none());
    }

    #[test]
    fn reset_clears_everything_including_redo_tail() {
        let mut history = history_with(&["a", "b", "c"]);
        history.undo();

        history.reset(photo(42));
        assert_eq!(history.len(), 1);
        assert_eq!(history.current().image, photo(42));
        assert_eq!(history.current().label, "");
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn interleaved_adds_and_undos_keep_cursor_valid() {
        let mut history = EditHistory::new(photo(0));
        history.add(photo(1), "a");
        history.undo();
        history.add(photo(2), "b");
        history.add(photo(3), "c");
        history.undo();
        history.add(photo(4), "d");

        // [original, b, d]
        assert_eq!(history.len(), 3);
        assert_eq!(history.current().label, "d");
        assert_eq!(history.undo().unwrap().label, "b");
        assert_eq!(history.undo().unwrap().label, "");
        assert!(history.undo().is_none());
    }
}
