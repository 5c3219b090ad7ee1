//! The ordered, id-addressed track list.
//!
//! Entries keep the order the user gave them (1-based insertion positions).
//! Ids come from a counter that starts at 1 and never goes back, so an id is
//! never reused after its entry is deleted.

use std::path::Path;

use rand::seq::SliceRandom;

use crate::library::Track;

pub type TrackId = u32;

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: TrackId,
    pub track: Track,
}

#[derive(Debug, Clone)]
pub struct TrackList {
    entries: Vec<Entry>,
    next_id: TrackId,
}

impl Default for TrackList {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackList {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> TrackId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Insert `track` so that it becomes the `position`-th entry (1-based).
    ///
    /// `position <= 1` inserts at the head; a position past the end appends.
    pub fn insert_at(&mut self, track: Track, position: usize) -> TrackId {
        let id = self.allocate_id();
        let index = position.saturating_sub(1).min(self.entries.len());
        self.entries.insert(index, Entry { id, track });
        id
    }

    pub fn push_back(&mut self, track: Track) -> TrackId {
        let id = self.allocate_id();
        self.entries.push(Entry { id, track });
        id
    }

    pub fn get(&self, id: TrackId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// 1-based position of `id` in list order.
    pub fn position_of(&self, id: TrackId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id).map(|i| i + 1)
    }

    pub fn remove(&mut self, id: TrackId) -> Option<Entry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_path(&self, path: &Path) -> bool {
        self.entries.iter().any(|e| e.track.path == path)
    }

    /// Id following `id` in list order, wrapping to the head.
    pub fn next_after(&self, id: TrackId) -> Option<TrackId> {
        let i = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries[(i + 1) % self.entries.len()].id)
    }

    /// Id preceding `id` in list order, wrapping to the tail.
    pub fn prev_before(&self, id: TrackId) -> Option<TrackId> {
        let i = self.entries.iter().position(|e| e.id == id)?;
        let prev = if i == 0 { self.entries.len() - 1 } else { i - 1 };
        Some(self.entries[prev].id)
    }

    /// A random id other than `id`; `id` itself when it is the only entry.
    pub fn random_other(&self, id: TrackId) -> Option<TrackId> {
        let others: Vec<TrackId> = self
            .entries
            .iter()
            .map(|e| e.id)
            .filter(|&other| other != id)
            .collect();
        match others.choose(&mut rand::thread_rng()) {
            Some(&other) => Some(other),
            None => self.get(id).map(|e| e.id),
        }
    }

    /// Entries whose "artist title genre" text fuzzily matches `query`.
    pub fn search(&self, query: &str) -> Vec<&Entry> {
        let query = query.trim();
        self.entries
            .iter()
            .filter(|e| {
                let t = &e.track;
                let haystack = format!(
                    "{} {} {}",
                    t.artist.as_deref().unwrap_or_default(),
                    t.title,
                    t.genre.as_deref().unwrap_or_default()
                );
                fuzzy_match(&haystack, query)
            })
            .collect()
    }

    /// Replace every entry with `tracks`, appended in order. Ids keep counting up.
    pub fn replace_all(&mut self, tracks: Vec<Track>) {
        self.entries.clear();
        for track in tracks {
            self.push_back(track);
        }
    }
}

/// Case-insensitive subsequence match: every char of `query` appears in
/// `text` in order, not necessarily contiguously.
pub fn fuzzy_match(text: &str, query: &str) -> bool {
    let mut text_chars = text.chars().flat_map(char::to_lowercase);
    query
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| !c.is_whitespace())
        .all(|qc| text_chars.any(|tc| tc == qc))
}
