//! Playback history tracking
//!
//! Maintains a bounded history of played tracks for "previous" functionality

use homefy_core::Track;
use std::collections::VecDeque;
use tracing::trace;

/// Playback history with bounded size
///
/// Tracks recently played songs for "previous" navigation.
/// Oldest entries are evicted once the capacity is reached.
#[derive(Debug, Clone)]
pub struct History {
    /// History buffer (most recent = back)
    tracks: VecDeque<Track>,

    /// Maximum history size, never zero
    max_size: usize,
}

impl History {
    /// Create new history with specified maximum size
    ///
    /// A size of zero is raised to one.
    pub fn new(max_size: usize) -> Self {
        let max_size = max_size.max(1);
        Self {
            tracks: VecDeque::with_capacity(max_size),
            max_size,
        }
    }

    /// Add track to history
    ///
    /// If history is full, oldest tracks are discarded
    pub fn push(&mut self, track: Track) {
        while self.tracks.len() >= self.max_size {
            if let Some(evicted) = self.tracks.pop_front() {
                trace!(track_id = %evicted.id(), len = self.tracks.len(), "History full, evicting oldest");
            }
        }
        self.tracks.push_back(track);
    }

    /// Add track unless it is already the most recent entry
    ///
    /// Returns whether the track was added.
    pub fn push_unless_latest(&mut self, track: &Track) -> bool {
        if self.peek() == Some(track) {
            return false;
        }
        self.push(track.clone());
        true
    }

    /// Get most recent track (without removing)
    pub fn peek(&self) -> Option<&Track> {
        self.tracks.back()
    }

    /// Pop most recent track from history
    ///
    /// Returns the track for "previous" functionality
    pub fn pop(&mut self) -> Option<Track> {
        self.tracks.pop_back()
    }

    /// Iterate tracks, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Track> + '_ {
        self.tracks.iter()
    }

    /// Get number of tracks in history
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if history is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    /// Get maximum history size
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Set maximum history size
    ///
    /// If new size is smaller than current, oldest entries are discarded
    pub fn set_max_size(&mut self, max_size: usize) {
        self.max_size = max_size.max(1);

        while self.tracks.len() > self.max_size {
            self.tracks.pop_front();
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_HISTORY_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_track(id: &str) -> Track {
        Track::builder(id, format!("Track {}", id))
            .artist("Test Artist")
            .album("Test Album")
            .length(180)
            .build()
            .unwrap()
    }

    fn ids(history: &History) -> Vec<&str> {
        history.iter().map(|t| t.id().as_str()).collect()
    }

    #[test]
    fn create_history() {
        let history = History::new(10);
        assert_eq!(history.max_size(), 10);
        assert_eq!(history.len(), 0);
        assert!(history.is_empty());
    }

    #[test]
    fn zero_size_is_raised_to_one() {
        let mut history = History::new(0);
        assert_eq!(history.max_size(), 1);

        history.push(create_test_track("1"));
        history.push(create_test_track("2"));
        assert_eq!(ids(&history), vec!["2"]);
    }

    #[test]
    fn pop_from_history() {
        let mut history = History::new(10);
        history.push(create_test_track("1"));
        history.push(create_test_track("2"));
        history.push(create_test_track("3"));

        let track = history.pop().unwrap();
        assert_eq!(track.id().as_str(), "3");
        assert_eq!(history.len(), 2);

        let track = history.pop().unwrap();
        assert_eq!(track.id().as_str(), "2");
        assert_eq!(history.peek().unwrap().id().as_str(), "1");
    }

    #[test]
    fn history_bounded() {
        let mut history = History::new(3);

        for id in ["1", "2", "3", "4"] {
            history.push(create_test_track(id));
        }

        // Track 1 discarded
        assert_eq!(history.len(), 3);
        assert_eq!(ids(&history), vec!["2", "3", "4"]);
    }

    #[test]
    fn push_unless_latest_skips_duplicate_tail() {
        let mut history = History::new(10);
        let a = create_test_track("a");
        let b = create_test_track("b");

        assert!(history.push_unless_latest(&a));
        assert!(!history.push_unless_latest(&a));
        assert!(history.push_unless_latest(&b));
        // Only consecutive duplicates are skipped
        assert!(history.push_unless_latest(&a));

        assert_eq!(ids(&history), vec!["a", "b", "a"]);
    }

    #[test]
    fn resize_history() {
        let mut history = History::new(5);
        for i in 1..=5 {
            history.push(create_test_track(&i.to_string()));
        }

        history.set_max_size(3);
        assert_eq!(history.max_size(), 3);
        assert_eq!(ids(&history), vec!["3", "4", "5"]);
    }

    #[test]
    fn default_history() {
        let history = History::default();
        assert_eq!(history.max_size(), 100);
    }
}
