//! Two-tier queue system
//!
//! - User queue: tracks the user explicitly queued, always played first
//! - Upcoming queue: tracks the active mode scheduled from the play request

use homefy_core::Track;
use std::collections::VecDeque;
use tracing::debug;

/// Two-tier queue for playback
///
/// Structure:
/// ```text
/// Currently Playing: Track A
/// ─────────────────────────────
/// User Queue (play next, newest first):
///   - Track B (queued last)
///   - Track C (queued earlier)
/// ─────────────────────────────
/// Upcoming (from the play request):
///   - Track D
///   - Track E
/// ```
#[derive(Debug, Clone, Default)]
pub struct Queue {
    /// Tracks explicitly queued by the user
    user: VecDeque<Track>,

    /// Tracks scheduled by the playback mode
    upcoming: VecDeque<Track>,
}

impl Queue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `tracks` in front of everything already queued
    ///
    /// The list keeps its internal order, so its first track plays next.
    pub fn prepend_user(&mut self, tracks: Vec<Track>) {
        for track in tracks.into_iter().rev() {
            self.user.push_front(track);
        }
    }

    /// Queue `track` to play next unless it is already at the head
    ///
    /// Returns whether the queue changed.
    pub fn requeue(&mut self, track: Track) -> bool {
        if self.user.front() == Some(&track) {
            debug!(track_id = %track.id(), "Track already first in queue, not adding again");
            return false;
        }
        self.user.push_front(track);
        true
    }

    /// Take the next user-queued track
    pub fn pop_user(&mut self) -> Option<Track> {
        self.user.pop_front()
    }

    /// Tracks explicitly queued by the user, next first
    pub fn user(&self) -> &VecDeque<Track> {
        &self.user
    }

    /// Tracks scheduled by the playback mode, next first
    pub fn upcoming(&self) -> &VecDeque<Track> {
        &self.upcoming
    }

    pub(crate) fn upcoming_mut(&mut self) -> &mut VecDeque<Track> {
        &mut self.upcoming
    }

    /// Drop both tiers
    pub fn clear(&mut self) {
        self.user.clear();
        self.upcoming.clear();
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

    fn tracks(ids: &[&str]) -> Vec<Track> {
        ids.iter().map(|id| create_test_track(id)).collect()
    }

    fn ids(queue: &VecDeque<Track>) -> Vec<&str> {
        queue.iter().map(|t| t.id().as_str()).collect()
    }

    #[test]
    fn create_empty_queue() {
        let queue = Queue::new();
        assert!(queue.user().is_empty());
        assert!(queue.upcoming().is_empty());
    }

    #[test]
    fn prepend_keeps_list_order() {
        let mut queue = Queue::new();
        queue.prepend_user(tracks(&["a", "b"]));
        assert_eq!(ids(queue.user()), vec!["a", "b"]);
    }

    #[test]
    fn newer_prepends_play_first() {
        let mut queue = Queue::new();
        queue.prepend_user(tracks(&["a", "b"]));
        queue.prepend_user(tracks(&["c", "d"]));

        assert_eq!(ids(queue.user()), vec!["c", "d", "a", "b"]);
        assert_eq!(queue.pop_user().unwrap().id().as_str(), "c");
    }

    #[test]
    fn requeue_skips_duplicate_head() {
        let mut queue = Queue::new();
        assert!(queue.requeue(create_test_track("a")));
        assert!(!queue.requeue(create_test_track("a")));
        assert!(queue.requeue(create_test_track("b")));

        assert_eq!(ids(queue.user()), vec!["b", "a"]);
    }

    #[test]
    fn clear_drops_both_tiers() {
        let mut queue = Queue::new();
        queue.prepend_user(tracks(&["a"]));
        queue.upcoming_mut().extend(tracks(&["x", "y"]));
        assert_eq!(queue.user().len() + queue.upcoming().len(), 3);

        queue.clear();
        assert!(queue.user().is_empty());
        assert!(queue.upcoming().is_empty());
    }
}
