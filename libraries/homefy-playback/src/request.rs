//! Play requests
//!
//! Snapshot of "play this track from that list", normalized so the list
//! continues forward from the selected track.

use homefy_core::Track;
use rand::Rng;

/// A user's request to play a track from a browsing context
///
/// On construction the context is rotated so the target comes first and
/// the tracks that preceded it wrap around to the end:
///
/// ```text
/// target: S2, context: [S1, S2, S3]  =>  [S2, S3, S1]
/// ```
///
/// A context that does not contain the target is kept as is.
#[derive(Debug, Clone)]
pub struct PlayRequest {
    target: Track,
    context: Vec<Track>,
}

impl PlayRequest {
    /// Create a request, rotating `context` to start at `target`
    pub fn new(target: Track, mut context: Vec<Track>) -> Self {
        if let Some(index) = context.iter().position(|track| *track == target) {
            context.rotate_left(index);
        }
        Self { target, context }
    }

    /// The track the user selected
    pub fn target(&self) -> &Track {
        &self.target
    }

    /// Rotated browsing context
    pub fn context(&self) -> &[Track] {
        &self.context
    }

    /// Append the rotated context to `into`
    pub fn fill<E: Extend<Track>>(&self, into: &mut E) {
        into.extend(self.context.iter().cloned());
    }

    /// Pick any track of the request uniformly
    ///
    /// Draws from `context.len() + 1` slots; the extra slot is the target,
    /// so an empty context always yields the target.
    pub fn pick_any<R: Rng>(&self, rng: &mut R) -> &Track {
        let index = rng.gen_range(0..=self.context.len());
        self.context.get(index).unwrap_or(&self.target)
    }
}
