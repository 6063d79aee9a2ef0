//! Push notification for presentation layers.

use super::Snapshot;

/// Receives a snapshot after every accepted move.
///
/// Rejected moves change nothing and notify nobody. Any
/// `FnMut(&Snapshot) + Send` closure is an observer.
pub trait SnapshotObserver: Send {
    /// Called once per accepted move with the post-move snapshot.
    fn on_move(&mut self, snapshot: &Snapshot);
}

impl<F> SnapshotObserver for F
where
    F: FnMut(&Snapshot) + Send,
{
    fn on_move(&mut self, snapshot: &Snapshot) {
        self(snapshot)
    }
}
