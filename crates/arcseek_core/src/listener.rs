//! Change notifications

use serde::{Deserialize, Serialize};

use crate::seek_bar::CircularRangeSeekBar;

/// A committed progress update
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressChange {
    pub progress1: i32,
    pub progress2: i32,
    /// `true` when the change came from a drag, `false` for programmatic updates
    pub from_user: bool,
}

/// Receives progress changes after they are committed.
///
/// The listener gets mutable access to the seek bar, so it may reconfigure
/// it. Changes caused from inside the callback are queued and delivered once
/// the current callback returns.
pub trait ProgressListener: Send {
    fn on_progress_change(&mut self, bar: &mut CircularRangeSeekBar, change: ProgressChange);
}

impl<F> ProgressListener for F
where
    F: FnMut(&mut CircularRangeSeekBar, ProgressChange) + Send,
{
    fn on_progress_change(&mut self, bar: &mut CircularRangeSeekBar, change: ProgressChange) {
        self(bar, change)
    }
}
