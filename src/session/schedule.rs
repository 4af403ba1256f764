//! Fixed pacing for a capture run.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Sleep intervals applied around each capture.
///
/// A run sleeps `warm_up` once after opening the camera, then wraps every
/// capture in a `pre_capture` and a `post_capture` sleep. All intervals are
/// fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// One-time settle delay after the camera opens.
    pub warm_up: Duration,
    /// Delay before each capture.
    pub pre_capture: Duration,
    /// Delay after each capture.
    pub post_capture: Duration,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            warm_up: Duration::from_secs(1),
            pre_capture: Duration::from_secs(1),
            post_capture: Duration::from_secs(1),
        }
    }
}

impl Schedule {
    /// Schedule with no delays, for testing.
    pub fn immediate() -> Self {
        Self {
            warm_up: Duration::ZERO,
            pre_capture: Duration::ZERO,
            post_capture: Duration::ZERO,
        }
    }

    /// Total time spent sleeping over a run of `image_count` captures.
    ///
    /// A lower bound on run duration; captures themselves add on top.
    pub fn total_sleep(&self, image_count: u32) -> Duration {
        let per_capture = self.pre_capture + self.post_capture;
        self.warm_up + per_capture * image_count
    }
}
