//! TimedSample struct for positions delivered by the vision pipeline.

use nalgebra::Point2;
use std::time::{SystemTime, UNIX_EPOCH};

/// A single observed position with its capture timestamp.
///
/// One sample is produced per processed frame per tracked color. Samples are
/// immutable once created; the history buffer never reorders them, so a
/// well-behaved producer yields non-decreasing timestamps in insertion order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimedSample {
    /// Observed centroid in pixel coordinates.
    pub pos: Point2<f64>,

    /// Capture time in seconds (wall-clock UNIX seconds by default).
    pub timestamp: f64,
}

impl TimedSample {
    /// Create a sample with an explicit timestamp.
    pub fn new(x: f64, y: f64, timestamp: f64) -> Self {
        Self {
            pos: Point2::new(x, y),
            timestamp,
        }
    }

    /// Create a sample timestamped with the current wall-clock time.
    pub fn now(x: f64, y: f64) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);
        Self::new(x, y, timestamp)
    }

    /// The empty-history sentinel: position (0, 0) at t = 0.
    ///
    /// Queries that default to this value on an empty history are a parity
    /// behavior; callers that need to distinguish emptiness should use the
    /// `Option`-returning accessors instead of comparing against it.
    pub fn sentinel() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// X coordinate of the observed position.
    #[inline]
    pub fn x(&self) -> f64 {
        self.pos.x
    }

    /// Y coordinate of the observed position.
    #[inline]
    pub fn y(&self) -> f64 {
        self.pos.y
    }
}
