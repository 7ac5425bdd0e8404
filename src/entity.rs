//! TrackedEntity: one tracked color and its position history.

use crate::color::HsvColor;
use crate::history::BoundedHistory;
use crate::sample::TimedSample;
use nalgebra::Point2;

/// Slot count of the per-entity position history.
///
/// The effective smoothing window is one less (see
/// [`BoundedHistory`](crate::history::BoundedHistory) retention policy).
pub const POSITION_HISTORY_CAPACITY: usize = 10;

/// One tracked object: an identity label, its HSV detection window and the
/// bounded history of its observed positions.
///
/// Entities are created once at registry construction and mutated only
/// through [`add_sample`]; the history is exclusively owned and never
/// aliased outside the entity.
///
/// [`add_sample`]: TrackedEntity::add_sample
#[derive(Clone, Debug)]
pub struct TrackedEntity {
    color: HsvColor,
    history: BoundedHistory<TimedSample>,
}

impl TrackedEntity {
    /// Create an entity for the given color profile with an empty history.
    pub fn new(color: HsvColor) -> Self {
        Self {
            color,
            history: BoundedHistory::with_capacity(POSITION_HISTORY_CAPACITY),
        }
    }

    /// The identity label (the color name).
    pub fn identity(&self) -> &str {
        self.color.name()
    }

    /// The HSV detection window for this entity.
    pub fn color(&self) -> &HsvColor {
        &self.color
    }

    /// The current sample window.
    pub fn history(&self) -> &BoundedHistory<TimedSample> {
        &self.history
    }

    /// Record one observed position.
    pub fn add_sample(&mut self, sample: TimedSample) {
        self.history.enqueue(sample);
    }

    /// Most recently recorded position, or `None` before the first sample.
    pub fn last_position(&self) -> Option<Point2<f64>> {
        self.history.newest().map(|sample| sample.pos)
    }
}
