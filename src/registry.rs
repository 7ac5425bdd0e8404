//! TrackingRegistry: shared session state for one producer and its readers.

use crate::color::HsvColor;
use crate::entity::TrackedEntity;
use crate::kinematics;
use crate::sample::TimedSample;
use crate::{Error, Result};
use nalgebra::Point2;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use tracing::{debug, trace};

/// Registry of tracked entities for one tracking session.
///
/// The identity set is fixed at construction; the map itself is never
/// mutated afterwards, only the entities behind their per-entity locks. The
/// vision pipeline (single writer per entity) calls [`add_point`] once per
/// processed frame, while control-loop consumers poll the kinematics queries
/// concurrently through shared read locks, so a reader never observes a
/// half-applied eviction. Share across loops with an `Arc`.
///
/// [`add_point`]: TrackingRegistry::add_point
#[derive(Debug)]
pub struct TrackingRegistry {
    entities: HashMap<String, RwLock<TrackedEntity>>,
    center_point: (u32, u32),
}

impl TrackingRegistry {
    /// Create a registry for the given color profiles and frame size.
    ///
    /// Duplicate profile names collapse to a single entity. The frame size
    /// is only used to derive the reference center point handed to
    /// downstream threshold logic.
    ///
    /// # Errors
    /// [`Error::InvalidConfig`] for an empty color set or a zero frame
    /// dimension.
    pub fn new(colors: Vec<HsvColor>, frame_width: u32, frame_height: u32) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::InvalidConfig(
                "at least one color profile is required".to_string(),
            ));
        }
        if frame_width == 0 || frame_height == 0 {
            return Err(Error::InvalidConfig(format!(
                "frame dimensions must be non-zero, got {}x{}",
                frame_width, frame_height
            )));
        }

        let mut entities = HashMap::new();
        for color in colors {
            entities
                .entry(color.name().to_string())
                .or_insert_with(|| RwLock::new(TrackedEntity::new(color)));
        }

        let center_point = (frame_width / 2, frame_height / 2);
        debug!(
            identities = ?entities.keys().collect::<Vec<_>>(),
            ?center_point,
            "tracking registry created"
        );

        Ok(Self {
            entities,
            center_point,
        })
    }

    /// Create a registry from built-in color names (see
    /// [`HsvColor::by_name`]).
    pub fn from_color_names(names: &[&str], frame_width: u32, frame_height: u32) -> Result<Self> {
        let colors = names
            .iter()
            .map(|name| HsvColor::by_name(name))
            .collect::<Result<Vec<_>>>()?;
        Self::new(colors, frame_width, frame_height)
    }

    /// Tracked identity labels, sorted for deterministic iteration.
    pub fn identities(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entities.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Reference center of the frame, `(width / 2, height / 2)`.
    pub fn center_point(&self) -> (u32, u32) {
        self.center_point
    }

    /// Record one observed position for an identity. Producer side.
    pub fn add_point(&self, identity: &str, sample: TimedSample) -> Result<()> {
        let entity = self.entity(identity)?;
        entity.write().unwrap().add_sample(sample);
        trace!(
            identity,
            x = sample.x(),
            y = sample.y(),
            timestamp = sample.timestamp,
            "sample recorded"
        );
        Ok(())
    }

    /// Most recent position for an identity, `(0, 0)` sentinel when no
    /// sample has been recorded yet.
    pub fn position(&self, identity: &str) -> Result<Point2<f64>> {
        let entity = self.entity(identity)?;
        let guard = entity.read().unwrap();
        Ok(kinematics::position(&guard))
    }

    /// Most recent position, or `None` before the first sample.
    pub fn try_position(&self, identity: &str) -> Result<Option<Point2<f64>>> {
        let entity = self.entity(identity)?;
        let guard = entity.read().unwrap();
        Ok(kinematics::try_position(&guard))
    }

    /// Average window speed for an identity. See [`kinematics::speed`].
    pub fn speed(&self, identity: &str) -> Result<f64> {
        let entity = self.entity(identity)?;
        let guard = entity.read().unwrap();
        kinematics::speed(&guard)
    }

    /// Window heading for an identity in `[0, 360)`. See
    /// [`kinematics::direction`].
    pub fn direction(&self, identity: &str) -> Result<f64> {
        let entity = self.entity(identity)?;
        let guard = entity.read().unwrap();
        Ok(kinematics::direction(&guard))
    }

    /// Quantized `(heading, speed_bucket)` for an identity. See
    /// [`kinematics::velocity`].
    pub fn velocity(&self, identity: &str) -> Result<(i32, i32)> {
        let entity = self.entity(identity)?;
        let guard = entity.read().unwrap();
        kinematics::velocity(&guard)
    }

    /// Run a closure against a snapshot read of one entity.
    pub fn with_entity<R>(&self, identity: &str, f: impl FnOnce(&TrackedEntity) -> R) -> Result<R> {
        let entity = self.entity(identity)?;
        let guard = entity.read().unwrap();
        Ok(f(&guard))
    }

    fn entity(&self, identity: &str) -> Result<&RwLock<TrackedEntity>> {
        self.entities
            .get(identity)
            .ok_or_else(|| Error::UnknownIdentity(identity.to_string()))
    }
}

/// Cooperative stop signal shared between the producer and consumer loops.
///
/// Both loops check the token at every iteration boundary; cancellation is
/// best-effort, not an immediate halt. A loop stuck outside its check (for
/// example blocked in frame capture) is only stopped by killing the process.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a token in the running state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal all holders of this token to stop.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        debug!("cancellation requested");
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
