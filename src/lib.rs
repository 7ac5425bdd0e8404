//! # Chromatrack - Color Motion Tracking Core
//!
//! Kinematics estimation engine for tracking colored objects across a live
//! video stream. An external vision pipeline supplies raw `(x, y)` centroid
//! detections per tracked color per frame; this crate stores them in bounded
//! per-entity histories and derives instantaneous speed, heading and
//! coarse-quantized velocity from the current sample window. Downstream
//! consumers poll those estimates and turn them into discrete control
//! signals.
//!
//! ## Features
//!
//! - Fixed-capacity position histories with O(1) enqueue and oldest-first
//!   eviction
//! - Stateless speed / direction / velocity queries over the current window
//! - One registry entry per tracked color, safe for a concurrent
//!   producer/consumer pair
//! - Cooperative shutdown via a shared cancellation token
//!
//! ## Example
//!
//! ```rust,ignore
//! use chromatrack::{TimedSample, TrackingRegistry};
//!
//! let registry = TrackingRegistry::from_color_names(&["blue", "green"], 680, 440)?;
//!
//! // Vision pipeline, once per frame:
//! registry.add_point("blue", TimedSample::new(120.0, 88.0, 0.033))?;
//!
//! // Control loop, polled on demand:
//! let (heading, speed_bucket) = registry.velocity("blue")?;
//! ```

pub mod color;
pub mod entity;
pub mod history;
pub mod kinematics;
pub mod registry;
pub mod sample;

// Re-exports for convenience
pub use color::HsvColor;
pub use entity::TrackedEntity;
pub use history::BoundedHistory;
pub use registry::{CancellationToken, TrackingRegistry};
pub use sample::TimedSample;

// Error types
pub use crate::error::{Error, Result};

mod error {
    use thiserror::Error;

    /// Errors that can occur in the chromatrack library
    #[derive(Error, Debug)]
    pub enum Error {
        #[error("Invalid configuration: {0}")]
        InvalidConfig(String),

        #[error("Unknown color profile: {0}")]
        UnknownColor(String),

        #[error("Unknown tracked identity: {0}")]
        UnknownIdentity(String),

        #[error("Degenerate interval: consecutive samples share timestamp {timestamp}")]
        DegenerateInterval { timestamp: f64 },
    }

    /// Result type for chromatrack operations
    pub type Result<T> = std::result::Result<T, Error>;
}
