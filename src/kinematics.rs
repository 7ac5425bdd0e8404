//! Kinematics queries over an entity's sample window.
//!
//! All operations are stateless reads of the window at call time; there is
//! no estimator state between calls. Two conventions here are load-bearing
//! for downstream threshold tuning and must be preserved exactly:
//!
//! - speed is the mean of `(|dx/dt| + |dy/dt|) / 2` per adjacent pair, not a
//!   Euclidean norm;
//! - the heading is selected by the quadrant of the *negated* averaged
//!   displacement (screen-style convention where "up" and "right" come out
//!   consistent), not of the raw one.

use crate::entity::TrackedEntity;
use crate::sample::TimedSample;
use crate::{Error, Result};
use nalgebra::{Point2, Vector2};

/// Average per-pair speed across the window, in pixels per second.
///
/// Fewer than two window samples yield `Ok(0.0)`. Each adjacent pair
/// contributes `(|dx/dt| + |dy/dt|) / 2`; the result is the arithmetic mean
/// of the per-pair rates.
///
/// # Errors
/// [`Error::DegenerateInterval`] if any adjacent pair shares a timestamp.
/// The caller decides whether to skip the polling cycle or abort; the error
/// is never smoothed into `0`, `inf` or `NaN`.
pub fn speed(entity: &TrackedEntity) -> Result<f64> {
    let mut sum = 0.0;
    let mut pairs = 0usize;
    let mut prev: Option<&TimedSample> = None;

    for sample in entity.history() {
        if let Some(previous) = prev {
            let dt = sample.timestamp - previous.timestamp;
            if dt == 0.0 {
                return Err(Error::DegenerateInterval {
                    timestamp: sample.timestamp,
                });
            }
            let delta = sample.pos - previous.pos;
            sum += ((delta.x / dt).abs() + (delta.y / dt).abs()) / 2.0;
            pairs += 1;
        }
        prev = Some(sample);
    }

    if pairs == 0 {
        return Ok(0.0);
    }
    Ok(sum / pairs as f64)
}

/// Heading of the averaged motion across the window, in degrees `[0, 360)`.
///
/// Fewer than two window samples, or an averaged `dx` of exactly zero
/// (pure vertical motion), yield `0.0`. Otherwise the base angle is
/// `atan(|avg_dy / avg_dx|)` and the output quadrant is chosen from the
/// negated averaged displacement:
///
/// | negated dx | negated dy | heading |
/// |---|---|---|
/// | < 0 | > 0 | `180 - base` |
/// | < 0 | < 0 | `180 + base` |
/// | > 0 | < 0 | `360 - base` |
/// | otherwise | | `base` |
pub fn direction(entity: &TrackedEntity) -> f64 {
    let mut sum = Vector2::new(0.0, 0.0);
    let mut pairs = 0usize;
    let mut prev: Option<&TimedSample> = None;

    for sample in entity.history() {
        if let Some(previous) = prev {
            sum += sample.pos - previous.pos;
            pairs += 1;
        }
        prev = Some(sample);
    }

    if pairs == 0 {
        return 0.0;
    }

    let avg = sum / pairs as f64;
    if avg.x == 0.0 {
        return 0.0;
    }

    let base = (avg.y / avg.x).abs().atan().to_degrees();
    let flipped = -avg;

    if flipped.x < 0.0 && flipped.y > 0.0 {
        180.0 - base
    } else if flipped.x < 0.0 && flipped.y < 0.0 {
        180.0 + base
    } else if flipped.x > 0.0 && flipped.y < 0.0 {
        360.0 - base
    } else {
        base
    }
}

/// Coarse-quantized `(heading_degrees, speed_bucket)` pair.
///
/// Both components truncate toward zero and the speed is bucketed by 10,
/// the contract threshold consumers rely on. Not precise telemetry.
///
/// # Errors
/// Propagates [`Error::DegenerateInterval`] from [`speed`].
pub fn velocity(entity: &TrackedEntity) -> Result<(i32, i32)> {
    let heading = direction(entity);
    let speed = speed(entity)?;
    Ok((heading as i32, (speed / 10.0) as i32))
}

/// Most recently recorded position, or the `(0, 0)` sentinel when no sample
/// has been recorded yet.
///
/// Use [`try_position`] to treat emptiness as absence instead.
pub fn position(entity: &TrackedEntity) -> Point2<f64> {
    entity
        .last_position()
        .unwrap_or_else(|| TimedSample::sentinel().pos)
}

/// Most recently recorded position, or `None` before the first sample.
pub fn try_position(entity: &TrackedEntity) -> Option<Point2<f64>> {
    entity.last_position()
}
