//! Integration tests for the chromatrack core.
//!
//! These tests drive complete tracking sessions: a producer loop standing in
//! for the vision pipeline, consumer loops polling the kinematics queries,
//! and cooperative shutdown through the cancellation token.

use std::sync::Arc;
use std::thread;

use chromatrack::{CancellationToken, Error, TimedSample, TrackingRegistry};

// =============================================================================
// Test 1: Complete producer/consumer session
// =============================================================================

#[test]
fn test_integration_producer_consumer_session() {
    let registry =
        Arc::new(TrackingRegistry::from_color_names(&["blue", "green"], 680, 440).unwrap());
    let token = CancellationToken::new();

    // Producer: one sample per frame per identity. Blue moves down-right at
    // a constant (100, 60) px/s, green holds still at the frame center.
    let producer = {
        let registry = Arc::clone(&registry);
        let token = token.clone();
        let center = registry.center_point();
        thread::spawn(move || {
            for frame in 0..60 {
                if token.is_cancelled() {
                    break;
                }
                let t = frame as f64;
                registry
                    .add_point("blue", TimedSample::new(100.0 * t, 60.0 * t, t))
                    .unwrap();
                registry
                    .add_point(
                        "green",
                        TimedSample::new(center.0 as f64, center.1 as f64, t),
                    )
                    .unwrap();
            }
        })
    };

    // Consumer: busy-polls the shared state until cancelled, with no
    // blocking wait between iterations.
    let consumer = {
        let registry = Arc::clone(&registry);
        let token = token.clone();
        thread::spawn(move || {
            let mut polls = 0u32;
            while !token.is_cancelled() {
                let speed = registry.speed("blue").unwrap();
                assert!(speed >= 0.0 && speed.is_finite());

                let heading = registry.direction("blue").unwrap();
                assert!((0.0..360.0).contains(&heading));

                let (h, bucket) = registry.velocity("blue").unwrap();
                assert!((0..360).contains(&h));
                assert!(bucket >= 0);

                polls += 1;
            }
            polls
        })
    };

    // Producer finishes on its own; the consumer only stops once told to.
    producer.join().unwrap();
    token.cancel();
    let polls = consumer.join().unwrap();
    assert!(polls > 0, "consumer should have polled at least once");

    // Steady state for blue: every pair contributes (|100| + |60|) / 2 = 80.
    let speed = registry.speed("blue").unwrap();
    assert!(
        (speed - 80.0).abs() < 1e-9,
        "expected speed 80, got {}",
        speed
    );

    // Averaged diffs (100, 60), negated (-100, -60): 180 + atan(0.6) deg.
    let heading = registry.direction("blue").unwrap();
    let expected = 180.0 + (0.6f64).atan().to_degrees();
    assert!(
        (heading - expected).abs() < 1e-9,
        "expected heading {}, got {}",
        expected,
        heading
    );

    // Quantized contract: heading truncated, speed bucketed by 10.
    assert_eq!(registry.velocity("blue").unwrap(), (210, 8));

    // The static object reports zero motion and its held position.
    assert_eq!(registry.velocity("green").unwrap(), (0, 0));
    let green_pos = registry.position("green").unwrap();
    assert_eq!((green_pos.x, green_pos.y), (340.0, 220.0));
}

// =============================================================================
// Test 2: Degenerate interval surfaces and the window recovers
// =============================================================================

#[test]
fn test_integration_degenerate_interval_recovery() {
    let registry = TrackingRegistry::from_color_names(&["blue"], 680, 440).unwrap();

    // Two frames share a capture timestamp (a stalled clock).
    registry
        .add_point("blue", TimedSample::new(0.0, 0.0, 0.0))
        .unwrap();
    registry
        .add_point("blue", TimedSample::new(5.0, 5.0, 0.0))
        .unwrap();

    // The zero interval is a defined error, never inf or NaN; the caller
    // skips the cycle.
    assert!(matches!(
        registry.speed("blue").unwrap_err(),
        Error::DegenerateInterval { timestamp } if timestamp == 0.0
    ));
    assert!(registry.velocity("blue").is_err());

    // Direction takes no time division and still answers.
    let heading = registry.direction("blue").unwrap();
    assert!((0.0..360.0).contains(&heading));

    // Once enough healthy frames arrive, the degenerate pair is evicted
    // from the window and speed is answerable again.
    for i in 1..=12 {
        let t = i as f64;
        registry
            .add_point("blue", TimedSample::new(5.0 + 10.0 * t, 5.0, t))
            .unwrap();
    }
    let speed = registry.speed("blue").unwrap();
    assert!(
        (speed - 5.0).abs() < 1e-9,
        "expected recovered speed 5, got {}",
        speed
    );
}

// =============================================================================
// Test 3: Cancellation stops an otherwise unbounded producer
// =============================================================================

#[test]
fn test_integration_cancellation_stops_unbounded_producer() {
    let registry = Arc::new(TrackingRegistry::from_color_names(&["green"], 320, 240).unwrap());
    let token = CancellationToken::new();

    let producer = {
        let registry = Arc::clone(&registry);
        let token = token.clone();
        thread::spawn(move || {
            let mut frame = 0u64;
            // No bound of its own; only the token ends this loop.
            while !token.is_cancelled() {
                let t = frame as f64 * 0.01;
                registry
                    .add_point("green", TimedSample::new(frame as f64, 0.0, t))
                    .unwrap();
                frame += 1;
            }
            frame
        })
    };

    // Wait until the window has real content, then signal shutdown.
    loop {
        if registry.with_entity("green", |e| e.history().len()).unwrap() >= 5 {
            break;
        }
        thread::yield_now();
    }
    token.cancel();

    let frames = producer.join().unwrap();
    assert!(frames >= 5);

    // State is still coherent after shutdown.
    let speed = registry.speed("green").unwrap();
    assert!(speed.is_finite());
    assert!(registry.try_position("green").unwrap().is_some());
}

// =============================================================================
// Test 4: Per-identity isolation under interleaved updates
// =============================================================================

#[test]
fn test_integration_identities_are_independent() {
    let registry = TrackingRegistry::from_color_names(&["blue", "green", "red"], 680, 440).unwrap();

    for i in 0..20 {
        let t = i as f64;
        // Blue drifts right, green drifts up-screen, red never appears.
        registry
            .add_point("blue", TimedSample::new(8.0 * t, 0.0, t))
            .unwrap();
        registry
            .add_point("green", TimedSample::new(100.0, 300.0 - 4.0 * t, t))
            .unwrap();
    }

    assert_eq!(registry.velocity("blue").unwrap(), (0, 0));
    let blue_speed = registry.speed("blue").unwrap();
    assert!((blue_speed - 4.0).abs() < 1e-9);

    // Pure vertical motion: avg_dx == 0 collapses the heading to 0.
    assert_eq!(registry.direction("green").unwrap(), 0.0);
    let green_speed = registry.speed("green").unwrap();
    assert!((green_speed - 2.0).abs() < 1e-9);

    // Red was registered but never observed.
    assert!(registry.try_position("red").unwrap().is_none());
    assert_eq!(registry.speed("red").unwrap(), 0.0);
}
