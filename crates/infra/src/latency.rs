//! Latency simulation standing in for network round trips.

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;

/// Artificial delay applied before a service operation touches the store.
///
/// Implementations must not block the thread: other pending operations keep
/// running while one is delayed.
#[async_trait]
pub trait Latency: Send + Sync + Debug {
    async fn delay(&self, duration: Duration);
}

/// Sleeps on the tokio timer, scaled by a constant factor.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedLatency {
    scale: f64,
}

impl SimulatedLatency {
    /// Real-time delays (scale 1.0).
    pub fn new() -> Self {
        Self { scale: 1.0 }
    }

    /// Delays multiplied by `scale` (e.g. 0.1 for a snappier demo).
    /// Negative or non-finite scales are treated as zero.
    pub fn scaled(scale: f64) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 { scale } else { 0.0 };
        Self { scale }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Latency for SimulatedLatency {
    async fn delay(&self, duration: Duration) {
        let scaled = duration.mul_f64(self.scale);
        if !scaled.is_zero() {
            tokio::time::sleep(scaled).await;
        }
    }
}

/// No delay at all (tests, benchmarks).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait]
impl Latency for NoLatency {
    async fn delay(&self, _duration: Duration) {}
}

/// Per-operation round-trip times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatencyProfile {
    pub event_list: Duration,
    pub event_get: Duration,
    pub event_create: Duration,
    pub event_update: Duration,
    pub event_delete: Duration,
    pub rsvp_list: Duration,
    pub rsvp_create: Duration,
    pub rsvp_update_status: Duration,
    pub inventory_list: Duration,
    pub inventory_update: Duration,
    pub inventory_add: Duration,
    pub inventory_remove: Duration,
    pub guest_list: Duration,
    pub guest_invite: Duration,
    pub guest_update_status: Duration,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        let ms = Duration::from_millis;
        Self {
            event_list: ms(800),
            event_get: ms(500),
            event_create: ms(1000),
            event_update: ms(800),
            event_delete: ms(600),
            rsvp_list: ms(600),
            rsvp_create: ms(800),
            rsvp_update_status: ms(500),
            inventory_list: ms(700),
            inventory_update: ms(600),
            inventory_add: ms(800),
            inventory_remove: ms(600),
            guest_list: ms(500),
            guest_invite: ms(700),
            guest_update_status: ms(500),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn simulated_latency_waits_at_least_the_duration() {
        let start = Instant::now();
        SimulatedLatency::new().delay(Duration::from_millis(800)).await;
        assert!(start.elapsed() >= Duration::from_millis(800));
    }

    #[tokio::test(start_paused = true)]
    async fn scale_shrinks_delay() {
        let start = Instant::now();
        SimulatedLatency::scaled(0.5).delay(Duration::from_millis(800)).await;
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(400));
        assert!(elapsed < Duration::from_millis(800));
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_delays_overlap() {
        let start = Instant::now();
        let latency = SimulatedLatency::new();
        tokio::join!(
            latency.delay(Duration::from_millis(500)),
            latency.delay(Duration::from_millis(500)),
        );
        assert!(start.elapsed() < Duration::from_millis(1000));
    }

    #[test]
    fn invalid_scales_collapse_to_zero() {
        assert_eq!(SimulatedLatency::scaled(-1.0).scale(), 0.0);
        assert_eq!(SimulatedLatency::scaled(f64::NAN).scale(), 0.0);
    }
}
