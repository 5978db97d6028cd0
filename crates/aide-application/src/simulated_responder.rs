//! Local stand-in for a remote assistant backend.

use aide_core::config::ResponderConfig;
use aide_core::responder::{Responder, ResponseRequest, generate};
use aide_core::{AideError, Result};
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use std::time::Duration;

/// Generates replies locally after a random delay, failing now and then.
///
/// The random source is shared by the delay, the failure roll and the reply
/// text, so a seeded responder is fully reproducible.
pub struct SimulatedResponder {
    min_latency_ms: u64,
    max_latency_ms: u64,
    failure_rate: f64,
    rng: Mutex<StdRng>,
}

impl SimulatedResponder {
    /// Builds a responder seeded from the OS.
    pub fn new(config: &ResponderConfig) -> Result<Self> {
        Self::build(config, StdRng::from_entropy())
    }

    /// Builds a responder with a fixed seed.
    pub fn with_seed(config: &ResponderConfig, seed: u64) -> Result<Self> {
        Self::build(config, StdRng::seed_from_u64(seed))
    }

    fn build(config: &ResponderConfig, rng: StdRng) -> Result<Self> {
        if config.min_latency_ms > config.max_latency_ms {
            return Err(AideError::invalid_argument(
                "min_latency_ms must not exceed max_latency_ms",
            ));
        }
        if !(0.0..=1.0).contains(&config.failure_rate) {
            return Err(AideError::invalid_argument(
                "failure_rate must be within 0.0..=1.0",
            ));
        }
        Ok(Self {
            min_latency_ms: config.min_latency_ms,
            max_latency_ms: config.max_latency_ms,
            failure_rate: config.failure_rate,
            rng: Mutex::new(rng),
        })
    }

    /// Rolls delay, failure and text in one go so the lock is never held
    /// across the sleep.
    fn roll(&self, request: &ResponseRequest) -> (Duration, Option<String>) {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        let delay = Duration::from_millis(rng.gen_range(self.min_latency_ms..=self.max_latency_ms));
        let failed = rng.gen_bool(self.failure_rate);
        let reply = (!failed).then(|| generate(request, &mut *rng));
        (delay, reply)
    }
}

#[async_trait]
impl Responder for SimulatedResponder {
    async fn respond(&self, request: &ResponseRequest) -> Result<String> {
        let (delay, reply) = self.roll(request);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        reply.ok_or_else(|| AideError::internal("simulated network failure"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aide_core::settings::PersonalityMode;

    fn config(failure_rate: f64) -> ResponderConfig {
        ResponderConfig {
            min_latency_ms: 0,
            max_latency_ms: 0,
            failure_rate,
        }
    }

    fn request(message: &str) -> ResponseRequest {
        ResponseRequest::new(message, PersonalityMode::Casual, vec![])
    }

    #[tokio::test]
    async fn test_same_seed_same_replies() {
        let a = SimulatedResponder::with_seed(&config(0.0), 9).unwrap();
        let b = SimulatedResponder::with_seed(&config(0.0), 9).unwrap();

        for message in ["tell me about travel", "anything", "I need help"] {
            assert_eq!(
                a.respond(&request(message)).await.unwrap(),
                b.respond(&request(message)).await.unwrap()
            );
        }
    }

    #[tokio::test]
    async fn test_certain_failure() {
        let responder = SimulatedResponder::with_seed(&config(1.0), 1).unwrap();
        assert!(responder.respond(&request("hello")).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_stays_in_range() {
        let responder = SimulatedResponder::with_seed(
            &ResponderConfig {
                min_latency_ms: 1000,
                max_latency_ms: 3000,
                failure_rate: 0.0,
            },
            3,
        )
        .unwrap();

        let started = tokio::time::Instant::now();
        responder.respond(&request("hello")).await.unwrap();
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(1000));
        assert!(elapsed <= Duration::from_millis(3100));
    }

    #[test]
    fn test_rejects_bad_config() {
        assert!(SimulatedResponder::new(&config(-0.1)).is_err());
        let inverted = ResponderConfig {
            min_latency_ms: 10,
            max_latency_ms: 5,
            failure_rate: 0.0,
        };
        assert!(SimulatedResponder::new(&inverted).is_err());
    }
}
