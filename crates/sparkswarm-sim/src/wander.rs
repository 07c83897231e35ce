//! The Wander heading model.
//!
//! Each projectile carries its own `Wander` instance: continuous
//! zero-mean micro-jitter plus a Poisson-arrival stream of discrete
//! heading-change events, occasionally followed by short correction
//! bursts. Apart from wall reflection, `step` is the only mutation
//! path for a projectile's heading.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use sparkswarm_core::constants::*;

/// Per-projectile stochastic heading state.
#[derive(Debug, Clone)]
pub struct Wander {
    /// Local clock, advanced by `step`.
    clock: f64,
    /// Scheduled time of the next base Poisson event.
    next_event_at: f64,
    /// Pending burst events, sorted ascending by time.
    pending: Vec<f64>,
    /// Micro-jitter sigma; zero disables the continuous term.
    micro_sigma: f64,
}

impl Wander {
    pub fn new(rng: &mut ChaCha8Rng) -> Self {
        Self {
            clock: 0.0,
            next_event_at: exp_interval(rng),
            pending: Vec::new(),
            micro_sigma: WANDER_MICRO_SIGMA,
        }
    }

    /// A wander instance that never perturbs the heading. Used for
    /// straight-line shots and deterministic trajectory tests.
    pub fn inert() -> Self {
        Self {
            clock: 0.0,
            next_event_at: f64::INFINITY,
            pending: Vec::new(),
            micro_sigma: 0.0,
        }
    }

    /// Advance the local clock by `dt` and return the updated heading.
    pub fn step(&mut self, heading: f64, dt: f64, rng: &mut ChaCha8Rng) -> f64 {
        self.clock += dt;
        let mut heading = heading;

        // Continuous jitter, sqrt(dt)-scaled so angular variance
        // accumulates linearly in time.
        if self.micro_sigma > 0.0 {
            heading += gauss(rng) * self.micro_sigma * dt.sqrt();
        }

        self.drain_pending(&mut heading, rng);

        while self.next_event_at <= self.clock {
            let event_time = self.next_event_at;
            heading += self.heading_kick(rng);
            self.next_event_at = event_time + exp_interval(rng);

            // Occasionally a rapid correction burst follows the event.
            if rng.gen::<f64>() < WANDER_P_BURST {
                let extra = rng.gen_range(1..=2);
                for _ in 0..extra {
                    let at =
                        event_time + rng.gen_range(WANDER_BURST_MIN_OFFSET..WANDER_BURST_MAX_OFFSET);
                    let idx = self.pending.partition_point(|&t| t <= at);
                    self.pending.insert(idx, at);
                }
            }
        }

        // Bursts scheduled by a late base event may already be due.
        self.drain_pending(&mut heading, rng);

        heading
    }

    /// Number of queued burst events (diagnostics).
    pub fn pending_bursts(&self) -> usize {
        self.pending.len()
    }

    fn drain_pending(&mut self, heading: &mut f64, rng: &mut ChaCha8Rng) {
        while self.pending.first().is_some_and(|&t| t <= self.clock) {
            self.pending.remove(0);
            *heading += self.heading_kick(rng);
        }
    }

    /// Draw one discrete heading delta: small or large regime, then a
    /// truncated-normal magnitude capped per regime.
    fn heading_kick(&self, rng: &mut ChaCha8Rng) -> f64 {
        let (sigma, cap) = if rng.gen::<f64>() < WANDER_P_LARGE {
            (WANDER_LARGE_SIGMA, WANDER_LARGE_MAX)
        } else {
            (WANDER_SMALL_SIGMA, WANDER_SMALL_MAX)
        };
        truncated_gauss(rng, sigma, cap)
    }
}

/// Zero-mean unit Gaussian via Box-Muller.
fn gauss(rng: &mut ChaCha8Rng) -> f64 {
    let u1: f64 = rng.gen::<f64>().max(1e-12);
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}

/// Exponential inter-arrival draw at the wander event rate.
fn exp_interval(rng: &mut ChaCha8Rng) -> f64 {
    let u: f64 = rng.gen();
    (-(1.0 - u).ln() / WANDER_EVENT_RATE).max(1e-4)
}

/// Rejection-sampled truncated normal: up to `WANDER_TRUNC_TRIES`
/// draws, then hard clamp of the last sample.
fn truncated_gauss(rng: &mut ChaCha8Rng, sigma: f64, cap: f64) -> f64 {
    let mut sample = 0.0;
    for _ in 0..WANDER_TRUNC_TRIES {
        sample = gauss(rng) * sigma;
        if sample.abs() <= cap {
            return sample;
        }
    }
    sample.clamp(-cap, cap)
}
