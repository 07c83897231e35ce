//! Cumulative hit counters and the trailing-window rate metrics.

use std::collections::VecDeque;

use sparkswarm_core::constants::{DT, METRICS_WINDOW_SECS};

/// Hit/damage bookkeeping. Cumulative totals never reset except by a
/// full simulation reset; the window feeds hit-rate and DPS.
#[derive(Debug, Clone, Default)]
pub struct HitStats {
    pub total_hits: u64,
    pub total_damage: f64,
    /// Registered hits in the trailing window: (time, damage).
    window: VecDeque<(f64, f64)>,
}

impl HitStats {
    /// Record one registered hit.
    pub fn record(&mut self, now: f64, damage: f64) {
        self.total_hits += 1;
        self.total_damage += damage;
        self.window.push_back((now, damage));
    }

    /// Drop window entries older than the trailing window.
    pub fn prune(&mut self, now: f64) {
        while self
            .window
            .front()
            .is_some_and(|&(at, _)| at < now - METRICS_WINDOW_SECS)
        {
            self.window.pop_front();
        }
    }

    /// Registered hits per second over the trailing window.
    pub fn hit_rate(&self, now: f64) -> f64 {
        self.window.len() as f64 / window_span(now)
    }

    /// Damage per second over the trailing window.
    pub fn dps(&self, now: f64) -> f64 {
        let damage: f64 = self.window.iter().map(|&(_, d)| d).sum();
        damage / window_span(now)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Effective window length: the full trailing window once enough time
/// has elapsed, the elapsed time before that.
fn window_span(now: f64) -> f64 {
    METRICS_WINDOW_SECS.min(now).max(DT)
}
