//! Per-(cast, target) hit cooldown ledger.
//!
//! One entry per (cast id, target id) pair holding the next time a hit
//! from that cast may register. Absence means "never hit, free to hit
//! immediately". Entries are only removed by a full reset.

use std::collections::HashMap;

use sparkswarm_core::constants::HIT_COOLDOWN_SECS;

#[derive(Debug, Clone, Default)]
pub struct CooldownLedger {
    next_allowed: HashMap<(u64, u32), f64>,
}

impl CooldownLedger {
    /// Gate a hit attempt. Returns true and records the new cooldown if
    /// the hit registers; returns false (no state change) while gated.
    pub fn try_register(&mut self, cast_id: u64, target_id: u32, now: f64) -> bool {
        let key = (cast_id, target_id);
        if self.next_allowed.get(&key).is_some_and(|&at| now < at) {
            return false;
        }
        self.next_allowed.insert(key, now + HIT_COOLDOWN_SECS);
        true
    }

    /// Whether hits from this cast against this target are gated.
    pub fn is_active(&self, cast_id: u64, target_id: u32, now: f64) -> bool {
        self.next_allowed
            .get(&(cast_id, target_id))
            .is_some_and(|&at| now < at)
    }

    /// Number of ledger entries (diagnostics).
    pub fn len(&self) -> usize {
        self.next_allowed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.next_allowed.is_empty()
    }

    /// Drop all entries (simulation reset only).
    pub fn clear(&mut self) {
        self.next_allowed.clear();
    }
}
