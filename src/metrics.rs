//! The metrics snapshot produced by one refresh cycle.

use crate::node::types::{NodeHealth, ValidatorResponse};
use serde::Serialize;

/// Latest known value of every polled quantity.
///
/// Fields start empty and are only overwritten by a successful fetch, so a
/// snapshot always holds either the newest or the previous good value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metrics {
    pub memory_total_bytes: u64,
    pub memory_used_bytes: u64,
    pub memory_free_bytes: u64,
    pub system_load_1m: f64,
    /// Raw `/node/version` body; empty until first fetched.
    pub node_version: String,
    /// Raw `/network/peer_count` body; empty until first fetched.
    pub peer_count: String,
    /// Precomputed, e.g. `"12 GB"`; empty until first measured.
    pub db_size_display: String,
    pub validator: Option<ValidatorRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatorRecord {
    pub public_key: String,
    /// Balance in the smallest unit.
    pub balance_raw: u64,
    pub is_slashed: bool,
    pub validator_index: u64,
}

impl From<ValidatorResponse> for ValidatorRecord {
    fn from(response: ValidatorResponse) -> Self {
        Self {
            public_key: response.pubkey,
            balance_raw: response.balance,
            is_slashed: response.validator.slashed,
            validator_index: response.validator_index,
        }
    }
}

impl Metrics {
    pub fn apply_health(&mut self, health: &NodeHealth) {
        self.memory_total_bytes = health.memory_total;
        self.memory_used_bytes = health.memory_used;
        self.memory_free_bytes = health.memory_free;
        self.system_load_1m = health.load_1m;
    }
}
