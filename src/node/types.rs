//! Wire types for the beacon node endpoints.

use serde::{Deserialize, Serialize};

/// Body of `GET /node/health`. Only the fields the dashboard shows are decoded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NodeHealth {
    #[serde(rename = "sys_virt_mem_total")]
    pub memory_total: u64,
    #[serde(rename = "sys_virt_mem_used")]
    pub memory_used: u64,
    #[serde(rename = "sys_virt_mem_available")]
    pub memory_free: u64,
    #[serde(rename = "sys_loadavg_1")]
    pub load_1m: f64,
}

/// Body of `POST /beacon/validators`.
#[derive(Debug, Clone, Serialize)]
pub struct ValidatorsRequest<'a> {
    pub pubkeys: &'a [String],
}

/// One element of the `/beacon/validators` response array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValidatorResponse {
    pub pubkey: String,
    pub validator_index: u64,
    /// Balance in the smallest unit.
    pub balance: u64,
    pub validator: ValidatorDetails,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValidatorDetails {
    pub slashed: bool,
}
