//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for groupsync.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GroupSyncConfig {
    /// Hosts the group record is kept consistent across, in order.
    /// Duplicates are not removed.
    pub hosts: Vec<String>,

    /// Settings for requests against the per-host group endpoint.
    pub group: GroupConfig,
}

/// Per-request settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GroupConfig {
    /// Per-request timeout in seconds. A timed-out request is classified
    /// exactly like a transport error for that host.
    pub request_timeout_secs: u64,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 5,
        }
    }
}
