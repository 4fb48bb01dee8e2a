//! Request outcome classification.

use std::collections::HashMap;

/// Outcome of a single request against one host.
///
/// Computed fresh per (host, request); never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    /// The host answered 200.
    Success,
    /// The host answered 404 to a probe: the record is absent, which is an
    /// expected answer there, not an error.
    NotFound,
    /// Anything else, including transport-level failure.
    Fail,
}

/// Per-host outcomes for one stage. Keys are exactly the hosts the stage
/// was invoked over; no host is dropped or duplicated.
pub type HostStatusMap = HashMap<String, RequestState>;

/// Classify a response status for one host.
///
/// `status` is `None` when the request failed at the transport level
/// (connection refused, DNS failure, timeout). A 404 maps to `NotFound`
/// only during a probe; on a state-changing call it means the host did not
/// apply the change and counts as `Fail`. The mapping is total: everything
/// not explicitly Success or NotFound is Fail.
pub fn classify(status: Option<u16>, probe: bool) -> RequestState {
    match status {
        Some(200) => RequestState::Success,
        Some(404) if probe => RequestState::NotFound,
        _ => RequestState::Fail,
    }
}

/// Hosts in `map` classified as `state`, sorted so error payloads and log
/// lines are deterministic regardless of map iteration order.
pub fn hosts_in(map: &HostStatusMap, state: RequestState) -> Vec<String> {
    let mut hosts: Vec<String> = map
        .iter()
        .filter(|(_, s)| **s == state)
        .map(|(host, _)| host.clone())
        .collect();
    hosts.sort();
    hosts
}
