//! Connector error definitions.

use thiserror::Error;

/// Failure outcomes of a connector operation.
///
/// Per-host transport failures never surface here directly; each stage
/// downgrades them to a `Fail` classification for that host and returns a
/// complete status map regardless.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectorError {
    /// The probe stage found at least one host unreachable or erroring.
    /// The operation aborted before any state-changing request was issued,
    /// so no compensation was needed.
    #[error("hosts not responding during probe: {hosts:?}")]
    HostUnreachable { hosts: Vec<String> },

    /// The forward batch partially failed and a compensating batch was
    /// issued to the hosts that had succeeded. The compensation is
    /// best-effort: its own per-host outcomes are logged but never
    /// verified or retried. Carries the hosts that failed the forward
    /// batch.
    #[error("operation rolled back, failed hosts: {hosts:?}")]
    RollbackPerformed { hosts: Vec<String> },
}
