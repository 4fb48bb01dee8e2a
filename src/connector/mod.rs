//! Group-record connector.
//!
//! # Data Flow
//! ```text
//! create(group_id) / delete(group_id)
//!     → probe.rs: GET every host, classify          (fail-fast barrier)
//!     → partition: hosts still needing the action
//!     → batch.rs: forward POST/DELETE fan-out       (full barrier)
//!     → on partial failure:
//!         batch.rs: inverse fan-out over the succeeded subset
//!         → report RollbackPerformed
//!     → else: success
//! ```
//!
//! # Design Decisions
//! - Each stage fans out one request per host and fully joins before the
//!   next stage starts; no pipelining across stages
//! - `create` and `delete` share one four-step routine parameterized by an
//!   operation plan (target probe state + forward action)
//! - The compensating batch is best-effort: its outcomes are logged, never
//!   verified or retried

pub mod batch;
pub mod probe;
pub mod state;

use std::sync::Arc;
use std::time::Duration;

use crate::config::GroupSyncConfig;
use crate::error::ConnectorError;
use crate::transport::{Fetch, HttpFetcher};
use crate::connector::batch::Action;
use crate::connector::state::{hosts_in, RequestState};

/// One forward/inverse pairing of the shared protocol.
struct OperationPlan {
    name: &'static str,
    /// Probe state selecting the hosts that still need the forward action.
    target: RequestState,
    forward: Action,
}

/// Keeps a single group record consistently present or absent across a
/// fixed set of HTTP hosts.
///
/// The host set is fixed for the lifetime of the connector and is not
/// deduplicated; that is the caller's responsibility.
pub struct Connector {
    hosts: Vec<String>,
    fetch: Arc<dyn Fetch>,
}

impl Connector {
    /// Connector with the production HTTP transport and the given
    /// per-request timeout.
    pub fn new(hosts: Vec<String>, timeout: Duration) -> Self {
        Self {
            hosts,
            fetch: Arc::new(HttpFetcher::new(timeout)),
        }
    }

    /// Connector with a caller-supplied transport.
    pub fn with_fetch(hosts: Vec<String>, fetch: Arc<dyn Fetch>) -> Self {
        Self { hosts, fetch }
    }

    pub fn from_config(config: &GroupSyncConfig) -> Self {
        Self::new(
            config.hosts.clone(),
            Duration::from_secs(config.group.request_timeout_secs),
        )
    }

    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    /// Ensure the record for `group_id` exists on every host.
    ///
    /// Hosts already holding the record are left untouched, so a repeated
    /// call after a full success issues no state-changing request at all.
    pub async fn create(&self, group_id: &str) -> Result<(), ConnectorError> {
        self.run(
            group_id,
            OperationPlan {
                name: "create",
                target: RequestState::NotFound,
                forward: Action::Apply,
            },
        )
        .await
    }

    /// Ensure the record for `group_id` is absent on every host.
    pub async fn delete(&self, group_id: &str) -> Result<(), ConnectorError> {
        self.run(
            group_id,
            OperationPlan {
                name: "delete",
                target: RequestState::Success,
                forward: Action::Revert,
            },
        )
        .await
    }

    /// The shared four-step protocol: probe, partition, forward batch,
    /// compensating batch on partial failure.
    async fn run(&self, group_id: &str, plan: OperationPlan) -> Result<(), ConnectorError> {
        tracing::info!(operation = plan.name, hosts = ?self.hosts, "starting operation");

        let existing = probe::run(self.fetch.as_ref(), &self.hosts, group_id).await?;
        let targets = hosts_in(&existing, plan.target);
        tracing::info!(operation = plan.name, targets = ?targets, "hosts requiring action");

        let outcome = batch::run(self.fetch.as_ref(), plan.forward, &targets, group_id).await;
        tracing::debug!(operation = plan.name, status = ?outcome, "forward batch complete");

        let failed = hosts_in(&outcome, RequestState::Fail);
        if !failed.is_empty() {
            let applied = hosts_in(&outcome, RequestState::Success);
            tracing::warn!(
                operation = plan.name,
                failed = ?failed,
                reverting = ?applied,
                "partial failure, rolling back"
            );
            let reverted =
                batch::run(self.fetch.as_ref(), plan.forward.inverse(), &applied, group_id).await;
            tracing::info!(operation = plan.name, status = ?reverted, "rollback batch complete");
            return Err(ConnectorError::RollbackPerformed { hosts: failed });
        }

        tracing::info!(operation = plan.name, "operation complete on all hosts");
        Ok(())
    }
}
