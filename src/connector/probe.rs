//! Probe stage: read-only existence check across the host set.

use futures_util::future::join_all;

use crate::connector::state::{classify, hosts_in, HostStatusMap, RequestState};
use crate::error::ConnectorError;
use crate::transport::{Fetch, HttpMethod};

/// Query every host for the record concurrently and classify each answer.
///
/// Fail-fast: if any host is unreachable or errors, the whole parent
/// operation aborts with `HostUnreachable` before any mutation has been
/// attempted. On success the returned map covers every probed host and
/// holds only `Success` / `NotFound` values.
pub async fn run(
    fetch: &dyn Fetch,
    hosts: &[String],
    group_id: &str,
) -> Result<HostStatusMap, ConnectorError> {
    let requests = hosts.iter().map(|host| async move {
        let status = fetch.fetch(HttpMethod::Get, host, group_id).await;
        (host.clone(), classify(status, true))
    });
    let result: HostStatusMap = join_all(requests).await.into_iter().collect();

    let failed = hosts_in(&result, RequestState::Fail);
    if !failed.is_empty() {
        tracing::error!(hosts = ?failed, "operation rejected, hosts not responding");
        return Err(ConnectorError::HostUnreachable { hosts: failed });
    }

    Ok(result)
}
