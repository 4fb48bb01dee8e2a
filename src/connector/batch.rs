//! Batch-action stage: state-changing fan-out over a host subset.

use futures_util::future::join_all;

use crate::connector::state::{classify, HostStatusMap};
use crate::transport::{Fetch, HttpMethod};

/// Direction of a state-changing batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Create the record (POST).
    Apply,
    /// Remove the record (DELETE).
    Revert,
}

impl Action {
    pub fn method(self) -> HttpMethod {
        match self {
            Action::Apply => HttpMethod::Post,
            Action::Revert => HttpMethod::Delete,
        }
    }

    /// The compensating direction.
    pub fn inverse(self) -> Action {
        match self {
            Action::Apply => Action::Revert,
            Action::Revert => Action::Apply,
        }
    }
}

/// Issue `action` to every host in `hosts` concurrently and classify each
/// outcome. A transport failure on one host maps to `Fail` for that host
/// alone; sibling requests are always attempted and the returned map
/// covers the full subset.
pub async fn run(
    fetch: &dyn Fetch,
    action: Action,
    hosts: &[String],
    group_id: &str,
) -> HostStatusMap {
    let method = action.method();
    let requests = hosts.iter().map(|host| async move {
        let status = fetch.fetch(method, host, group_id).await;
        (host.clone(), classify(status, false))
    });
    join_all(requests).await.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::state::RequestState;
    use async_trait::async_trait;

    /// Fails transport-level on one designated host, answers 200 elsewhere.
    struct OneDeadHost {
        dead: String,
    }

    #[async_trait]
    impl Fetch for OneDeadHost {
        async fn fetch(&self, _method: HttpMethod, host: &str, _group_id: &str) -> Option<u16> {
            if host == self.dead {
                None
            } else {
                Some(200)
            }
        }
    }

    #[tokio::test]
    async fn test_transport_failure_does_not_abort_siblings() {
        let hosts: Vec<String> = ["node01", "node02", "node03"]
            .iter()
            .map(|h| h.to_string())
            .collect();
        let fetch = OneDeadHost {
            dead: "node02".into(),
        };

        let result = run(&fetch, Action::Apply, &hosts, "g1").await;

        // The map is total over the subset: the dead host is present as
        // Fail, the siblings completed normally.
        assert_eq!(result.len(), 3);
        assert_eq!(result["node01"], RequestState::Success);
        assert_eq!(result["node02"], RequestState::Fail);
        assert_eq!(result["node03"], RequestState::Success);
    }

    #[test]
    fn test_action_mapping() {
        assert_eq!(Action::Apply.method(), HttpMethod::Post);
        assert_eq!(Action::Revert.method(), HttpMethod::Delete);
        assert_eq!(Action::Apply.inverse(), Action::Revert);
        assert_eq!(Action::Revert.inverse(), Action::Apply);
    }
}
