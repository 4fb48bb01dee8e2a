//! reqwest-backed fetch implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::transport::{Fetch, HttpMethod};

/// Production [`Fetch`] implementation.
///
/// One client per connector; connections are pooled per host. The
/// per-request timeout is applied at construction, so a slow host resolves
/// to `None` without blocking its batch indefinitely.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client }
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, method: HttpMethod, host: &str, group_id: &str) -> Option<u16> {
        let url = format!("http://{}/v1/group/", host);
        let request = match method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        match request.query(&[("group_id", group_id)]).send().await {
            Ok(response) => Some(response.status().as_u16()),
            Err(e) => {
                tracing::warn!(host = %host, method = ?method, error = %e, "request failed");
                None
            }
        }
    }
}
