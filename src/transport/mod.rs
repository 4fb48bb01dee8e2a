//! HTTP fetch capability.
//!
//! # Data Flow
//! ```text
//! connector stages (probe / batch)
//!     → Fetch::fetch(method, host, group_id)
//!     → Some(status) on any HTTP response
//!     → None on transport failure (refused, DNS, timeout)
//! ```
//!
//! # Design Decisions
//! - Every outbound request goes through the `Fetch` trait, so the
//!   orchestration and classification logic is written once against it
//! - Production uses the reqwest-backed `HttpFetcher`; tests substitute
//!   scripted fakes
//! - Transport failures are encoded as `None` rather than an error type:
//!   the classifier treats them as just another failed status

pub mod http;

use async_trait::async_trait;

pub use http::HttpFetcher;

/// HTTP method used against the per-host group endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

/// Single-request HTTP capability.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Issue one request to `host`'s group endpoint. Returns the numeric
    /// status code of whatever response the host produced, or `None` if
    /// the request failed at the transport level.
    async fn fetch(&self, method: HttpMethod, host: &str, group_id: &str) -> Option<u16>;
}
