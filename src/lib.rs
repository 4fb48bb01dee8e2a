//! groupsync — consistent group-record replication across HTTP hosts.
//!
//! Keeps a single logical record, keyed by a group identifier, present or
//! absent across a fixed set of independent hosts. Each operation applies
//! to every host or to none, approximated with a best-effort compensating
//! rollback rather than true atomicity:
//!
//! ```text
//! probe every host (GET)          fail-fast if any host unreachable
//!     → partition by state        hosts already satisfied are skipped
//!     → forward batch (POST/DELETE) concurrently
//!     → on partial failure: inverse batch over the succeeded subset,
//!       then report RollbackPerformed
//! ```

pub mod config;
pub mod connector;
pub mod error;
pub mod observability;
pub mod transport;

pub use config::GroupSyncConfig;
pub use connector::Connector;
pub use error::ConnectorError;
