//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate; the library only emits
//!   events and never installs a global subscriber
//! - Subscriber initialization lives here and is called by the binary
//! - Log level configurable via environment (`RUST_LOG`)

pub mod logging;
