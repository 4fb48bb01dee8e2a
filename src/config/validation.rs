//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeout > 0) and host entries
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GroupSyncConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use url::Url;

use crate::config::schema::GroupSyncConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The host set is empty; there is nothing to replicate across.
    NoHosts,
    /// A host entry does not form a usable endpoint URL.
    InvalidHost { host: String },
    /// A zero timeout would classify every request as failed.
    ZeroTimeout,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NoHosts => write!(f, "host set is empty"),
            ValidationError::InvalidHost { host } => {
                write!(f, "invalid host entry: {:?}", host)
            }
            ValidationError::ZeroTimeout => write!(f, "request_timeout_secs must be > 0"),
        }
    }
}

/// Validate a parsed config, collecting every error before failing.
pub fn validate_config(config: &GroupSyncConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.hosts.is_empty() {
        errors.push(ValidationError::NoHosts);
    }
    for host in &config.hosts {
        if !is_valid_host(host) {
            errors.push(ValidationError::InvalidHost { host: host.clone() });
        }
    }

    if config.group.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// A host entry is an authority only (name or address, optional port); it
/// must survive being embedded in the endpoint URL unchanged.
fn is_valid_host(host: &str) -> bool {
    if host.trim().is_empty() || host.contains('/') || host.contains("://") {
        return false;
    }
    match Url::parse(&format!("http://{}/v1/group/", host)) {
        Ok(url) => url.host_str().is_some(),
        Err(_) => false,
    }
}
