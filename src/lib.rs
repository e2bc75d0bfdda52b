#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(deprecated)]

//!
//! RoleGate-Core is a deterministic, role-based capability model for dashboards.
//!
//! A closed set of roles maps onto open-ended capability tokens through an
//! immutable `RoleCapabilityMap`. The `CapabilityResolver` answers point,
//! filter and gate queries against that map; the active role is always passed
//! in explicitly. Checks here are advisory: anything that performs a gated
//! action must repeat them where the action is executed.

// Module for common, shared data types (Role, Capability, CapabilitySet, GateMode).
pub mod types;

// Module for capability algebra and the well-known tokens.
pub mod rights;

// Module for the role → capability map and its JSON configuration.
pub mod policy;

// Module for capability-gated items.
pub mod resource;

// Module for authorization queries.
pub mod resolver;

// Module for summary-card aggregates.
pub mod stats;

// Module for dashboard surfaces (tabs, cards, content, users, projects, analytics).
pub mod dashboard;

// Module for error types.
pub mod error;

#[cfg(any(test, feature = "test-utils"))]
pub mod fixtures;

pub use error::AuthzError;
pub use policy::{PolicyDocument, RoleCapabilityMap};
pub use resolver::CapabilityResolver;
pub use resource::{Gated, Resource};
pub use stats::{count_where, format_delta, format_trend, sum_field};
pub use types::{Capability, CapabilitySet, GateMode, Role};

/// Installs a `fmt` subscriber filtered by `RUST_LOG` (default `info`).
/// Does nothing if a global subscriber is already set.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(all(test, feature = "tracing-subscriber"))]
mod tests {
    #[test]
    fn test_init_tracing_is_idempotent() {
        super::init_tracing();
        super::init_tracing();
        tracing::info!("subscriber installed");
    }
}
