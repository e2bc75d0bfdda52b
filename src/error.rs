//!
//! Defines error types for the RoleGate authorization core.

/// Represents errors that can occur while building a policy or resolving a role.
///
/// Only `UnknownRole` can surface from the query side, and only when a role
/// arrives as a string. Everything else is raised while constructing or
/// loading a `RoleCapabilityMap`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthzError {
    /// The role name is not part of the closed role set.
    #[error("Unknown role: {0:?}")]
    UnknownRole(String),
    /// A capability token failed syntax validation.
    #[error("Invalid capability token: {0:?}")]
    InvalidCapability(String),
    /// The role/capability map violates a structural invariant (missing role, empty grants, ...).
    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),
    /// The policy document could not be read or parsed.
    #[error("Policy configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for AuthzError {
    fn from(err: serde_json::Error) -> Self {
        AuthzError::Config(err.to_string())
    }
}

impl From<std::io::Error> for AuthzError {
    fn from(err: std::io::Error) -> Self {
        AuthzError::Config(err.to_string())
    }
}
