//!
//! Capability algebra for RoleGate.
//! Defines the well-known capability tokens used by the dashboard and the
//! set checks (`holds`, `satisfies`) that every gate in the crate goes through.

use crate::types::{CapabilitySet, GateMode};

/// Capability tokens granted by the built-in dashboard policy.
/// The catalog is open: policies may grant tokens not listed here.
pub mod core {
    /// Unrestricted administrative access marker.
    pub const FULL_ACCESS: &str = "full-access";
    /// Manage team members and their roles.
    pub const USER_MANAGEMENT: &str = "user-management";
    /// Full analytics dashboards.
    pub const ANALYTICS: &str = "analytics";
    /// Create and modify content.
    pub const CONTENT_EDIT: &str = "content-edit";
    /// Browse the content library.
    pub const CONTENT_VIEW: &str = "content-view";
    /// Reduced analytics for editors.
    pub const LIMITED_ANALYTICS: &str = "limited-analytics";
    /// Headline analytics for viewers.
    pub const BASIC_ANALYTICS: &str = "basic-analytics";

    /// Every built-in token.
    pub const ALL: [&str; 7] = [
        FULL_ACCESS,
        USER_MANAGEMENT,
        ANALYTICS,
        CONTENT_EDIT,
        CONTENT_VIEW,
        LIMITED_ANALYTICS,
        BASIC_ANALYTICS,
    ];
}

/// Checks whether `have` contains `need`.
///
/// There is no implication between capabilities: holding `full-access` does
/// not grant `content-view`. A grant is exactly what the policy lists.
#[inline]
pub fn holds(have: &CapabilitySet, need: &str) -> bool {
    have.contains(need)
}

/// Checks whether `have` satisfies a multi-capability requirement.
///
/// # Arguments
/// * `have` - The capabilities currently held.
/// * `need` - The required capabilities.
/// * `mode` - `Any` needs at least one of `need`; `All` needs every one.
///
/// # Returns
/// For an empty `need`, `Any` yields `false` (nothing to match) and `All`
/// yields `true` (nothing missing).
pub fn satisfies<I>(have: &CapabilitySet, need: I, mode: GateMode) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut need = need.into_iter();
    match mode {
        GateMode::Any => need.any(|c| holds(have, c.as_ref())),
        GateMode::All => need.all(|c| holds(have, c.as_ref())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Capability;

    fn set(tokens: &[&str]) -> CapabilitySet {
        tokens.iter().map(|t| Capability::new(*t).unwrap()).collect()
    }

    #[test]
    fn test_builtin_tokens_are_well_formed() {
        for token in core::ALL {
            assert!(Capability::is_valid_token(token), "{token}");
        }
    }

    #[test]
    fn test_holds_is_exact() {
        let have = set(&[core::FULL_ACCESS]);
        assert!(holds(&have, core::FULL_ACCESS));
        // full-access is a marker, not a wildcard.
        assert!(!holds(&have, core::CONTENT_VIEW));
    }

    #[test]
    fn test_satisfies_any_and_all() {
        let have = set(&[core::CONTENT_VIEW, core::BASIC_ANALYTICS]);
        let need = [core::CONTENT_EDIT, core::CONTENT_VIEW];
        assert!(satisfies(&have, need, GateMode::Any));
        assert!(!satisfies(&have, need, GateMode::All));
        assert!(satisfies(&have, [core::CONTENT_VIEW, core::BASIC_ANALYTICS], GateMode::All));
    }

    #[test]
    fn test_satisfies_empty_requirement() {
        let have = set(&[core::CONTENT_VIEW]);
        let none: [&str; 0] = [];
        assert!(!satisfies(&have, none, GateMode::Any));
        assert!(satisfies(&have, none, GateMode::All));
    }

    #[test]
    fn test_satisfies_ignores_malformed_tokens() {
        let have = set(&[core::ANALYTICS]);
        assert!(!satisfies(&have, ["NOT VALID"], GateMode::Any));
        assert!(satisfies(&have, ["NOT VALID", core::ANALYTICS], GateMode::Any));
    }
}
