// Shared types for the authorization core: the closed role set, the open
// capability token, the per-role capability set and the gate mode.
//
// `Role` is the only closed vocabulary. Capabilities are free-form tokens so the
// catalog can grow without touching the resolver; they are only checked for syntax.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::AuthzError;

/// Principal classification. Closed set; no runtime registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Role {
    /// Full administrative access.
    Admin,
    /// Content authoring with limited analytics.
    Editor,
    /// Read-only access.
    Viewer,
}

impl Role {
    /// Every role, in display order.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Editor, Role::Viewer];

    /// Lowercase wire name of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Editor => "editor",
            Role::Viewer => "viewer",
        }
    }

    /// Dense index into per-role tables (matches `Role::ALL`).
    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Role::Admin => 0,
            Role::Editor => 1,
            Role::Viewer => 2,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AuthzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "editor" => Ok(Role::Editor),
            "viewer" => Ok(Role::Viewer),
            other => Err(AuthzError::UnknownRole(other.to_string())),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = AuthzError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Maximum length of a capability token, in bytes.
pub const MAX_CAPABILITY_LEN: usize = 64;

/// A named permission token (`"content-edit"`, `"user-management"`, ...).
///
/// Tokens are validated on construction: non-empty, at most
/// [`MAX_CAPABILITY_LEN`] bytes, starting with a lowercase ASCII letter and
/// containing only lowercase letters, digits, `-`, `_`, `.` and `:`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Capability(String);

impl Capability {
    /// Validates `token` and wraps it.
    pub fn new(token: impl Into<String>) -> Result<Self, AuthzError> {
        let token = token.into();
        if Self::is_valid_token(&token) {
            Ok(Capability(token))
        } else {
            Err(AuthzError::InvalidCapability(token))
        }
    }

    /// Wraps a token that is known to be well formed (crate-internal constants).
    pub(crate) fn from_static(token: &'static str) -> Self {
        debug_assert!(Self::is_valid_token(token), "malformed built-in capability {token}");
        Capability(token.to_string())
    }

    /// Returns `true` if `token` satisfies the capability syntax.
    pub fn is_valid_token(token: &str) -> bool {
        let bytes = token.as_bytes();
        match bytes.first() {
            Some(first) if first.is_ascii_lowercase() => {}
            _ => return false,
        }
        bytes.len() <= MAX_CAPABILITY_LEN
            && bytes
                .iter()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || matches!(b, b'-' | b'_' | b'.' | b':'))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Capability {
    type Err = AuthzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Capability::new(s)
    }
}

impl TryFrom<String> for Capability {
    type Error = AuthzError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Capability::new(value)
    }
}

impl From<Capability> for String {
    fn from(cap: Capability) -> Self {
        cap.0
    }
}

// Lets sets of `Capability` be probed with a plain `&str`.
impl Borrow<str> for Capability {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Capability {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The immutable set of capabilities granted to a single role.
///
/// Hash-based for O(1) membership. Serialises as a sorted list so policy
/// snapshots are byte-stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySet(HashSet<Capability>);

impl CapabilitySet {
    /// Membership test by token. Unknown tokens are simply absent.
    #[inline]
    pub fn contains(&self, capability: &str) -> bool {
        self.0.contains(capability)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the set in unspecified order. Use [`CapabilitySet::sorted`] for a stable order.
    pub fn iter(&self) -> impl Iterator<Item = &Capability> {
        self.0.iter()
    }

    /// Capabilities in lexicographic order.
    pub fn sorted(&self) -> Vec<&Capability> {
        let mut caps: Vec<&Capability> = self.0.iter().collect();
        caps.sort_unstable();
        caps
    }

    /// Returns `true` if every capability of `self` is also in `other`.
    pub fn is_subset(&self, other: &CapabilitySet) -> bool {
        self.0.is_subset(&other.0)
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        CapabilitySet(iter.into_iter().collect())
    }
}

impl serde::Serialize for CapabilitySet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.sorted())
    }
}

impl<'de> serde::Deserialize<'de> for CapabilitySet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let caps = Vec::<Capability>::deserialize(deserializer)?;
        Ok(caps.into_iter().collect())
    }
}

/// How a multi-capability gate combines its requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateMode {
    /// At least one required capability must be held.
    #[default]
    Any,
    /// Every required capability must be held.
    All,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_round_trip_names() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
            assert_eq!(role.to_string(), role.as_str());
        }
    }

    #[test]
    fn test_role_parse_rejects_unknown_and_miscased() {
        assert_eq!("owner".parse::<Role>(), Err(AuthzError::UnknownRole("owner".into())));
        assert!("Admin".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_index_matches_all_order() {
        for (i, role) in Role::ALL.iter().enumerate() {
            assert_eq!(role.index(), i);
        }
    }

    #[test]
    fn test_role_serde_uses_lowercase_and_validates() {
        assert_eq!(serde_json::to_string(&Role::Editor).unwrap(), "\"editor\"");
        assert_eq!(serde_json::from_str::<Role>("\"viewer\"").unwrap(), Role::Viewer);
        assert!(serde_json::from_str::<Role>("\"owner\"").is_err());
    }

    #[test]
    fn test_capability_syntax() {
        assert!(Capability::new("content-edit").is_ok());
        assert!(Capability::new("document:read").is_ok());
        assert!(Capability::new("a.b_c-1").is_ok());

        assert!(Capability::new("").is_err());
        assert!(Capability::new("Content-Edit").is_err());
        assert!(Capability::new("-leading-dash").is_err());
        assert!(Capability::new("1st").is_err());
        assert!(Capability::new("has space").is_err());
        assert!(Capability::new("a".repeat(MAX_CAPABILITY_LEN + 1)).is_err());
        assert!(Capability::new("a".repeat(MAX_CAPABILITY_LEN)).is_ok());
    }

    #[test]
    fn test_capability_set_lookup_by_str() {
        let set: CapabilitySet = ["content-view", "basic-analytics"]
            .into_iter()
            .map(|c| Capability::new(c).unwrap())
            .collect();
        assert!(set.contains("content-view"));
        assert!(!set.contains("content-edit"));
        assert!(!set.contains("NOT A TOKEN"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_capability_set_subset() {
        let set = |tokens: &[&str]| -> CapabilitySet { tokens.iter().map(|c| Capability::new(*c).unwrap()).collect() };
        let viewer = set(&["content-view", "basic-analytics"]);
        let wider = set(&["content-view", "basic-analytics", "content-edit"]);
        assert!(viewer.is_subset(&wider));
        assert!(!wider.is_subset(&viewer));
        assert!(viewer.is_subset(&viewer));
        assert!(CapabilitySet::default().is_subset(&viewer));
    }

    #[test]
    fn test_capability_set_serialises_sorted() {
        let set: CapabilitySet = ["zeta", "alpha", "mid"]
            .into_iter()
            .map(|c| Capability::new(c).unwrap())
            .collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["alpha","mid","zeta"]"#);
    }

    #[test]
    fn test_gate_mode_default_is_any() {
        assert_eq!(GateMode::default(), GateMode::Any);
        assert_eq!(serde_json::to_string(&GateMode::All).unwrap(), "\"all\"");
    }
}
