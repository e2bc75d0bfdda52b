//!
//! The role → capability map, the single source of truth for authorization.
//!
//! A `RoleCapabilityMap` is validated once and never mutated afterwards:
//! every role of the closed set is present and holds at least one capability.
//! Changing a role's grants means building a new map with [`RoleCapabilityMap::with_role`].

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::AuthzError;
use crate::rights::core;
use crate::types::{Capability, CapabilitySet, Role};

/// Immutable mapping from every [`Role`] to its non-empty [`CapabilitySet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleCapabilityMap {
    // Indexed by `Role::index()`; always fully populated.
    grants: [CapabilitySet; 3],
}

/// On-disk form of a policy: `{ "roles": { "<role>": ["<capability>", ...] } }`.
///
/// Keys and tokens are kept as raw strings so validation failures map onto
/// precise `AuthzError` variants instead of generic parse errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyDocument {
    pub roles: BTreeMap<String, Vec<String>>,
}

impl RoleCapabilityMap {
    /// Builds a map from `(role, capabilities)` pairs.
    ///
    /// # Errors
    /// `InvalidPolicy` if a role appears twice, a role is missing, or a role's
    /// capability list is empty. Duplicate capabilities within one role collapse.
    pub fn new<I, C>(grants: I) -> Result<Self, AuthzError>
    where
        I: IntoIterator<Item = (Role, C)>,
        C: IntoIterator<Item = Capability>,
    {
        let mut slots: [Option<CapabilitySet>; 3] = [None, None, None];
        for (role, caps) in grants {
            let slot = &mut slots[role.index()];
            if slot.is_some() {
                return Err(AuthzError::InvalidPolicy(format!("role {role} is defined more than once")));
            }
            let set: CapabilitySet = caps.into_iter().collect();
            if set.is_empty() {
                return Err(AuthzError::InvalidPolicy(format!("role {role} grants no capabilities")));
            }
            *slot = Some(set);
        }

        let [admin, editor, viewer] = slots;
        let missing = |role: Role| AuthzError::InvalidPolicy(format!("role {role} is not defined"));
        let map = RoleCapabilityMap {
            grants: [
                admin.ok_or_else(|| missing(Role::Admin))?,
                editor.ok_or_else(|| missing(Role::Editor))?,
                viewer.ok_or_else(|| missing(Role::Viewer))?,
            ],
        };
        tracing::debug!(
            admin = map.grants[0].len(),
            editor = map.grants[1].len(),
            viewer = map.grants[2].len(),
            "Built role capability map"
        );
        Ok(map)
    }

    /// The dashboard's built-in grants.
    ///
    /// * admin: `full-access`, `user-management`, `analytics`, `content-edit`
    /// * editor: `content-edit`, `content-view`, `limited-analytics`
    /// * viewer: `content-view`, `basic-analytics`
    pub fn dashboard_defaults() -> Self {
        let set = |tokens: &[&'static str]| -> CapabilitySet {
            tokens.iter().copied().map(Capability::from_static).collect()
        };
        RoleCapabilityMap {
            grants: [
                set(&[core::FULL_ACCESS, core::USER_MANAGEMENT, core::ANALYTICS, core::CONTENT_EDIT]),
                set(&[core::CONTENT_EDIT, core::CONTENT_VIEW, core::LIMITED_ANALYTICS]),
                set(&[core::CONTENT_VIEW, core::BASIC_ANALYTICS]),
            ],
        }
    }

    /// Validates a parsed [`PolicyDocument`].
    pub fn from_document(doc: PolicyDocument) -> Result<Self, AuthzError> {
        let mut grants = Vec::with_capacity(doc.roles.len());
        for (name, tokens) in doc.roles {
            let role: Role = name.parse()?;
            let caps = tokens.into_iter().map(Capability::new).collect::<Result<Vec<_>, _>>()?;
            grants.push((role, caps));
        }
        Self::new(grants)
    }

    /// Parses and validates a JSON policy document.
    pub fn from_json(json: &str) -> Result<Self, AuthzError> {
        let doc: PolicyDocument = serde_json::from_str(json)?;
        Self::from_document(doc)
    }

    /// Reads a JSON policy document from `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AuthzError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading policy file");
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Converts the map back into its document form (capabilities sorted).
    pub fn to_document(&self) -> PolicyDocument {
        let roles = Role::ALL
            .iter()
            .map(|role| {
                let caps: Vec<String> = self.get(*role).sorted().into_iter().map(|c| c.as_str().to_string()).collect();
                (role.as_str().to_string(), caps)
            })
            .collect();
        PolicyDocument { roles }
    }

    /// Capabilities granted to `role`. Never empty.
    #[inline]
    pub fn get(&self, role: Role) -> &CapabilitySet {
        &self.grants[role.index()]
    }

    /// Returns a new map in which `role` holds exactly `capabilities`.
    /// `self` is left unchanged.
    pub fn with_role<C>(&self, role: Role, capabilities: C) -> Result<Self, AuthzError>
    where
        C: IntoIterator<Item = Capability>,
    {
        let set: CapabilitySet = capabilities.into_iter().collect();
        if set.is_empty() {
            return Err(AuthzError::InvalidPolicy(format!("role {role} grants no capabilities")));
        }
        let mut grants = self.grants.clone();
        grants[role.index()] = set;
        tracing::debug!(%role, "Rebuilt role capability map with replaced grants");
        Ok(RoleCapabilityMap { grants })
    }

    /// Iterates `(role, capabilities)` in `Role::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &CapabilitySet)> {
        Role::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}

impl Default for RoleCapabilityMap {
    fn default() -> Self {
        Self::dashboard_defaults()
    }
}

impl serde::Serialize for RoleCapabilityMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_document().serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for RoleCapabilityMap {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let doc = PolicyDocument::deserialize(deserializer)?;
        Self::from_document(doc).map_err(serde::de::Error::custom)
    }
}
