//!
//! Authorization queries against a fixed `RoleCapabilityMap`.
//!
//! The resolver is stateless apart from the map it was built with: the active
//! role is a parameter of every call, never stored. All queries are pure, so a
//! single resolver can serve any number of threads by shared reference.

use crate::error::AuthzError;
use crate::policy::RoleCapabilityMap;
use crate::resource::Resource;
use crate::rights;
use crate::types::{CapabilitySet, GateMode, Role};

/// Answers point, filter and gate queries for a role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilityResolver {
    policy: RoleCapabilityMap,
}

impl CapabilityResolver {
    /// Creates a resolver over `policy`.
    pub fn new(policy: RoleCapabilityMap) -> Self {
        CapabilityResolver { policy }
    }

    /// The map this resolver answers from.
    pub fn policy(&self) -> &RoleCapabilityMap {
        &self.policy
    }

    /// Capabilities granted to `role`. Non-empty and identical across calls.
    #[inline]
    pub fn capabilities_of(&self, role: Role) -> &CapabilitySet {
        self.policy.get(role)
    }

    /// String-ingress variant of [`CapabilityResolver::capabilities_of`].
    ///
    /// # Errors
    /// `UnknownRole` if `role` is not one of `admin`, `editor`, `viewer`.
    pub fn capabilities_of_name(&self, role: &str) -> Result<&CapabilitySet, AuthzError> {
        let role: Role = role.parse().map_err(|e| {
            tracing::warn!(role, "Rejected unknown role name");
            e
        })?;
        Ok(self.capabilities_of(role))
    }

    /// Returns `true` if `role` holds `capability`.
    ///
    /// Total: tokens that were never granted, including malformed ones,
    /// simply yield `false`.
    #[inline]
    pub fn has(&self, role: Role, capability: &str) -> bool {
        rights::holds(self.capabilities_of(role), capability)
    }

    /// Whether `role` may see `item`.
    pub fn can_view<R: Resource + ?Sized>(&self, role: Role, item: &R) -> bool {
        self.has(role, item.view_capability())
    }

    /// Whether `role` may modify `item`. Items without an edit capability are never editable.
    pub fn can_edit<R: Resource + ?Sized>(&self, role: Role, item: &R) -> bool {
        item.edit_capability().is_some_and(|cap| self.has(role, cap))
    }

    /// Keeps the items `role` may see, in input order.
    ///
    /// Accepts anything iterable over resources, so both owned collections and
    /// `&Vec<R>` (yielding `&R`) work. The input is never modified, and
    /// re-filtering the output returns it unchanged.
    pub fn filter_visible<I>(&self, role: Role, items: I) -> Vec<I::Item>
    where
        I: IntoIterator,
        I::Item: Resource,
    {
        let visible: Vec<I::Item> = items.into_iter().filter(|item| self.can_view(role, item)).collect();
        tracing::trace!(%role, kept = visible.len(), "Filtered visible resources");
        visible
    }

    /// Keeps the items `role` may modify, in input order.
    pub fn filter_editable<I>(&self, role: Role, items: I) -> Vec<I::Item>
    where
        I: IntoIterator,
        I::Item: Resource,
    {
        let editable: Vec<I::Item> = items.into_iter().filter(|item| self.can_edit(role, item)).collect();
        tracing::trace!(%role, kept = editable.len(), "Filtered editable resources");
        editable
    }

    /// Decides whether a surface gated on `required` is enabled for `role`.
    ///
    /// # Arguments
    /// * `role` - The role being rendered.
    /// * `required` - Capabilities the surface is gated on.
    /// * `mode` - `Any`: at least one is held. `All`: every one is held.
    ///
    /// # Returns
    /// An empty `required` is never enabled under `Any` and always enabled under `All`.
    pub fn is_tab_enabled<I>(&self, role: Role, required: I, mode: GateMode) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        rights::satisfies(self.capabilities_of(role), required, mode)
    }
}
