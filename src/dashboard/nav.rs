//! Navigation tabs and their capability gates.

use crate::resolver::CapabilityResolver;
use crate::rights::core;
use crate::types::{GateMode, Role};

/// Top-level dashboard tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Overview,
    Analytics,
    Projects,
    Content,
    Users,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Overview, Tab::Analytics, Tab::Projects, Tab::Content, Tab::Users];

    /// The gate that decides whether the tab is enabled.
    ///
    /// Content uses an any-of gate (edit OR view); the other gated tabs need a
    /// single capability. Overview and Projects are open to every role.
    pub fn gate(self) -> TabGate {
        match self {
            Tab::Overview | Tab::Projects => TabGate::open(),
            Tab::Analytics => TabGate::new(&[core::ANALYTICS], GateMode::All),
            Tab::Content => TabGate::new(&[core::CONTENT_EDIT, core::CONTENT_VIEW], GateMode::Any),
            Tab::Users => TabGate::new(&[core::USER_MANAGEMENT], GateMode::All),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Analytics => "Analytics",
            Tab::Projects => "Projects",
            Tab::Content => "Content",
            Tab::Users => "Users",
        }
    }
}

/// Required capabilities plus how they combine. An empty requirement is open.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TabGate {
    pub required: Vec<&'static str>,
    pub mode: GateMode,
}

impl TabGate {
    pub fn new(required: &[&'static str], mode: GateMode) -> Self {
        TabGate { required: required.to_vec(), mode }
    }

    /// A gate every role passes.
    pub fn open() -> Self {
        TabGate { required: Vec::new(), mode: GateMode::All }
    }

    pub fn is_open(&self) -> bool {
        self.required.is_empty()
    }

    pub fn allows(&self, resolver: &CapabilityResolver, role: Role) -> bool {
        self.is_open() || resolver.is_tab_enabled(role, &self.required, self.mode)
    }
}

/// A tab and whether `role` may open it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct TabState {
    pub tab: Tab,
    pub enabled: bool,
}

/// Every tab in display order with its enabled flag for `role`.
pub fn enabled_tabs(resolver: &CapabilityResolver, role: Role) -> Vec<TabState> {
    Tab::ALL
        .into_iter()
        .map(|tab| TabState { tab, enabled: tab.gate().allows(resolver, role) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled(role: Role) -> Vec<Tab> {
        let resolver = CapabilityResolver::default();
        enabled_tabs(&resolver, role).into_iter().filter(|s| s.enabled).map(|s| s.tab).collect()
    }

    #[test]
    fn test_admin_sees_every_tab() {
        assert_eq!(enabled(Role::Admin), Tab::ALL.to_vec());
    }

    #[test]
    fn test_editor_and_viewer_tabs() {
        let expected = vec![Tab::Overview, Tab::Projects, Tab::Content];
        assert_eq!(enabled(Role::Editor), expected);
        assert_eq!(enabled(Role::Viewer), expected);
    }

    #[test]
    fn test_tab_states_keep_display_order() {
        let resolver = CapabilityResolver::default();
        let tabs: Vec<Tab> = enabled_tabs(&resolver, Role::Viewer).into_iter().map(|s| s.tab).collect();
        assert_eq!(tabs, Tab::ALL.to_vec());
    }

    #[test]
    fn test_tab_labels() {
        let labels: Vec<&str> = Tab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["Overview", "Analytics", "Projects", "Content", "Users"]);
    }

    #[test]
    fn test_open_gate() {
        let resolver = CapabilityResolver::default();
        assert!(TabGate::open().allows(&resolver, Role::Viewer));
        assert!(Tab::Projects.gate().is_open());
        assert!(!Tab::Users.gate().is_open());
    }
}
