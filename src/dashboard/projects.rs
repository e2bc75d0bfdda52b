//! Client project list.

use crate::stats::{count_where, parse_compact_count, sum_field};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Live,
    Development,
    Maintenance,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Project {
    pub name: String,
    pub client: String,
    pub status: ProjectStatus,
    /// Compact audience size (`"50M+"`).
    pub users: String,
    /// Uptime label (`"99.99%"`).
    pub uptime: String,
    pub last_update: String,
    pub tech: Vec<String>,
    pub description: String,
}

impl Project {
    /// Uptime as a number, if the label is a well-formed percentage.
    pub fn uptime_percent(&self) -> Option<f64> {
        self.uptime.trim().strip_suffix('%')?.parse().ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ProjectsSummary {
    pub total: usize,
    pub live: usize,
    pub in_development: usize,
    pub in_maintenance: usize,
    /// Sum of parsed audience sizes.
    pub total_users: f64,
}

impl ProjectsSummary {
    pub fn of(projects: &[Project]) -> Self {
        ProjectsSummary {
            total: projects.len(),
            live: count_where(projects, |p| p.status == ProjectStatus::Live),
            in_development: count_where(projects, |p| p.status == ProjectStatus::Development),
            in_maintenance: count_where(projects, |p| p.status == ProjectStatus::Maintenance),
            total_users: sum_field(projects, |p| parse_compact_count(&p.users).unwrap_or(0.0)),
        }
    }
}

/// Projects listed on the overview tab.
pub const RECENT_PROJECTS: usize = 4;

/// The `limit` most recent entries for the overview panel (list is kept newest first).
pub fn recent(projects: &[Project], limit: usize) -> &[Project] {
    &projects[..projects.len().min(limit)]
}
