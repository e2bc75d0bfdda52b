//! Dashboard surfaces built on the resolver.
//!
//! Each submodule models one area of the enterprise dashboard as plain data
//! plus pure summaries. Nothing here renders; callers receive values to display.

pub mod analytics;
pub mod cards;
pub mod content;
pub mod nav;
pub mod projects;
pub mod users;
pub mod view;

pub use analytics::{ChartPanel, ChartPoint, ChartSeries, ChartSummary, RealtimeMetric};
pub use cards::{visible_cards, ChangeDirection, StatCard};
pub use content::{Article, ContentAccess, ContentLibrary, ContentStatus, ContentSummary, MediaItem, MediaKind, Page};
pub use nav::{enabled_tabs, Tab, TabGate, TabState};
pub use projects::{recent, Project, ProjectStatus, ProjectsSummary, RECENT_PROJECTS};
pub use users::{RoleStats, UserRecord, UserStatus};
pub use view::{AnalyticsSection, DashboardData, DashboardView, OverviewSection};
