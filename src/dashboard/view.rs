//! Per-role dashboard snapshot.

use rand_core::RngCore;

use crate::dashboard::analytics::{ChartPanel, ChartSeries, RealtimeMetric, CHART_DAYS};
use crate::dashboard::cards::{visible_cards, StatCard};
use crate::dashboard::content::{ContentAccess, ContentLibrary, ContentSummary};
use crate::dashboard::nav::{enabled_tabs, Tab, TabState};
use crate::dashboard::projects::{recent, Project, ProjectsSummary, RECENT_PROJECTS};
use crate::dashboard::users::{RoleStats, UserRecord};
use crate::resolver::CapabilityResolver;
use crate::types::Role;

/// Everything the dashboard displays, before role gating.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DashboardData {
    pub cards: Vec<StatCard>,
    pub content: ContentLibrary,
    pub users: Vec<UserRecord>,
    pub projects: Vec<Project>,
    /// Overview chart.
    #[serde(default)]
    pub performance: ChartSeries,
    #[serde(default)]
    pub traffic: ChartSeries,
    #[serde(default)]
    pub engagement: ChartSeries,
    #[serde(default)]
    pub metrics: Vec<RealtimeMetric>,
}

impl DashboardData {
    /// Replaces the three chart series with fresh `CHART_DAYS`-day random series.
    pub fn randomize_charts<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        self.performance = ChartSeries::random("Performance Overview", rng, CHART_DAYS);
        self.traffic = ChartSeries::random("Traffic Analytics", rng, CHART_DAYS);
        self.engagement = ChartSeries::random("User Engagement", rng, CHART_DAYS);
    }
}

/// The always-open overview tab: performance chart and the latest projects.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct OverviewSection {
    pub performance: ChartPanel,
    pub recent_projects: Vec<Project>,
}

/// The analytics tab: traffic and engagement charts plus real-time metrics.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct AnalyticsSection {
    pub charts: Vec<ChartPanel>,
    pub metrics: Vec<RealtimeMetric>,
}

/// What one role sees. Sections behind a disabled tab are `None`.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DashboardView {
    pub role: Role,
    pub tabs: Vec<TabState>,
    pub cards: Vec<StatCard>,
    pub projects: ProjectsSummary,
    pub overview: OverviewSection,
    pub analytics: Option<AnalyticsSection>,
    pub content_access: ContentAccess,
    pub content: Option<ContentSummary>,
    pub users: Option<RoleStats>,
}

impl DashboardView {
    pub fn for_role(resolver: &CapabilityResolver, role: Role, data: &DashboardData) -> Self {
        let tabs = enabled_tabs(resolver, role);
        let tab_enabled = |tab: Tab| tabs.iter().any(|s| s.tab == tab && s.enabled);

        let overview = OverviewSection {
            performance: ChartPanel::of(&data.performance),
            recent_projects: recent(&data.projects, RECENT_PROJECTS).to_vec(),
        };
        let analytics = tab_enabled(Tab::Analytics).then(|| AnalyticsSection {
            charts: vec![ChartPanel::of(&data.traffic), ChartPanel::of(&data.engagement)],
            metrics: data.metrics.clone(),
        });
        let content_access = ContentAccess::for_role(resolver, role);
        let content = tab_enabled(Tab::Content).then(|| data.content.summary());
        let users = tab_enabled(Tab::Users).then(|| RoleStats::of(&data.users));

        let view = DashboardView {
            role,
            cards: visible_cards(role, &data.cards).into_iter().cloned().collect(),
            projects: ProjectsSummary::of(&data.projects),
            overview,
            analytics,
            content_access,
            content,
            users,
            tabs,
        };
        tracing::debug!(
            %role,
            cards = view.cards.len(),
            enabled_tabs = view.enabled_tabs().count(),
            "Built dashboard view"
        );
        view
    }

    pub fn enabled_tabs(&self) -> impl Iterator<Item = Tab> + '_ {
        self.tabs.iter().filter(|s| s.enabled).map(|s| s.tab)
    }

    pub fn to_json(&self) -> Result<String, crate::error::AuthzError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
