//! Sample dashboard data for tests, benches and demos.
//!
//! Compiled only for tests or with the `test-utils` feature.

use crate::dashboard::{
    Article, ChartSeries, RealtimeMetric, ContentLibrary, ContentStatus, DashboardData, MediaItem, MediaKind, Page, Project, ProjectStatus,
    StatCard, UserRecord, UserStatus,
};
use crate::types::Role;

fn card(title: &str, value: &str, change: &str, description: &str, audience: &[Role]) -> StatCard {
    StatCard {
        title: title.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        description: description.to_string(),
        audience: audience.to_vec(),
        lower_is_better: false,
    }
}

pub fn stat_cards() -> Vec<StatCard> {
    use Role::{Admin, Editor, Viewer};
    let mut response_time = card("Response Time", "1.2s", "-0.3s", "Average load time", &[Admin, Viewer]);
    response_time.lower_is_better = true;
    vec![
        card("Active Projects", "24", "+12%", "Enterprise clients", &[Admin, Editor, Viewer]),
        card("Total Users", "1,247", "+18%", "Monthly active", &[Admin]),
        card("Content Items", "5,832", "+7%", "Published articles", &[Admin, Editor]),
        card("Performance Score", "98.5%", "+2.1%", "Site optimization", &[Admin, Editor, Viewer]),
        response_time,
        card("Uptime", "99.9%", "0%", "Last 30 days", &[Admin, Editor, Viewer]),
    ]
}

#[allow(clippy::too_many_arguments)]
fn article(
    id: u32,
    title: &str,
    author: &str,
    status: ContentStatus,
    last_modified: &str,
    views: &str,
    category: &str,
    featured: bool,
) -> Article {
    Article {
        id,
        title: title.to_string(),
        author: author.to_string(),
        status,
        last_modified: last_modified.to_string(),
        views: views.to_string(),
        category: category.to_string(),
        featured,
    }
}

pub fn content_library() -> ContentLibrary {
    use ContentStatus::{Draft, Published, Review};
    let page = |id, title: &str, status, last_modified: &str| Page {
        id,
        title: title.to_string(),
        status,
        last_modified: last_modified.to_string(),
    };
    let media = |id, name: &str, kind, size: &str, uploaded: &str| MediaItem {
        id,
        name: name.to_string(),
        kind,
        size: size.to_string(),
        uploaded: uploaded.to_string(),
    };
    ContentLibrary {
        articles: vec![
            article(1, "Building Scalable WordPress Solutions for Enterprise", "Sarah Johnson", Published, "2 hours ago", "12.5K", "Tutorial", true),
            article(2, "Modern JavaScript Frameworks in CMS Development", "Mike Chen", Draft, "1 day ago", "0", "Development", false),
            article(3, "Performance Optimization Techniques", "Emily Rodriguez", Review, "3 hours ago", "8.2K", "Performance", true),
            article(4, "Security Best Practices for Web Applications", "David Kim", Published, "1 week ago", "15.1K", "Security", false),
        ],
        media: vec![
            media(1, "hero-banner.jpg", MediaKind::Image, "2.4 MB", "2 days ago"),
            media(2, "tutorial-video.mp4", MediaKind::Video, "124 MB", "1 week ago"),
            media(3, "logo-variants.svg", MediaKind::Image, "45 KB", "3 days ago"),
        ],
        pages: vec![
            page(1, "About Us", Published, "1 week ago"),
            page(2, "Services", Published, "2 days ago"),
            page(3, "Contact", Draft, "5 hours ago"),
        ],
    }
}

pub fn users() -> Vec<UserRecord> {
    let user = |id, name: &str, email: &str, role, status, last_seen: &str, projects, join_date: &str| UserRecord {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role,
        status,
        last_seen: last_seen.to_string(),
        projects,
        join_date: join_date.to_string(),
    };
    vec![
        user(1, "Sarah Johnson", "sarah.johnson@rtcamp.com", Role::Admin, UserStatus::Active, "2 minutes ago", 8, "Jan 2023"),
        user(2, "Mike Chen", "mike.chen@rtcamp.com", Role::Editor, UserStatus::Active, "1 hour ago", 12, "Mar 2023"),
        user(3, "Emily Rodriguez", "emily.r@rtcamp.com", Role::Editor, UserStatus::Inactive, "2 days ago", 6, "Jul 2023"),
        user(4, "David Kim", "david.kim@rtcamp.com", Role::Viewer, UserStatus::Active, "30 minutes ago", 3, "Sep 2023"),
        user(5, "Lisa Wang", "lisa.wang@rtcamp.com", Role::Admin, UserStatus::Active, "5 minutes ago", 15, "Feb 2023"),
    ]
}

pub fn projects() -> Vec<Project> {
    let project = |name: &str, client: &str, status, users: &str, uptime: &str, last_update: &str, tech: &[&str], description: &str| Project {
        name: name.to_string(),
        client: client.to_string(),
        status,
        users: users.to_string(),
        uptime: uptime.to_string(),
        last_update: last_update.to_string(),
        tech: tech.iter().map(|t| t.to_string()).collect(),
        description: description.to_string(),
    };
    vec![
        project("Google Search Console", "Google", ProjectStatus::Live, "50M+", "99.99%", "2 hours ago", &["WordPress", "React", "MySQL"], "Enterprise search analytics platform"),
        project("Meta Business Hub", "Meta (Facebook)", ProjectStatus::Development, "15M+", "99.95%", "1 day ago", &["WordPress", "Vue.js", "Redis"], "Business management dashboard"),
        project("Indian Express CMS", "Indian Express", ProjectStatus::Live, "2M+", "99.97%", "6 hours ago", &["WordPress", "PHP", "MySQL"], "News content management system"),
        project("Penske Media Portal", "Penske Media", ProjectStatus::Maintenance, "800K+", "99.92%", "3 hours ago", &["WordPress", "JavaScript", "Apache"], "Media publishing platform"),
        project("Al Jazeera Digital", "Al Jazeera", ProjectStatus::Live, "5M+", "99.98%", "30 minutes ago", &["WordPress", "React", "Nginx"], "International news platform"),
    ]
}

/// A fixed 30-day series in `20..=119`, shifted by `offset`.
pub fn chart(title: &str, offset: u32) -> ChartSeries {
    ChartSeries::new(title, (0..30u32).map(|day| 20 + (day * 37 + offset) % 100))
}

pub fn realtime_metrics() -> Vec<RealtimeMetric> {
    vec![
        RealtimeMetric::new("Active Users", "1,247", "+12%"),
        RealtimeMetric::new("Page Views", "23.8K", "+8%"),
        RealtimeMetric::new("Bounce Rate", "32%", "-5%"),
        RealtimeMetric::new("Avg. Session", "4m 23s", "+15%"),
    ]
}

pub fn dashboard_data() -> DashboardData {
    DashboardData {
        cards: stat_cards(),
        content: content_library(),
        users: users(),
        projects: projects(),
        performance: chart("Performance Overview", 0),
        traffic: chart("Traffic Analytics", 11),
        engagement: chart("User Engagement", 53),
        metrics: realtime_metrics(),
    }
}
