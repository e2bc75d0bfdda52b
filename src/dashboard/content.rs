//! Content library: articles, pages and media, plus the per-role access rule.

use crate::resolver::CapabilityResolver;
use crate::resource::Resource;
use crate::rights::core;
use crate::stats::{count_where, parse_compact_count, sum_field};
use crate::types::{GateMode, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Published,
    Draft,
    Review,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Article {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub status: ContentStatus,
    pub last_modified: String,
    /// Compact view counter as displayed (`"12.5K"`).
    pub views: String,
    pub category: String,
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Page {
    pub id: u32,
    pub title: String,
    pub status: ContentStatus,
    pub last_modified: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MediaItem {
    pub id: u32,
    pub name: String,
    pub kind: MediaKind,
    pub size: String,
    pub uploaded: String,
}

macro_rules! content_resource {
    ($($ty:ty),+) => {
        $(
            impl Resource for $ty {
                fn view_capability(&self) -> &str {
                    core::CONTENT_VIEW
                }

                fn edit_capability(&self) -> Option<&str> {
                    Some(core::CONTENT_EDIT)
                }
            }
        )+
    };
}

content_resource!(Article, Page, MediaItem);

/// What `role` may do in the content library.
///
/// Viewing is an any-of gate over `content-view` and `content-edit`, so roles
/// that can edit can always browse. Editing needs `content-edit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ContentAccess {
    pub can_view: bool,
    pub can_edit: bool,
}

impl ContentAccess {
    pub fn for_role(resolver: &CapabilityResolver, role: Role) -> Self {
        ContentAccess {
            can_view: resolver.is_tab_enabled(role, [core::CONTENT_VIEW, core::CONTENT_EDIT], GateMode::Any),
            can_edit: resolver.has(role, core::CONTENT_EDIT),
        }
    }
}

/// Article counters shown above the library.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ContentSummary {
    pub total_articles: usize,
    pub published: usize,
    pub drafts: usize,
    pub in_review: usize,
    /// Sum of parsed view counters; unparseable counters count as zero.
    pub total_views: f64,
}

impl ContentSummary {
    pub fn of(articles: &[Article]) -> Self {
        ContentSummary {
            total_articles: articles.len(),
            published: count_where(articles, |a| a.status == ContentStatus::Published),
            drafts: count_where(articles, |a| a.status == ContentStatus::Draft),
            in_review: count_where(articles, |a| a.status == ContentStatus::Review),
            total_views: sum_field(articles, |a| parse_compact_count(&a.views).unwrap_or(0.0)),
        }
    }

    /// Total views in whole thousands, e.g. `"35K"`.
    pub fn views_label(&self) -> String {
        format!("{}K", (self.total_views / 1000.0).floor() as u64)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContentLibrary {
    pub articles: Vec<Article>,
    pub media: Vec<MediaItem>,
    pub pages: Vec<Page>,
}

impl ContentLibrary {
    pub fn summary(&self) -> ContentSummary {
        ContentSummary::of(&self.articles)
    }

    /// Articles `role` can browse: all of them when content access is granted, none otherwise.
    pub fn visible_articles(&self, resolver: &CapabilityResolver, role: Role) -> Vec<&Article> {
        if ContentAccess::for_role(resolver, role).can_view {
            self.articles.iter().collect()
        } else {
            Vec::new()
        }
    }

    pub fn editable_articles(&self, resolver: &CapabilityResolver, role: Role) -> Vec<&Article> {
        resolver.filter_editable(role, &self.articles)
    }

    /// Case-insensitive match on title or author. An empty term matches everything.
    pub fn search_articles(&self, term: &str) -> Vec<&Article> {
        let needle = term.to_lowercase();
        self.articles
            .iter()
            .filter(|a| a.title.to_lowercase().contains(&needle) || a.author.to_lowercase().contains(&needle))
            .collect()
    }
}
