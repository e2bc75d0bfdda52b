//! Team directory records and per-role head counts.

use crate::resource::Resource;
use crate::rights::core;
use crate::stats::count_where;
use crate::types::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserRecord {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub last_seen: String,
    pub projects: u32,
    pub join_date: String,
}

// The directory as a whole sits behind user management.
impl Resource for UserRecord {
    fn view_capability(&self) -> &str {
        core::USER_MANAGEMENT
    }

    fn edit_capability(&self) -> Option<&str> {
        Some(core::USER_MANAGEMENT)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct RoleStats {
    pub admin: usize,
    pub editor: usize,
    pub viewer: usize,
    pub active: usize,
}

impl RoleStats {
    pub fn of(users: &[UserRecord]) -> Self {
        RoleStats {
            admin: count_where(users, |u| u.role == Role::Admin),
            editor: count_where(users, |u| u.role == Role::Editor),
            viewer: count_where(users, |u| u.role == Role::Viewer),
            active: count_where(users, |u| u.status == UserStatus::Active),
        }
    }

    pub fn count(&self, role: Role) -> usize {
        match role {
            Role::Admin => self.admin,
            Role::Editor => self.editor,
            Role::Viewer => self.viewer,
        }
    }
}

/// Case-insensitive match on name or email, in input order.
pub fn search_users<'a>(users: &'a [UserRecord], term: &str) -> Vec<&'a UserRecord> {
    let needle = term.to_lowercase();
    users
        .iter()
        .filter(|u| u.name.to_lowercase().contains(&needle) || u.email.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::resolver::CapabilityResolver;

    #[test]
    fn test_role_stats() {
        let users = fixtures::users();
        let stats = RoleStats::of(&users);
        assert_eq!(stats, RoleStats { admin: 2, editor: 2, viewer: 1, active: 4 });
        assert_eq!(stats.count(Role::Editor), 2);
        assert_eq!(RoleStats::of(&[]), RoleStats::default());
    }

    #[test]
    fn test_search_users_by_name_or_email() {
        let users = fixtures::users();
        let names: Vec<&str> = search_users(&users, "KIM").iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["David Kim"]);
        assert_eq!(search_users(&users, "emily.r@").len(), 1);
        assert_eq!(search_users(&users, "rtcamp.com").len(), 5);
        assert!(search_users(&users, "nobody").is_empty());
    }

    #[test]
    fn test_directory_visible_only_with_user_management() {
        let resolver = CapabilityResolver::default();
        let users = fixtures::users();
        assert_eq!(resolver.filter_visible(Role::Admin, &users).len(), 5);
        assert!(resolver.filter_visible(Role::Editor, &users).is_empty());
    }
}
