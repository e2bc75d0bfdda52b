//! Headline stat cards.
//!
//! Cards are audience-gated by role rather than by capability: several cards
//! are shown to all three roles, and no single capability is held by every role.

use crate::types::Role;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    /// Signed change label, e.g. `"+12%"`, `"-0.3s"`, `"0%"`.
    pub change: String,
    pub description: String,
    pub audience: Vec<Role>,
    /// Set for metrics such as response time where a decrease is good news.
    #[serde(default)]
    pub lower_is_better: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Up,
    Down,
    Flat,
}

impl StatCard {
    pub fn is_visible_to(&self, role: Role) -> bool {
        self.audience.contains(&role)
    }

    pub fn direction(&self) -> ChangeDirection {
        match self.change.trim().chars().next() {
            Some('+') => ChangeDirection::Up,
            Some('-') => ChangeDirection::Down,
            _ => ChangeDirection::Flat,
        }
    }

    /// Whether the change should be highlighted as an improvement.
    pub fn is_favourable(&self) -> bool {
        match self.direction() {
            ChangeDirection::Up => !self.lower_is_better,
            ChangeDirection::Down => self.lower_is_better,
            ChangeDirection::Flat => false,
        }
    }
}

/// Cards whose audience includes `role`, in input order.
pub fn visible_cards(role: Role, cards: &[StatCard]) -> Vec<&StatCard> {
    cards.iter().filter(|card| card.is_visible_to(role)).collect()
}
