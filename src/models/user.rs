//! User model for storage and API.

use serde::{Deserialize, Serialize};

use crate::identity::TelegramIdentity;

/// Per-user gamification counters, nested under the user document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserStats {
    /// Consecutive active days; never drops below 1 once activity exists
    #[serde(default)]
    pub streak_days: u32,
    /// Lifetime points; always equals the sum of the user's point history
    #[serde(default)]
    pub points: i64,
    /// Last activity timestamp (RFC3339), absent until first touch
    #[serde(default)]
    pub last_active: Option<String>,
}

/// User profile stored in Firestore.
///
/// The document id is the Telegram user id (stringified).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub first_name: String,
    /// Telegram username; empty when the user has none
    #[serde(default)]
    pub username: String,
    /// When the user first launched the app (RFC3339)
    pub created_at: String,
    #[serde(default)]
    pub stats: UserStats,
    /// Points earned in the current week (leaderboard window)
    #[serde(default)]
    pub weekly_points: i64,
    /// Points earned in the current month (leaderboard window)
    #[serde(default)]
    pub monthly_points: i64,
}

impl User {
    /// Build a first-run user record with zeroed stats.
    pub fn provision(identity: &TelegramIdentity, now: &str) -> Self {
        Self {
            id: identity.id.clone(),
            first_name: identity.first_name.clone(),
            username: identity.username.clone(),
            created_at: now.to_string(),
            stats: UserStats {
                streak_days: 0,
                points: 0,
                last_active: Some(now.to_string()),
            },
            weekly_points: 0,
            monthly_points: 0,
        }
    }
}
