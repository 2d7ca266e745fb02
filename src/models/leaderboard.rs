//! Leaderboard view model.

use serde::Serialize;

use crate::models::User;

/// One leaderboard row, flattened from a user document with display
/// defaults applied.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub id: String,
    pub name: String,
    pub username: String,
    pub points: i64,
    pub streak: u32,
}

impl LeaderboardEntry {
    /// Flatten a user document for the given period's point field.
    pub fn from_user(user: &User, points: i64) -> Self {
        Self {
            id: user.id.clone(),
            name: if user.first_name.is_empty() {
                "Anonymous".to_string()
            } else {
                user.first_name.clone()
            },
            username: user.username.clone(),
            points,
            streak: user.stats.streak_days,
        }
    }
}
