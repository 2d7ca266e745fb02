// SPDX-License-Identifier: MIT

//! Leaderboard data loading.
//!
//! Periods map to point fields on the user document. The store returns
//! the top N by that field, but its ordering is treated as an
//! implementation detail: rows are re-sorted descending here before any
//! rank is assigned.

use crate::db::FirestoreDb;
use crate::error::Result;
use crate::models::LeaderboardEntry;

/// How many rows the leaderboard shows.
pub const LEADERBOARD_LIMIT: u32 = 20;

/// Leaderboard time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Weekly,
    Monthly,
    AllTime,
}

impl Period {
    /// Parse a period name; anything unrecognized falls back to all-time.
    pub fn parse(value: &str) -> Self {
        match value {
            "weekly" => Period::Weekly,
            "monthly" => Period::Monthly,
            _ => Period::AllTime,
        }
    }

    /// The user-document field this period orders by.
    pub fn order_field(self) -> &'static str {
        match self {
            Period::Weekly => "weekly_points",
            Period::Monthly => "monthly_points",
            Period::AllTime => "stats.points",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
            Period::AllTime => "alltime",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Period::Weekly => "This Week",
            Period::Monthly => "This Month",
            Period::AllTime => "All Time",
        }
    }
}

/// Load the top users for a period, sorted descending by points.
pub async fn load_leaderboard_data(
    db: &FirestoreDb,
    period: Period,
) -> Result<Vec<LeaderboardEntry>> {
    let users = db
        .top_users_by_points(period.order_field(), LEADERBOARD_LIMIT)
        .await?;

    let mut entries: Vec<LeaderboardEntry> = users
        .iter()
        .map(|user| {
            let points = match period {
                Period::Weekly => user.weekly_points,
                Period::Monthly => user.monthly_points,
                Period::AllTime => user.stats.points,
            };
            LeaderboardEntry::from_user(user, points)
        })
        .collect();

    // Display order is decided here, never by the store.
    entries.sort_by(|a, b| b.points.cmp(&a.points));

    Ok(entries)
}
