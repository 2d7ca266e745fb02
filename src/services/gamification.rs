// SPDX-License-Identifier: MIT

//! Streak and points engine.
//!
//! Streak transitions compare the user's last-active day against "today"
//! and "yesterday" at day granularity in the configured local offset.
//! The transition itself is a pure function; `update_user_streak` wires
//! it to the store. Point awards go through a single atomic store write
//! covering both the counters and the history entry.

use chrono::{DateTime, FixedOffset, Utc};

use crate::db::FirestoreDb;
use crate::error::{AppError, Result};
use crate::services::UiEffect;
use crate::time_utils::{format_utc_rfc3339, local_day, parse_rfc3339};

/// Result of a streak transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakUpdate {
    pub streak_days: u32,
    /// False when the user was already counted today and nothing needs
    /// to be written.
    pub changed: bool,
}

/// Compute the next streak value.
///
/// - last active yesterday: streak continues, +1
/// - last active before yesterday: streak broken, reset to 1
/// - last active today: already counted, no change
/// - no prior activity: streak starts at 1
///
/// A missed day resets to 1, never 0. Not idempotent across day
/// boundaries; the bootstrap calls this once per session.
pub fn streak_transition(
    last_active: Option<DateTime<Utc>>,
    streak_days: u32,
    now: DateTime<Utc>,
    offset: FixedOffset,
) -> StreakUpdate {
    let today = local_day(now, offset);

    let Some(last_active) = last_active else {
        return StreakUpdate {
            streak_days: 1,
            changed: true,
        };
    };

    let last_day = local_day(last_active, offset);
    let days_since = (today - last_day).num_days();

    if days_since == 0 {
        StreakUpdate {
            streak_days,
            changed: false,
        }
    } else if days_since == 1 {
        StreakUpdate {
            streak_days: streak_days + 1,
            changed: true,
        }
    } else {
        StreakUpdate {
            streak_days: 1,
            changed: true,
        }
    }
}

/// Apply the streak transition to a stored user.
///
/// Reads `users/{id}`, computes the transition from the *previous*
/// `stats.last_active`, then writes back the streak and a fresh
/// `last_active` in one field-masked update; point counters awarded
/// between the read and the write are not touched. The transition must
/// see the pre-session timestamp, so `last_active` is only refreshed
/// after it is computed. A missing user is a silent no-op: first-run
/// provisioning has not happened yet and the streak starts with the
/// created record.
pub async fn update_user_streak(
    db: &FirestoreDb,
    user_id: &str,
    now: DateTime<Utc>,
    offset: FixedOffset,
) -> Result<()> {
    let Some(mut user) = db.get_user(user_id).await? else {
        tracing::debug!(user_id, "Streak update skipped, user not provisioned");
        return Ok(());
    };

    let last_active = user.stats.last_active.as_deref().and_then(parse_rfc3339);
    let update = streak_transition(last_active, user.stats.streak_days, now, offset);

    user.stats.streak_days = update.streak_days;
    user.stats.last_active = Some(format_utc_rfc3339(now));
    db.update_user_streak_fields(&user).await?;

    if update.changed {
        tracing::info!(user_id, streak_days = update.streak_days, "Streak updated");
    } else {
        tracing::debug!(user_id, "Streak already counted today");
    }
    Ok(())
}

/// Outcome of a point award: the committed total plus the UI effects the
/// client should play.
#[derive(Debug, Clone)]
pub struct AwardOutcome {
    pub new_total: i64,
    pub effects: Vec<UiEffect>,
}

/// Award points to a user.
///
/// Counters and history entry commit in one atomic store write; there is
/// no retry and no partial state to roll back. On success the outcome
/// carries the points animation command for the caller's effect handler.
pub async fn award_points(
    db: &FirestoreDb,
    user_id: &str,
    points: i64,
    reason: &str,
    now: DateTime<Utc>,
) -> Result<AwardOutcome> {
    if points <= 0 {
        return Err(AppError::BadRequest(
            "Point awards must be positive".to_string(),
        ));
    }

    let new_total = db
        .award_points_atomic(user_id, points, reason, &format_utc_rfc3339(now))
        .await?;

    Ok(AwardOutcome {
        new_total,
        effects: vec![UiEffect::points_animation(points)],
    })
}
