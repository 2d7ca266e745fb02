// SPDX-License-Identifier: MIT

//! Streak engine properties.

use chrono::{Duration, TimeZone, Utc};
use studyquest::services::gamification::streak_transition;
use studyquest::time_utils::offset_from_minutes;

mod common;

#[test]
fn test_streak_sequence_over_days() {
    let offset = offset_from_minutes(0);
    let day0 = Utc.with_ymd_and_hms(2026, 4, 1, 9, 0, 0).unwrap();

    // First ever activity
    let update = streak_transition(None, 0, day0, offset);
    assert_eq!(update.streak_days, 1);

    // Three consecutive days
    let mut streak = update.streak_days;
    let mut last = day0;
    for day in 1..=3 {
        let now = day0 + Duration::days(day);
        let update = streak_transition(Some(last), streak, now, offset);
        assert_eq!(update.streak_days, 1 + day as u32);
        streak = update.streak_days;
        last = now;
    }

    // Two missed days break the streak back to 1, never 0
    let now = last + Duration::days(3);
    let update = streak_transition(Some(last), streak, now, offset);
    assert_eq!(update.streak_days, 1);
}

#[test]
fn test_second_launch_same_day_is_noop() {
    let offset = offset_from_minutes(0);
    let morning = Utc.with_ymd_and_hms(2026, 4, 1, 8, 0, 0).unwrap();
    let evening = Utc.with_ymd_and_hms(2026, 4, 1, 22, 0, 0).unwrap();

    let update = streak_transition(Some(morning), 7, evening, offset);
    assert_eq!(update.streak_days, 7);
    assert!(!update.changed);
}

#[test]
fn test_streak_never_zero_once_active() {
    let offset = offset_from_minutes(0);
    let now = Utc.with_ymd_and_hms(2026, 4, 1, 9, 0, 0).unwrap();

    for days_ago in 0..365 {
        let last = now - Duration::days(days_ago);
        let update = streak_transition(Some(last), 10, now, offset);
        assert!(update.streak_days >= 1, "streak dropped to 0 at {} days", days_ago);
    }
}

#[tokio::test]
async fn test_update_user_streak_roundtrip() {
    require_emulator!();

    let db = common::test_db().await;
    let now = Utc::now();

    let user_id = format!("streak_{}", now.timestamp_nanos_opt().unwrap_or_default());
    let mut user = studyquest::models::User::provision(
        &studyquest::identity::TelegramIdentity {
            id: user_id.clone(),
            first_name: "Streaky".to_string(),
            username: String::new(),
        },
        &studyquest::time_utils::format_utc_rfc3339(now - Duration::days(1)),
    );
    // Simulate a user last seen yesterday with a running streak
    user.stats.streak_days = 3;
    db.upsert_user(&user).await.unwrap();

    studyquest::services::gamification::update_user_streak(
        &db,
        &user_id,
        now,
        offset_from_minutes(0),
    )
    .await
    .unwrap();

    let fetched = db.get_user(&user_id).await.unwrap().unwrap();
    assert_eq!(fetched.stats.streak_days, 4);
    assert_eq!(
        fetched.stats.last_active.as_deref(),
        Some(studyquest::time_utils::format_utc_rfc3339(now).as_str())
    );
}
