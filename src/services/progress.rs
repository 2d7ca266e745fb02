// SPDX-License-Identifier: MIT

//! Class progress aggregates.

use chrono::{DateTime, Duration, Utc};

use crate::models::Student;
use crate::time_utils::parse_rfc3339;

/// Window for counting a student as active.
pub const ACTIVE_WINDOW_DAYS: i64 = 30;

/// Aggregate counts for the class progress view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassProgress {
    pub total_students: usize,
    pub active_students: usize,
}

/// Compute class progress from the student list.
///
/// Pure and deterministic for a given `now`: a student is active when
/// their `last_activity` is no older than 30 days. Timestamps ahead of
/// `now` (client clock skew) count as active; unparseable or absent
/// timestamps count as inactive.
pub fn class_progress(students: &[Student], now: DateTime<Utc>) -> ClassProgress {
    let cutoff = now - Duration::days(ACTIVE_WINDOW_DAYS);

    let active_students = students
        .iter()
        .filter_map(|s| s.last_activity.as_deref().and_then(parse_rfc3339))
        .filter(|last| *last >= cutoff)
        .count();

    ClassProgress {
        total_students: students.len(),
        active_students,
    }
}
