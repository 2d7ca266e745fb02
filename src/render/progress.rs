// SPDX-License-Identifier: MIT

//! Class progress markup.

use chrono::{DateTime, Utc};

use crate::models::{ClassData, Student};
use crate::render::escape_html;
use crate::services::progress::class_progress;

/// Class progress summary fragment.
///
/// Pure: identical inputs with a frozen `now` produce byte-identical
/// markup.
pub fn render_class_progress(
    class: &ClassData,
    students: &[Student],
    now: DateTime<Utc>,
) -> String {
    let progress = class_progress(students, now);
    let heading = if class.name.is_empty() {
        "Class Progress".to_string()
    } else {
        escape_html(&class.name)
    };

    format!(
        "<div class=\"class-progress\">\
         <h2>{}</h2>\
         <div class=\"progress-stats\">\
         <div class=\"stat\"><span class=\"stat-value\">{}</span>\
         <span class=\"stat-label\">Students</span></div>\
         <div class=\"stat\"><span class=\"stat-value\">{}</span>\
         <span class=\"stat-label\">Active (30 days)</span></div>\
         </div>\
         </div>",
        heading, progress.total_students, progress.active_students
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_render_is_deterministic() {
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
        let class = ClassData {
            name: "Algebra I".to_string(),
        };
        let students = vec![Student {
            class_id: "c1".to_string(),
            last_activity: Some("2026-03-01T08:00:00Z".to_string()),
        }];

        let first = render_class_progress(&class, &students, now);
        let second = render_class_progress(&class, &students, now);
        assert_eq!(first, second);
        assert!(first.contains("Algebra I"));
    }

    #[test]
    fn test_counts_rendered() {
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
        let students = vec![
            Student {
                class_id: "c1".to_string(),
                last_activity: Some(crate::time_utils::format_utc_rfc3339(now)),
            },
            Student {
                class_id: "c1".to_string(),
                last_activity: Some(crate::time_utils::format_utc_rfc3339(
                    now - Duration::days(40),
                )),
            },
        ];

        let markup = render_class_progress(&ClassData::default(), &students, now);
        assert!(markup.contains("<span class=\"stat-value\">2</span>"));
        assert!(markup.contains("<span class=\"stat-value\">1</span>"));
        assert!(markup.contains("Class Progress"));
    }
}
