// SPDX-License-Identifier: MIT

//! Leaderboard markup.

use crate::models::LeaderboardEntry;
use crate::render::escape_html;
use crate::services::Period;

const MEDALS: [&str; 3] = ["\u{1F947}", "\u{1F948}", "\u{1F949}"]; // 🥇🥈🥉

/// Tabbed leaderboard shell with the weekly list pre-rendered.
///
/// `initial_list` is the already-rendered fragment for the default
/// (weekly) period; the frontend swaps `#leaderboard-list` when a tab
/// is clicked.
pub fn render_leaderboard_shell(initial_list: &str) -> String {
    let tabs: String = [Period::Weekly, Period::Monthly, Period::AllTime]
        .into_iter()
        .map(|period| {
            let active = if period == Period::Weekly {
                " active"
            } else {
                ""
            };
            format!(
                "<button class=\"tab{}\" data-period=\"{}\">{}</button>",
                active,
                period.as_str(),
                period.label()
            )
        })
        .collect();

    format!(
        "<div class=\"leaderboard\">\
         <div class=\"leaderboard-tabs\">{}</div>\
         <div id=\"leaderboard-list\">{}</div>\
         </div>",
        tabs, initial_list
    )
}

/// Ranked list fragment.
///
/// Input order is never trusted: rows are sorted descending by points
/// here, then rank = index + 1. The top three get medal glyphs and the
/// viewer's own row is highlighted.
pub fn render_leaderboard(entries: &[LeaderboardEntry], viewer: Option<&str>) -> String {
    if entries.is_empty() {
        return "<div class=\"empty-state\"><p>No scores yet. Be the first!</p></div>".to_string();
    }

    let mut ordered: Vec<&LeaderboardEntry> = entries.iter().collect();
    ordered.sort_by(|a, b| b.points.cmp(&a.points));

    let rows: String = ordered
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let rank = index + 1;
            let badge = MEDALS
                .get(index)
                .map(|m| (*m).to_string())
                .unwrap_or_else(|| rank.to_string());
            let current = if viewer == Some(entry.id.as_str()) {
                " current-user"
            } else {
                ""
            };
            let username = if entry.username.is_empty() {
                String::new()
            } else {
                format!("<span class=\"username\">@{}</span>", escape_html(&entry.username))
            };
            format!(
                "<div class=\"leaderboard-item{}\">\
                 <span class=\"rank\">{}</span>\
                 <span class=\"name\">{}</span>{}\
                 <span class=\"streak\">\u{1F525} {}</span>\
                 <span class=\"points\">{}</span>\
                 </div>",
                current,
                badge,
                escape_html(&entry.name),
                username,
                entry.streak,
                entry.points
            )
        })
        .collect();

    format!("<div class=\"leaderboard-items\">{}</div>", rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, points: i64) -> LeaderboardEntry {
        LeaderboardEntry {
            id: id.to_string(),
            name: id.to_string(),
            username: String::new(),
            points,
            streak: 0,
        }
    }

    #[test]
    fn test_ranks_follow_points_not_input_order() {
        let entries = vec![entry("a", 50), entry("b", 90)];
        let markup = render_leaderboard(&entries, None);

        let gold = markup.find('\u{1F947}').unwrap();
        let silver = markup.find('\u{1F948}').unwrap();
        let b_pos = markup.find(">b<").unwrap();
        let a_pos = markup.find(">a<").unwrap();

        assert!(gold < b_pos && b_pos < silver && silver < a_pos);
    }

    #[test]
    fn test_fourth_place_gets_number() {
        let entries = vec![
            entry("a", 40),
            entry("b", 30),
            entry("c", 20),
            entry("d", 10),
        ];
        let markup = render_leaderboard(&entries, None);
        assert!(markup.contains("<span class=\"rank\">4</span>"));
    }

    #[test]
    fn test_viewer_row_highlighted() {
        let entries = vec![entry("a", 40), entry("b", 30)];
        let markup = render_leaderboard(&entries, Some("b"));
        assert_eq!(markup.matches("current-user").count(), 1);
    }

    #[test]
    fn test_empty_state() {
        let markup = render_leaderboard(&[], None);
        assert!(markup.contains("empty-state"));
        assert!(!markup.contains("leaderboard-item"));
    }

    #[test]
    fn test_shell_defaults_to_weekly() {
        let markup = render_leaderboard_shell("<div></div>");
        assert!(markup.contains("class=\"tab active\" data-period=\"weekly\""));
        assert!(markup.contains("data-period=\"alltime\""));
        assert!(markup.contains("id=\"leaderboard-list\""));
    }
}
