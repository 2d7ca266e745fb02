// SPDX-License-Identifier: MIT

//! Leaderboard view routes.
//!
//! These return HTML fragments, always with status 200: a store failure
//! degrades to inline error markup instead of failing the page.

use crate::render::{render_error_state, render_leaderboard, render_leaderboard_shell};
use crate::services::leaderboard::{load_leaderboard_data, Period};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/views/leaderboard", get(shell))
        .route("/views/leaderboard/{period}", get(list))
}

#[derive(Debug, Deserialize)]
pub struct ViewerQuery {
    /// Current user's id for row highlighting
    pub viewer: Option<String>,
}

/// Render one period's list, degrading to error markup on failure.
async fn render_period(state: &AppState, period: Period, viewer: Option<&str>) -> String {
    match load_leaderboard_data(&state.db, period).await {
        Ok(entries) => render_leaderboard(&entries, viewer),
        Err(err) => {
            tracing::warn!(period = period.as_str(), error = %err, "Leaderboard load failed");
            render_error_state(&format!("Failed to load leaderboard: {}", err))
        }
    }
}

/// Tabbed shell with the default (weekly) period pre-rendered.
async fn shell(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ViewerQuery>,
) -> Html<String> {
    let list = render_period(&state, Period::Weekly, query.viewer.as_deref()).await;
    Html(render_leaderboard_shell(&list))
}

/// Single period fragment; unknown period names fall back to all-time.
async fn list(
    State(state): State<Arc<AppState>>,
    Path(period): Path<String>,
    Query(query): Query<ViewerQuery>,
) -> Html<String> {
    let period = Period::parse(&period);
    Html(render_period(&state, period, query.viewer.as_deref()).await)
}
