// SPDX-License-Identifier: MIT

//! Educator views: class progress and the settings form.

use crate::error::{AppError, Result};
use crate::models::{ClassData, Educator, EducatorUpdate};
use crate::render::{render_class_progress, render_error_state, render_settings_form};
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;
use axum::{
    extract::{Path, State},
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/views/classes/{id}/progress", get(class_progress_view))
        .route("/views/educators/{id}/settings", get(settings_view))
        .route("/api/educators/{id}/settings", post(submit_settings))
}

// ─── Class Progress ──────────────────────────────────────────

/// Class progress fragment; degrades to error markup on any failure.
async fn class_progress_view(
    State(state): State<Arc<AppState>>,
    Path(class_id): Path<String>,
) -> Html<String> {
    let class = match state.db.get_class(&class_id).await {
        Ok(Some(class)) => class,
        Ok(None) => ClassData::default(),
        Err(err) => {
            tracing::warn!(class_id, error = %err, "Class load failed");
            return Html(render_error_state(&format!(
                "Failed to load class progress: {}",
                err
            )));
        }
    };

    match state.db.get_students(&class_id).await {
        Ok(students) => Html(render_class_progress(&class, &students, chrono::Utc::now())),
        Err(err) => {
            tracing::warn!(class_id, error = %err, "Student list load failed");
            Html(render_error_state(&format!(
                "Failed to load class progress: {}",
                err
            )))
        }
    }
}

// ─── Settings Form ───────────────────────────────────────────

/// Settings form, pre-populated from the stored profile. A missing
/// record is a visible error state, not an empty form.
async fn settings_view(
    State(state): State<Arc<AppState>>,
    Path(educator_id): Path<String>,
) -> Html<String> {
    match state.db.get_educator(&educator_id).await {
        Ok(Some(educator)) => Html(render_settings_form(&educator)),
        Ok(None) => Html(render_error_state("Educator profile not found")),
        Err(err) => {
            tracing::warn!(educator_id, error = %err, "Educator load failed");
            Html(render_error_state(&format!(
                "Failed to load settings: {}",
                err
            )))
        }
    }
}

#[derive(Serialize)]
pub struct SettingsResponse {
    pub success: bool,
    /// Toast text for the frontend
    pub toast: String,
}

/// Persist the settings form.
///
/// Validation runs before any store contact; a blank name or email
/// aborts with a 422 and writes nothing.
async fn submit_settings(
    State(state): State<Arc<AppState>>,
    Path(educator_id): Path<String>,
    Json(update): Json<EducatorUpdate>,
) -> Result<Json<SettingsResponse>> {
    let update = update.normalized();
    if update.validate().is_err() {
        return Err(AppError::Validation(
            "Name and email are required".to_string(),
        ));
    }
    let educator = Educator {
        name: update.name,
        email: update.email,
        bio: update.bio,
        updated_at: format_utc_rfc3339(chrono::Utc::now()),
    };
    state.db.set_educator(&educator_id, &educator).await?;

    tracing::info!(educator_id, "Educator settings saved");
    Ok(Json(SettingsResponse {
        success: true,
        toast: "Settings saved".to_string(),
    }))
}
