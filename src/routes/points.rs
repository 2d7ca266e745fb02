// SPDX-License-Identifier: MIT

//! Point award endpoint.

use crate::error::Result;
use crate::services::gamification::award_points;
use crate::services::UiEffect;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/users/{id}/points", post(award))
}

#[derive(Debug, Deserialize)]
pub struct AwardRequest {
    pub points: i64,
    pub reason: String,
}

#[derive(Serialize)]
pub struct AwardResponse {
    pub new_total: i64,
    /// Transient visual effects for the frontend's effect handler
    pub effects: Vec<UiEffect>,
}

/// Award points to a user and return the effects to play.
async fn award(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Json(request): Json<AwardRequest>,
) -> Result<Json<AwardResponse>> {
    let outcome = award_points(
        &state.db,
        &user_id,
        request.points,
        &request.reason,
        chrono::Utc::now(),
    )
    .await?;

    Ok(Json(AwardResponse {
        new_total: outcome.new_total,
        effects: outcome.effects,
    }))
}
