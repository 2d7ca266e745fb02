// SPDX-License-Identifier: MIT

//! App bootstrap: one-shot per Mini App launch.
//!
//! Resolves the Telegram identity, provisions first-run users, runs the
//! streak engine for returning users and hands the frontend off to the
//! main menu. The host-side init (ready/expand/theme, primary button
//! wiring) stays in the frontend; this endpoint supplies the label and
//! the handoff target.

use crate::error::Result;
use crate::identity::InitDataUser;
use crate::models::User;
use crate::services::gamification::update_user_streak;
use crate::time_utils::{format_utc_rfc3339, offset_from_minutes};
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Primary button label shown by the Telegram host.
const MAIN_BUTTON_LABEL: &str = "Start Learning";
/// View the frontend loads after bootstrap, whatever branch was taken.
const HANDOFF_VIEW: &str = "main_menu";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/bootstrap", post(bootstrap))
}

#[derive(Debug, Deserialize)]
pub struct BootstrapRequest {
    /// Forwarded `initDataUnsafe.user`; ignored in fixed-test mode
    #[serde(default)]
    pub user: Option<InitDataUser>,
}

#[derive(Serialize)]
pub struct BootstrapResponse {
    pub user: User,
    /// True when this launch provisioned the record
    pub created: bool,
    pub main_button_label: &'static str,
    pub next_view: &'static str,
}

/// Resolve the current user and prepare the session.
///
/// Order is load-bearing: existence check, then create-or-update, then
/// the handoff response. The streak engine only runs for returning
/// users; a fresh record starts with zeroed stats.
async fn bootstrap(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BootstrapRequest>,
) -> Result<Json<BootstrapResponse>> {
    let identity = state.config.identity.resolve(request.user.as_ref())?;
    let now = chrono::Utc::now();
    let offset = offset_from_minutes(state.config.utc_offset_minutes);

    let existing = state.db.get_user(&identity.id).await?;

    let (user, created) = match existing {
        None => {
            let user = User::provision(&identity, &format_utc_rfc3339(now));
            state.db.upsert_user(&user).await?;
            tracing::info!(user_id = %user.id, "Provisioned first-run user");
            (user, true)
        }
        Some(user) => {
            update_user_streak(&state.db, &user.id, now, offset).await?;
            // Fresh snapshot after the streak write
            let user = state
                .db
                .get_user(&user.id)
                .await?
                .unwrap_or(user);
            (user, false)
        }
    };

    Ok(Json(BootstrapResponse {
        user,
        created,
        main_button_label: MAIN_BUTTON_LABEL,
        next_view: HANDOFF_VIEW,
    }))
}
