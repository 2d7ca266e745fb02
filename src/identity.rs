// SPDX-License-Identifier: MIT

//! User identity resolution.
//!
//! The Mini App forwards `initDataUnsafe.user` from the Telegram WebApp
//! bridge. Which source of truth we accept is a configuration choice:
//! `Telegram` requires the forwarded payload, `FixedTest` pins a known
//! identity for standalone testing without the host.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Resolved identity of the current user.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TelegramIdentity {
    /// Telegram user id, stringified for use as a document id
    pub id: String,
    pub first_name: String,
    pub username: String,
}

impl TelegramIdentity {
    /// Fixed identity for running the app outside the Telegram host.
    pub fn test_default() -> Self {
        Self {
            id: "test_user_id".to_string(),
            first_name: "Test User".to_string(),
            username: "test_username".to_string(),
        }
    }
}

/// `initDataUnsafe.user` as forwarded by the Mini App frontend.
#[derive(Debug, Clone, Deserialize)]
pub struct InitDataUser {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub username: Option<String>,
}

/// How the current user's identity is resolved.
#[derive(Debug, Clone)]
pub enum IdentityProvider {
    /// Trust the forwarded Telegram WebApp payload.
    Telegram,
    /// Ignore any payload and use a fixed test identity.
    FixedTest(TelegramIdentity),
}

impl IdentityProvider {
    /// Resolve an identity from an optional forwarded payload.
    pub fn resolve(&self, payload: Option<&InitDataUser>) -> Result<TelegramIdentity> {
        match self {
            IdentityProvider::FixedTest(identity) => Ok(identity.clone()),
            IdentityProvider::Telegram => {
                let user = payload.ok_or_else(|| {
                    AppError::Validation("Telegram user payload is required".to_string())
                })?;
                Ok(TelegramIdentity {
                    id: user.id.to_string(),
                    first_name: user.first_name.clone(),
                    username: user.username.clone().unwrap_or_default(),
                })
            }
        }
    }
}
