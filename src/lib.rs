// SPDX-License-Identifier: MIT

//! StudyQuest: backend for a gamified educational Telegram Mini App.
//!
//! This crate serves the leaderboard, class progress and educator
//! settings views, and runs the streak/points engine behind them.

pub mod config;
pub mod db;
pub mod error;
pub mod identity;
pub mod models;
pub mod render;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::FirestoreDb;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
}
