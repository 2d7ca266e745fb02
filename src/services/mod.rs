// SPDX-License-Identifier: MIT

//! Services module - business logic layer.

pub mod effects;
pub mod gamification;
pub mod leaderboard;
pub mod progress;

pub use effects::UiEffect;
pub use gamification::{AwardOutcome, StreakUpdate};
pub use leaderboard::Period;
pub use progress::ClassProgress;
