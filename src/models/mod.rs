// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod classroom;
pub mod educator;
pub mod leaderboard;
pub mod points;
pub mod user;

pub use classroom::{ClassData, Student};
pub use educator::{Educator, EducatorUpdate};
pub use leaderboard::LeaderboardEntry;
pub use points::PointHistoryEntry;
pub use user::{User, UserStats};
