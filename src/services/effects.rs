// SPDX-License-Identifier: MIT

//! UI effect commands.
//!
//! Point awards and achievements used to mutate the DOM directly; here
//! the engine returns effect commands and the Mini App frontend plays
//! them. Effects are transient, carry their own lifetime and may overlap
//! visually when awards land close together; nothing deduplicates them.

use serde::Serialize;

/// Lifetime of the floating "+N" points badge.
pub const POINTS_ANIMATION_MS: u32 = 2_000;
/// Lifetime of a confetti burst.
pub const CONFETTI_MS: u32 = 3_000;
/// Lifetime of an achievement banner.
pub const ACHIEVEMENT_MS: u32 = 4_000;

/// A transient visual effect for the client to dispatch.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UiEffect {
    PointsAnimation { points: i64, duration_ms: u32 },
    Confetti { duration_ms: u32 },
    Achievement { title: String, duration_ms: u32 },
}

impl UiEffect {
    pub fn points_animation(points: i64) -> Self {
        UiEffect::PointsAnimation {
            points,
            duration_ms: POINTS_ANIMATION_MS,
        }
    }

    pub fn confetti() -> Self {
        UiEffect::Confetti {
            duration_ms: CONFETTI_MS,
        }
    }

    pub fn achievement(title: impl Into<String>) -> Self {
        UiEffect::Achievement {
            title: title.into(),
            duration_ms: ACHIEVEMENT_MS,
        }
    }
}
