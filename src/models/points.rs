//! Point history records.

use serde::{Deserialize, Serialize};

/// One point award, append-only and immutable once written.
///
/// Stored in the `point_history` collection with auto-generated ids;
/// `user_id` links the entry back to its user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointHistoryEntry {
    pub user_id: String,
    pub points: i64,
    /// Why the points were awarded ("quiz", "lesson", ...)
    pub reason: String,
    /// When the award was committed (RFC3339)
    pub timestamp: String,
}
