//! Class and student records consumed by the progress view.
//!
//! Both are read-only inputs here; enrollment management lives elsewhere.

use serde::{Deserialize, Serialize};

/// Class metadata for the progress heading.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassData {
    #[serde(default)]
    pub name: String,
}

/// Enrolled student; only activity recency matters to the progress view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    #[serde(default)]
    pub class_id: String,
    /// Last recorded activity (RFC3339), absent for never-active students
    #[serde(default)]
    pub last_activity: Option<String>,
}
