//! Database layer (Firestore).

pub mod firestore;

pub use firestore::FirestoreDb;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    /// Append-only point awards, linked to users by `user_id`
    pub const POINT_HISTORY: &str = "point_history";
    pub const EDUCATORS: &str = "educators";
    pub const CLASSES: &str = "classes";
    pub const STUDENTS: &str = "students";
}
