//! Educator profile model and settings form payload.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Educator profile stored in Firestore, mutated wholesale by the
/// settings form. No edit history is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Educator {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub bio: String,
    /// Timestamp of the last settings submission (RFC3339)
    #[serde(default)]
    pub updated_at: String,
}

/// Settings form submission. `name` and `email` must be non-empty after
/// trimming; `bio` is free-form. Validation applies to the trimmed copy
/// from `normalized()`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EducatorUpdate {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[serde(default)]
    pub bio: String,
}

impl EducatorUpdate {
    /// Trimmed copy suitable for validating and writing to the store.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            bio: self.bio.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_email_rejected() {
        let update = EducatorUpdate {
            name: "Ms. Rivera".to_string(),
            email: "   ".to_string(),
            bio: String::new(),
        };
        // Whitespace-only fails once trimmed
        assert!(update.normalized().validate().is_err());
    }

    #[test]
    fn test_valid_update_passes_and_trims() {
        let update = EducatorUpdate {
            name: "  Ms. Rivera ".to_string(),
            email: "rivera@school.example".to_string(),
            bio: "Science teacher".to_string(),
        };
        let normalized = update.normalized();
        assert!(normalized.validate().is_ok());
        assert_eq!(normalized.name, "Ms. Rivera");
    }
}
