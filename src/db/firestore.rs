// SPDX-License-Identifier: MIT

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (profile + gamification counters)
//! - Point history (append-only award log)
//! - Educators (settings form storage)
//! - Classes and students (progress view inputs)

use crate::db::collections;
use crate::error::AppError;
use crate::models::{ClassData, Educator, PointHistoryEntry, Student, User};

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated
        // connection to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Get a user by their Telegram user id.
    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::USERS)
            .obj()
            .one(user_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create or update a user.
    pub async fn upsert_user(&self, user: &User) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::USERS)
            .document_id(&user.id)
            .object(user)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Write only a user's streak fields.
    ///
    /// The update mask is limited to `stats.streak_days` and
    /// `stats.last_active`, so point counters committed since the user
    /// was read are left untouched.
    pub async fn update_user_streak_fields(&self, user: &User) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .fields(["stats.streak_days", "stats.last_active"])
            .in_col(collections::USERS)
            .document_id(&user.id)
            .object(user)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Top N users ordered by a point field ("weekly_points",
    /// "monthly_points" or "stats.points").
    ///
    /// Callers must not rely on the returned order for display; the
    /// leaderboard re-sorts explicitly.
    pub async fn top_users_by_points(
        &self,
        order_field: &str,
        limit: u32,
    ) -> Result<Vec<User>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::USERS)
            .order_by([(
                order_field,
                firestore::FirestoreQueryDirection::Descending,
            )])
            .limit(limit)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    // ─── Atomic Point Awards ─────────────────────────────────────

    /// Atomically award points: bump the user's counters and append a
    /// history entry in one Firestore transaction.
    ///
    /// The counter bumps are server-side field-transform increments, so
    /// concurrent awards compose instead of overwriting each other's
    /// read-modify-write. The invariant that `stats.points` equals the
    /// sum of the user's history entries holds because the increments
    /// and the history write commit together.
    ///
    /// Returns the lifetime total as of after the commit.
    pub async fn award_points_atomic(
        &self,
        user_id: &str,
        points: i64,
        reason: &str,
        now: &str,
    ) -> Result<i64, AppError> {
        // Awards target existing users only; a missing record is the
        // caller's error, not an implicit create.
        if self.get_user(user_id).await?.is_none() {
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        }

        let entry = PointHistoryEntry {
            user_id: user_id.to_string(),
            points,
            reason: reason.to_string(),
            timestamp: now.to_string(),
        };
        // Document id: user id + commit nanos, unique per award
        let entry_id = format!(
            "{}_{}",
            user_id,
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        );

        let mut transaction = self
            .get_client()?
            .begin_transaction()
            .await
            .map_err(|e| AppError::Database(format!("Failed to begin transaction: {}", e)))?;

        self.get_client()?
            .fluent()
            .update()
            .in_col(collections::USERS)
            .document_id(user_id)
            .transforms(|t| {
                t.fields([
                    t.field("stats.points").increment(points),
                    t.field("weekly_points").increment(points),
                    t.field("monthly_points").increment(points),
                ])
            })
            .only_transform()
            .add_to_transaction(&mut transaction)
            .map_err(|e| {
                AppError::Database(format!("Failed to add increments to transaction: {}", e))
            })?;

        self.get_client()?
            .fluent()
            .update()
            .in_col(collections::POINT_HISTORY)
            .document_id(&entry_id)
            .object(&entry)
            .add_to_transaction(&mut transaction)
            .map_err(|e| {
                AppError::Database(format!("Failed to add history entry to transaction: {}", e))
            })?;

        transaction
            .commit()
            .await
            .map_err(|e| AppError::Database(format!("Transaction commit failed: {}", e)))?;

        let new_total = self
            .get_user(user_id)
            .await?
            .map(|user| user.stats.points)
            .unwrap_or_default();

        tracing::info!(
            user_id,
            points,
            reason,
            new_total,
            "Points awarded atomically"
        );

        Ok(new_total)
    }

    /// All history entries for a user, most recent first.
    pub async fn get_point_history(
        &self,
        user_id: &str,
    ) -> Result<Vec<PointHistoryEntry>, AppError> {
        let user_id = user_id.to_string();
        self.get_client()?
            .fluent()
            .select()
            .from(collections::POINT_HISTORY)
            .filter(move |q| q.for_all([q.field("user_id").eq(user_id.clone())]))
            .order_by([("timestamp", firestore::FirestoreQueryDirection::Descending)])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    // ─── Educator Operations ─────────────────────────────────────

    /// Get an educator profile.
    pub async fn get_educator(&self, educator_id: &str) -> Result<Option<Educator>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::EDUCATORS)
            .obj()
            .one(educator_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Store an educator profile.
    pub async fn set_educator(
        &self,
        educator_id: &str,
        educator: &Educator,
    ) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::EDUCATORS)
            .document_id(educator_id)
            .object(educator)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── Class Progress Inputs ───────────────────────────────────

    /// Get class metadata.
    pub async fn get_class(&self, class_id: &str) -> Result<Option<ClassData>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::CLASSES)
            .obj()
            .one(class_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// All students enrolled in a class.
    pub async fn get_students(&self, class_id: &str) -> Result<Vec<Student>, AppError> {
        let class_id = class_id.to_string();
        self.get_client()?
            .fluent()
            .select()
            .from(collections::STUDENTS)
            .filter(move |q| q.for_all([q.field("class_id").eq(class_id.clone())]))
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
