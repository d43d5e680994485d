//! Repository for the `workout_sets` table.

use sqlx::PgPool;
use sportlog_core::types::DbId;

use crate::models::workout_set::{CreateWorkoutSet, UpdateWorkoutSet, WorkoutSet};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, movement_entry_id, weight, reps, created_at";

/// Provides CRUD operations for recorded sets.
pub struct WorkoutSetRepo;

impl WorkoutSetRepo {
    /// Insert a new set, returning the created row.
    ///
    /// A `movement_entry_id` pointing at no entry fails with a
    /// foreign-key violation.
    pub async fn create(pool: &PgPool, input: &CreateWorkoutSet) -> Result<WorkoutSet, sqlx::Error> {
        let query = format!(
            "INSERT INTO workout_sets (movement_entry_id, weight, reps)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkoutSet>(&query)
            .bind(input.movement_entry_id)
            .bind(input.weight)
            .bind(input.reps)
            .fetch_one(pool)
            .await
    }

    /// Find a set by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<WorkoutSet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workout_sets WHERE id = $1");
        sqlx::query_as::<_, WorkoutSet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List sets, optionally filtered to one movement entry, in
    /// insertion order.
    pub async fn list(
        pool: &PgPool,
        movement_entry_id: Option<DbId>,
    ) -> Result<Vec<WorkoutSet>, sqlx::Error> {
        match movement_entry_id {
            Some(entry_id) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM workout_sets
                     WHERE movement_entry_id = $1
                     ORDER BY id"
                );
                sqlx::query_as::<_, WorkoutSet>(&query)
                    .bind(entry_id)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM workout_sets ORDER BY id");
                sqlx::query_as::<_, WorkoutSet>(&query).fetch_all(pool).await
            }
        }
    }

    /// List the sets belonging to one movement entry, in insertion order.
    pub async fn list_by_entry(
        pool: &PgPool,
        movement_entry_id: DbId,
    ) -> Result<Vec<WorkoutSet>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM workout_sets
             WHERE movement_entry_id = $1
             ORDER BY id"
        );
        sqlx::query_as::<_, WorkoutSet>(&query)
            .bind(movement_entry_id)
            .fetch_all(pool)
            .await
    }

    /// Update a set. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWorkoutSet,
    ) -> Result<Option<WorkoutSet>, sqlx::Error> {
        let query = format!(
            "UPDATE workout_sets SET
                movement_entry_id = COALESCE($2, movement_entry_id),
                weight = COALESCE($3, weight),
                reps = COALESCE($4, reps)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkoutSet>(&query)
            .bind(id)
            .bind(input.movement_entry_id)
            .bind(input.weight)
            .bind(input.reps)
            .fetch_optional(pool)
            .await
    }

    /// Delete a set by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM workout_sets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
