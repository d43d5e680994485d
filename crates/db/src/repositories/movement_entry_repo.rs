//! Repository for the `movement_entries` table.
//!
//! Entries are keyed to their workout by `workout_id`; the owning
//! workout's date is joined into every read so date-scoped queries and
//! responses keep working without a denormalized date column.

use chrono::NaiveDate;
use sqlx::PgPool;
use sportlog_core::types::DbId;

use crate::models::movement_entry::{CreateMovementEntry, MovementEntry, UpdateMovementEntry};

/// Joined column list shared across queries to avoid repetition.
const COLUMNS: &str = "m.id, m.workout_id, w.date, m.muscle_group, \
    m.movement_name, m.set_number, m.created_at";

/// Provides CRUD and lookup operations for movement entries.
pub struct MovementEntryRepo;

impl MovementEntryRepo {
    /// Insert a movement entry under an already-resolved workout.
    ///
    /// Callers resolve `workout_id` from the submitted date first (see
    /// `WorkoutRepo::find_by_date`); a date with no workout is a
    /// reference error at that stage, not here.
    pub async fn create(
        pool: &PgPool,
        workout_id: DbId,
        input: &CreateMovementEntry,
    ) -> Result<MovementEntry, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO movement_entries (workout_id, muscle_group, movement_name, set_number)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(workout_id)
        .bind(&input.muscle_group)
        .bind(&input.movement_name)
        .bind(input.set_number)
        .fetch_one(pool)
        .await?;

        // Re-read through the join to pick up the workout date.
        let query = format!(
            "SELECT {COLUMNS} FROM movement_entries m
             JOIN workouts w ON w.id = m.workout_id
             WHERE m.id = $1"
        );
        sqlx::query_as::<_, MovementEntry>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Find a movement entry by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MovementEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movement_entries m
             JOIN workouts w ON w.id = m.workout_id
             WHERE m.id = $1"
        );
        sqlx::query_as::<_, MovementEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List movement entries, optionally filtered to one workout date,
    /// in insertion order.
    pub async fn list(
        pool: &PgPool,
        date: Option<NaiveDate>,
    ) -> Result<Vec<MovementEntry>, sqlx::Error> {
        match date {
            Some(date) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM movement_entries m
                     JOIN workouts w ON w.id = m.workout_id
                     WHERE w.date = $1
                     ORDER BY m.id"
                );
                sqlx::query_as::<_, MovementEntry>(&query)
                    .bind(date)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM movement_entries m
                     JOIN workouts w ON w.id = m.workout_id
                     ORDER BY m.id"
                );
                sqlx::query_as::<_, MovementEntry>(&query)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// List the entries belonging to one workout, in insertion order.
    pub async fn list_by_workout(
        pool: &PgPool,
        workout_id: DbId,
    ) -> Result<Vec<MovementEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movement_entries m
             JOIN workouts w ON w.id = m.workout_id
             WHERE m.workout_id = $1
             ORDER BY m.id"
        );
        sqlx::query_as::<_, MovementEntry>(&query)
            .bind(workout_id)
            .fetch_all(pool)
            .await
    }

    /// Update a movement entry. Only non-`None` fields are applied; a new
    /// owning workout is passed as `workout_id` (resolved by the caller
    /// from the submitted date).
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        workout_id: Option<DbId>,
        input: &UpdateMovementEntry,
    ) -> Result<Option<MovementEntry>, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE movement_entries SET
                workout_id = COALESCE($2, workout_id),
                muscle_group = COALESCE($3, muscle_group),
                movement_name = COALESCE($4, movement_name),
                set_number = COALESCE($5, set_number)
             WHERE id = $1",
        )
        .bind(id)
        .bind(workout_id)
        .bind(&input.muscle_group)
        .bind(&input.movement_name)
        .bind(input.set_number)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Self::find_by_id(pool, id).await
    }

    /// Delete a movement entry by ID. Returns `true` if a row was removed.
    /// The cascade removes its sets.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movement_entries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // ── Lookup helpers for form autofill ─────────────────────────────

    /// Distinct lower-cased muscle group names ever logged.
    pub async fn distinct_muscle_groups(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT DISTINCT LOWER(muscle_group) AS muscle_group
             FROM movement_entries
             ORDER BY muscle_group",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|r| r.0).collect())
    }

    /// Distinct movement names, optionally restricted to one muscle group
    /// (matched case-insensitively).
    pub async fn movement_names(
        pool: &PgPool,
        muscle_group: Option<&str>,
    ) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = match muscle_group {
            Some(group) => {
                sqlx::query_as(
                    "SELECT DISTINCT movement_name FROM movement_entries
                     WHERE LOWER(muscle_group) = LOWER($1)
                     ORDER BY movement_name",
                )
                .bind(group.trim())
                .fetch_all(pool)
                .await?
            }
            None => {
                sqlx::query_as(
                    "SELECT DISTINCT movement_name FROM movement_entries
                     ORDER BY movement_name",
                )
                .fetch_all(pool)
                .await?
            }
        };
        Ok(rows.into_iter().map(|r| r.0).collect())
    }
}
