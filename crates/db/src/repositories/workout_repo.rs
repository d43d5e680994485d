//! Repository for the `workouts` table, including the atomic tree
//! coordinator: a workout plus its movement entries plus their sets is
//! always written or replaced as one transaction.

use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, Transaction};
use sportlog_core::types::DbId;

use crate::models::workout::{CreateWorkout, MovementSpec, Workout};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, date, muscle_groups, days_since_last_workout, duration, created_at, updated_at";

/// Provides CRUD and tree-write operations for workouts.
pub struct WorkoutRepo;

impl WorkoutRepo {
    // ── Tree writes ──────────────────────────────────────────────────

    /// Insert a workout together with its full movement/set tree in one
    /// transaction. On any failure nothing is persisted.
    ///
    /// A second workout on the same date violates `uq_workouts_date`;
    /// the error surfaces to the caller and the store is unchanged.
    pub async fn create_tree(pool: &PgPool, input: &CreateWorkout) -> Result<Workout, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO workouts (date, muscle_groups, days_since_last_workout, duration)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let workout = sqlx::query_as::<_, Workout>(&query)
            .bind(input.date)
            .bind(&input.muscle_groups)
            .bind(input.days_since_last_workout)
            .bind(&input.duration)
            .fetch_one(&mut *tx)
            .await?;

        Self::insert_movements(&mut tx, workout.id, &input.movements).await?;

        tx.commit().await?;
        Ok(workout)
    }

    /// Replace a workout's scalar fields and its entire movement/set tree
    /// in one transaction. Prior movement entries and sets are deleted and
    /// the submitted tree is re-inserted; partial merges do not exist.
    ///
    /// Returns `None` (rolling back) if no row with the given `id` exists.
    ///
    /// Concurrency policy: the initial `SELECT ... FOR UPDATE` row lock
    /// serializes concurrent replaces and deletes of the same workout;
    /// the loser of a delete race sees a missing row and gets `None`.
    pub async fn replace_tree(
        pool: &PgPool,
        id: DbId,
        input: &CreateWorkout,
    ) -> Result<Option<Workout>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let existing: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM workouts WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if existing.is_none() {
            return Ok(None);
        }

        // Cascade removes the entries' sets as well.
        sqlx::query("DELETE FROM movement_entries WHERE workout_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let query = format!(
            "UPDATE workouts SET
                date = $2,
                muscle_groups = $3,
                days_since_last_workout = $4,
                duration = $5,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let workout = sqlx::query_as::<_, Workout>(&query)
            .bind(id)
            .bind(input.date)
            .bind(&input.muscle_groups)
            .bind(input.days_since_last_workout)
            .bind(&input.duration)
            .fetch_one(&mut *tx)
            .await?;

        Self::insert_movements(&mut tx, id, &input.movements).await?;

        tx.commit().await?;
        Ok(Some(workout))
    }

    /// Insert movement entries and their sets, preserving input order.
    async fn insert_movements(
        tx: &mut Transaction<'_, Postgres>,
        workout_id: DbId,
        movements: &[MovementSpec],
    ) -> Result<(), sqlx::Error> {
        for movement in movements {
            let (entry_id,): (DbId,) = sqlx::query_as(
                "INSERT INTO movement_entries (workout_id, muscle_group, movement_name, set_number)
                 VALUES ($1, $2, $3, $4)
                 RETURNING id",
            )
            .bind(workout_id)
            .bind(&movement.muscle_group)
            .bind(&movement.movement_name)
            .bind(movement.set_number)
            .fetch_one(&mut **tx)
            .await?;

            for set in &movement.sets {
                sqlx::query(
                    "INSERT INTO workout_sets (movement_entry_id, weight, reps)
                     VALUES ($1, $2, $3)",
                )
                .bind(entry_id)
                .bind(set.weight)
                .bind(set.reps)
                .execute(&mut **tx)
                .await?;
            }
        }
        Ok(())
    }

    /// Delete a workout by ID. Returns `true` if a row was removed.
    /// Foreign-key cascades remove its movement entries and their sets.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // ── Reads ────────────────────────────────────────────────────────

    /// Find a workout by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Workout>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workouts WHERE id = $1");
        sqlx::query_as::<_, Workout>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the workout logged on a given date, if any.
    pub async fn find_by_date(
        pool: &PgPool,
        date: NaiveDate,
    ) -> Result<Option<Workout>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workouts WHERE date = $1");
        sqlx::query_as::<_, Workout>(&query)
            .bind(date)
            .fetch_optional(pool)
            .await
    }

    /// List all workouts, newest date first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Workout>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workouts ORDER BY date DESC");
        sqlx::query_as::<_, Workout>(&query).fetch_all(pool).await
    }

    /// Date of the most recent workout strictly before `reference`.
    ///
    /// A workout on the reference date itself is excluded; `None` means
    /// no prior workout exists.
    pub async fn last_before(
        pool: &PgPool,
        reference: NaiveDate,
    ) -> Result<Option<NaiveDate>, sqlx::Error> {
        let row: (Option<NaiveDate>,) =
            sqlx::query_as("SELECT MAX(date) FROM workouts WHERE date < $1")
                .bind(reference)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }
}
