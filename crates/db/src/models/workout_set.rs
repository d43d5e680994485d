//! Set entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sportlog_core::types::{DbId, Timestamp};

/// A row from the `workout_sets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkoutSet {
    pub id: DbId,
    pub movement_entry_id: DbId,
    /// Kilograms, assist level, or seconds depending on the movement;
    /// the server stores the number without interpreting the unit.
    pub weight: f64,
    pub reps: i32,
    pub created_at: Timestamp,
}

/// DTO for creating a set against an existing movement entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkoutSet {
    pub movement_entry_id: DbId,
    pub weight: f64,
    pub reps: i32,
}

/// DTO for updating a set. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateWorkoutSet {
    pub movement_entry_id: Option<DbId>,
    pub weight: Option<f64>,
    pub reps: Option<i32>,
}
