//! Movement entry entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sportlog_core::types::{DbId, Timestamp};

use crate::models::workout_set::WorkoutSet;

/// A row from the `movement_entries` table, joined with the owning
/// workout's date.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovementEntry {
    pub id: DbId,
    pub workout_id: DbId,
    /// Date of the owning workout (from the join, not stored here).
    pub date: NaiveDate,
    pub muscle_group: String,
    pub movement_name: String,
    /// Planned set count (advisory).
    pub set_number: i32,
    pub created_at: Timestamp,
}

/// DTO for creating a movement entry outside a workout submission.
/// The owning workout is resolved by `date`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovementEntry {
    pub date: NaiveDate,
    pub muscle_group: String,
    pub movement_name: String,
    pub set_number: i32,
}

/// DTO for updating a movement entry. All fields are optional; a new
/// `date` moves the entry to the workout logged on that date.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMovementEntry {
    pub date: Option<NaiveDate>,
    pub muscle_group: Option<String>,
    pub movement_name: Option<String>,
    pub set_number: Option<i32>,
}

/// A movement entry with its sets attached.
#[derive(Debug, Serialize)]
pub struct MovementEntryDetail {
    #[serde(flatten)]
    pub entry: MovementEntry,
    pub sets: Vec<WorkoutSet>,
}
