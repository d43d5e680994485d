//! Workout entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sportlog_core::types::{DbId, Timestamp};

use crate::models::movement_entry::MovementEntryDetail;

/// A row from the `workouts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Workout {
    pub id: DbId,
    /// Calendar date of the session; unique across all workouts.
    pub date: NaiveDate,
    /// Free-text summary of the muscle groups trained (denormalized).
    pub muscle_groups: Option<String>,
    /// Advisory rest-gap snapshot taken at write time; never reconciled
    /// against the live calculator afterwards.
    pub days_since_last_workout: Option<i32>,
    /// Session length as opaque `HH:MM` text.
    pub duration: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing a workout together with its full tree
/// of movement entries and sets. PUT uses the same shape as POST; an
/// update is always a whole-tree replace.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkout {
    pub date: NaiveDate,
    pub muscle_groups: Option<String>,
    pub days_since_last_workout: Option<i32>,
    pub duration: Option<String>,
    /// Movement entries in submission order; order is preserved.
    #[serde(default)]
    pub movements: Vec<MovementSpec>,
}

/// One movement entry inside a workout submission.
#[derive(Debug, Clone, Deserialize)]
pub struct MovementSpec {
    pub muscle_group: String,
    pub movement_name: String,
    /// Planned set count. Advisory: may legitimately diverge from the
    /// number of sets actually recorded below.
    pub set_number: i32,
    #[serde(default)]
    pub sets: Vec<SetSpec>,
}

/// One recorded set inside a movement submission.
#[derive(Debug, Clone, Deserialize)]
pub struct SetSpec {
    pub weight: f64,
    pub reps: i32,
}

/// A workout with its nested movement entries and sets attached,
/// as returned by `GET /api/workouts/{id}`.
#[derive(Debug, Serialize)]
pub struct WorkoutDetail {
    #[serde(flatten)]
    pub workout: Workout,
    pub movements: Vec<MovementEntryDetail>,
}
