//! Handlers for the `/workouts` resource.
//!
//! Creation and replacement go through the tree coordinator in
//! `WorkoutRepo`: the workout row plus its movement entries plus their
//! sets are written as one all-or-nothing transaction.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use sportlog_core::error::CoreError;
use sportlog_core::rest::RestGap;
use sportlog_core::types::DbId;
use sportlog_core::validation;
use sportlog_db::models::movement_entry::MovementEntryDetail;
use sportlog_db::models::workout::{CreateWorkout, Workout, WorkoutDetail};
use sportlog_db::repositories::{MovementEntryRepo, WorkoutRepo, WorkoutSetRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::DeleteConfirmation;
use crate::state::AppState;

/// Validate every field of a submitted workout tree before touching
/// the store.
fn validate_tree(input: &CreateWorkout) -> Result<(), CoreError> {
    if let Some(days) = input.days_since_last_workout {
        validation::validate_days_since(days)?;
    }
    if let Some(duration) = &input.duration {
        validation::validate_duration(duration)?;
    }
    for movement in &input.movements {
        validation::validate_set_number(movement.set_number)?;
        for set in &movement.sets {
            validation::validate_weight(set.weight)?;
            validation::validate_reps(set.reps)?;
        }
    }
    Ok(())
}

/// GET /api/workouts -- all workouts, newest date first, no tree.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Workout>>> {
    let workouts = WorkoutRepo::list_all(&state.pool).await?;
    Ok(Json(workouts))
}

/// Query parameters for the last-workout lookup.
#[derive(Debug, Deserialize)]
pub struct LastWorkoutParams {
    /// Reference date; defaults to today in the server's local timezone.
    pub date: Option<NaiveDate>,
}

/// Response for the last-workout lookup. Both fields are null when no
/// workout precedes the reference date.
#[derive(Debug, Serialize)]
pub struct LastWorkoutResponse {
    #[serde(rename = "lastDate")]
    pub last_date: Option<NaiveDate>,
    #[serde(rename = "daysSince")]
    pub days_since: Option<i64>,
}

/// GET /api/workouts/last?date=YYYY-MM-DD
///
/// Finds the most recent workout strictly before the reference date and
/// the whole-day gap to it. A workout on the reference date itself is
/// excluded.
pub async fn last(
    State(state): State<AppState>,
    Query(params): Query<LastWorkoutParams>,
) -> AppResult<Json<LastWorkoutResponse>> {
    let reference = params.date.unwrap_or_else(|| Local::now().date_naive());

    let gap = WorkoutRepo::last_before(&state.pool, reference)
        .await?
        .map(|last_date| RestGap::new(last_date, reference));

    Ok(Json(LastWorkoutResponse {
        last_date: gap.map(|g| g.last_date),
        days_since: gap.map(|g| g.days_since),
    }))
}

/// GET /api/workouts/{id} -- one workout with nested movements and sets.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<WorkoutDetail>> {
    let workout = WorkoutRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Workout",
            id,
        }))?;

    let entries = MovementEntryRepo::list_by_workout(&state.pool, workout.id).await?;
    let mut movements = Vec::with_capacity(entries.len());
    for entry in entries {
        let sets = WorkoutSetRepo::list_by_entry(&state.pool, entry.id).await?;
        movements.push(MovementEntryDetail { entry, sets });
    }

    Ok(Json(WorkoutDetail { workout, movements }))
}

/// POST /api/workouts -- create a workout with its full tree.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateWorkout>,
) -> AppResult<(StatusCode, Json<Workout>)> {
    validate_tree(&input)?;
    let workout = WorkoutRepo::create_tree(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(workout)))
}

/// PUT /api/workouts/{id} -- full-tree replace.
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateWorkout>,
) -> AppResult<Json<Workout>> {
    validate_tree(&input)?;
    let workout = WorkoutRepo::replace_tree(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Workout",
            id,
        }))?;
    Ok(Json(workout))
}

/// DELETE /api/workouts/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeleteConfirmation>> {
    let deleted = WorkoutRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(DeleteConfirmation {
            message: "Workout deleted successfully",
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Workout",
            id,
        }))
    }
}
