//! Handlers for the `/muscle-groups` resource.
//!
//! Standalone movement-entry CRUD outside a workout submission. The
//! owning workout is resolved from the submitted date; a date with no
//! workout is a reference error.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use sportlog_core::error::CoreError;
use sportlog_core::types::DbId;
use sportlog_core::validation;
use sportlog_db::models::movement_entry::{
    CreateMovementEntry, MovementEntry, MovementEntryDetail, UpdateMovementEntry,
};
use sportlog_db::repositories::{MovementEntryRepo, WorkoutRepo, WorkoutSetRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::DeleteConfirmation;
use crate::state::AppState;

/// Resolve the workout logged on `date`, or fail with a reference error.
async fn resolve_workout_id(state: &AppState, date: NaiveDate) -> AppResult<DbId> {
    let workout = WorkoutRepo::find_by_date(&state.pool, date)
        .await?
        .ok_or_else(|| {
            AppError::Reference("No workout exists for this date. Create a workout first.".into())
        })?;
    Ok(workout.id)
}

/// Query parameters for the entry list.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub date: Option<NaiveDate>,
}

/// GET /api/muscle-groups?date=YYYY-MM-DD
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<MovementEntry>>> {
    let entries = MovementEntryRepo::list(&state.pool, params.date).await?;
    Ok(Json(entries))
}

/// GET /api/muscle-groups/distinct-groups
pub async fn distinct_groups(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let groups = MovementEntryRepo::distinct_muscle_groups(&state.pool).await?;
    Ok(Json(groups))
}

/// Query parameters for the movement-name lookup.
#[derive(Debug, Deserialize)]
pub struct MovementNameParams {
    pub muscle_group: Option<String>,
}

/// GET /api/muscle-groups/movements?muscle_group=X
pub async fn movement_names(
    State(state): State<AppState>,
    Query(params): Query<MovementNameParams>,
) -> AppResult<Json<Vec<String>>> {
    let names = MovementEntryRepo::movement_names(&state.pool, params.muscle_group.as_deref()).await?;
    Ok(Json(names))
}

/// GET /api/muscle-groups/{id} -- one entry with its sets.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MovementEntryDetail>> {
    let entry = MovementEntryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MovementEntry",
            id,
        }))?;
    let sets = WorkoutSetRepo::list_by_entry(&state.pool, entry.id).await?;
    Ok(Json(MovementEntryDetail { entry, sets }))
}

/// POST /api/muscle-groups
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMovementEntry>,
) -> AppResult<(StatusCode, Json<MovementEntry>)> {
    validation::validate_set_number(input.set_number)?;
    let workout_id = resolve_workout_id(&state, input.date).await?;
    let entry = MovementEntryRepo::create(&state.pool, workout_id, &input).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// PUT /api/muscle-groups/{id}
///
/// A new `date` moves the entry to the workout logged on that date.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMovementEntry>,
) -> AppResult<Json<MovementEntry>> {
    if let Some(set_number) = input.set_number {
        validation::validate_set_number(set_number)?;
    }
    let workout_id = match input.date {
        Some(date) => Some(resolve_workout_id(&state, date).await?),
        None => None,
    };
    let entry = MovementEntryRepo::update(&state.pool, id, workout_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MovementEntry",
            id,
        }))?;
    Ok(Json(entry))
}

/// DELETE /api/muscle-groups/{id} -- sets are removed by the cascade.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeleteConfirmation>> {
    let deleted = MovementEntryRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(DeleteConfirmation {
            message: "Muscle group entry deleted successfully",
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "MovementEntry",
            id,
        }))
    }
}
