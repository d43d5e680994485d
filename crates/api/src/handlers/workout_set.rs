//! Handlers for the `/sets` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use sportlog_core::error::CoreError;
use sportlog_core::types::DbId;
use sportlog_core::validation;
use sportlog_db::models::workout_set::{CreateWorkoutSet, UpdateWorkoutSet, WorkoutSet};
use sportlog_db::repositories::WorkoutSetRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::DeleteConfirmation;
use crate::state::AppState;

/// Query parameters for the set list.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub movement_entry_id: Option<DbId>,
}

/// GET /api/sets?movement_entry_id=N
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<WorkoutSet>>> {
    let sets = WorkoutSetRepo::list(&state.pool, params.movement_entry_id).await?;
    Ok(Json(sets))
}

/// GET /api/sets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<WorkoutSet>> {
    let set = WorkoutSetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Set", id }))?;
    Ok(Json(set))
}

/// POST /api/sets
///
/// A `movement_entry_id` pointing at no entry surfaces as a foreign-key
/// violation, mapped to a 400 reference error.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateWorkoutSet>,
) -> AppResult<(StatusCode, Json<WorkoutSet>)> {
    validation::validate_weight(input.weight)?;
    validation::validate_reps(input.reps)?;
    let set = WorkoutSetRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(set)))
}

/// PUT /api/sets/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWorkoutSet>,
) -> AppResult<Json<WorkoutSet>> {
    if let Some(weight) = input.weight {
        validation::validate_weight(weight)?;
    }
    if let Some(reps) = input.reps {
        validation::validate_reps(reps)?;
    }
    let set = WorkoutSetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Set", id }))?;
    Ok(Json(set))
}

/// DELETE /api/sets/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeleteConfirmation>> {
    let deleted = WorkoutSetRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(DeleteConfirmation {
            message: "Set deleted successfully",
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Set", id }))
    }
}
