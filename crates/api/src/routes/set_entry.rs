//! Route definitions for the `/sets` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::workout_set;
use crate::state::AppState;

/// Routes mounted at `/sets`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(workout_set::list).post(workout_set::create))
        .route(
            "/{id}",
            get(workout_set::get_by_id)
                .put(workout_set::update)
                .delete(workout_set::delete),
        )
}
