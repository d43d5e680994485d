//! Route definitions for the `/workouts` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::workout;
use crate::state::AppState;

/// Routes mounted at `/workouts`.
///
/// The static `/last` segment takes precedence over the `/{id}` capture.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(workout::list).post(workout::create))
        .route("/last", get(workout::last))
        .route(
            "/{id}",
            get(workout::get_by_id)
                .put(workout::replace)
                .delete(workout::delete),
        )
}
