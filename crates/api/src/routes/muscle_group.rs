//! Route definitions for the `/muscle-groups` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movement_entry;
use crate::state::AppState;

/// Routes mounted at `/muscle-groups`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movement_entry::list).post(movement_entry::create))
        .route("/distinct-groups", get(movement_entry::distinct_groups))
        .route("/movements", get(movement_entry::movement_names))
        .route(
            "/{id}",
            get(movement_entry::get_by_id)
                .put(movement_entry::update)
                .delete(movement_entry::delete),
        )
}
