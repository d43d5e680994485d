pub mod health;
pub mod muscle_group;
pub mod set_entry;
pub mod workout;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /workouts                        list, create
/// /workouts/last                   days-since-last-workout lookup
/// /workouts/{id}                   get (with tree), replace, delete
///
/// /muscle-groups                   list (?date=), create
/// /muscle-groups/distinct-groups   distinct muscle group names
/// /muscle-groups/movements         distinct movement names (?muscle_group=)
/// /muscle-groups/{id}              get (with sets), update, delete
///
/// /sets                            list (?movement_entry_id=), create
/// /sets/{id}                       get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/workouts", workout::router())
        .nest("/muscle-groups", muscle_group::router())
        .nest("/sets", set_entry::router())
}
