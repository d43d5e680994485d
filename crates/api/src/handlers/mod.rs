//! HTTP handlers, one module per resource.

pub mod movement_entry;
pub mod workout;
pub mod workout_set;

use serde::Serialize;

/// Confirmation body returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct DeleteConfirmation {
    pub message: &'static str,
}
