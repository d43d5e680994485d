//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) where partial
//!   updates exist (workouts are always replaced whole, never patched)

pub mod movement_entry;
pub mod workout;
pub mod workout_set;
