//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod movement_entry_repo;
pub mod workout_repo;
pub mod workout_set_repo;

pub use movement_entry_repo::MovementEntryRepo;
pub use workout_repo::WorkoutRepo;
pub use workout_set_repo::WorkoutSetRepo;
