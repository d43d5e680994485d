//! Field-level validation rules for workout submissions.
//!
//! Handlers run these over the full submitted tree before touching the
//! store, so malformed input fails with a 400 instead of a constraint
//! violation deep inside a transaction.

use crate::error::CoreError;

/// Planned set count must be at least 1.
pub fn validate_set_number(set_number: i32) -> Result<(), CoreError> {
    if set_number < 1 {
        return Err(CoreError::Validation(format!(
            "set_number must be at least 1, got {set_number}"
        )));
    }
    Ok(())
}

/// Weight (kilograms, assist level, or seconds depending on the movement)
/// must be non-negative. The server does not interpret the unit.
pub fn validate_weight(weight: f64) -> Result<(), CoreError> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(CoreError::Validation(format!(
            "weight must be a non-negative number, got {weight}"
        )));
    }
    Ok(())
}

/// Rep count must be non-negative.
pub fn validate_reps(reps: i32) -> Result<(), CoreError> {
    if reps < 0 {
        return Err(CoreError::Validation(format!(
            "reps must be non-negative, got {reps}"
        )));
    }
    Ok(())
}

/// Advisory rest-gap snapshot must be non-negative when present.
pub fn validate_days_since(days: i32) -> Result<(), CoreError> {
    if days < 0 {
        return Err(CoreError::Validation(format!(
            "days_since_last_workout must be non-negative, got {days}"
        )));
    }
    Ok(())
}

/// Duration is stored as opaque `HH:MM` text; minutes must be below 60.
pub fn validate_duration(duration: &str) -> Result<(), CoreError> {
    let invalid = || {
        CoreError::Validation(format!(
            "duration must be in HH:MM format, got {duration:?}"
        ))
    };

    let (hours, minutes) = duration.split_once(':').ok_or_else(invalid)?;
    let _: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
    if minutes >= 60 {
        return Err(invalid());
    }
    Ok(())
}
