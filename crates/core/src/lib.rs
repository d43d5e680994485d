//! Pure domain logic for the Sport Log backend.
//!
//! No database or HTTP dependencies live here; this crate holds shared
//! types, the domain error enum, input validation rules, and the
//! days-since-last-workout calculator.

pub mod error;
pub mod rest;
pub mod types;
pub mod validation;
