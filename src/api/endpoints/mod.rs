//! API endpoint handlers.
//!
//! One module per route. Handlers validate with the shared request type,
//! then delegate to the analysis engine.

pub mod analyze;
pub mod doctors;
pub mod health;
pub mod home;
pub mod quick_symptoms;
