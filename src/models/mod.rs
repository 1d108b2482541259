//! Domain models for the age calculator.
//!
//! These types are shared across the engine, the handlers, and the binaries.

pub mod age;
pub mod api;

pub use age::{AgeResult, FormattedAgeResult, Fraction};
pub use api::{AgeQuery, CalculateRequest, ErrorBody, HealthStatus};

