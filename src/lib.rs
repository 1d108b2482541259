/// Age Fraction Calculator — Shared Library
///
/// Computes a person's age as whole years plus the best small-fraction
/// approximation of the elapsed part of the current year ("27 and 3/8 years").
///
/// Each serverless function in `api/` and the standalone server in
/// `src/bin/server.rs` import from this library to keep handlers thin.

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod page;
pub mod server;
pub mod serverless;

pub use engine::{calculate_age, parse_birth_date};
pub use error::{AgeError, Result};

/// Application name reported by the health endpoint.
pub const APP_NAME: &str = "age-fraction-calculator";

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
