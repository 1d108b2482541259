/// GET /health — liveness check.
use chrono::NaiveDateTime;
use http::StatusCode;

use super::{json_response, HttpResponse};
use crate::models::HealthStatus;
use crate::{version, APP_NAME};

pub fn status(now: NaiveDateTime) -> HealthStatus {
    HealthStatus {
        app: APP_NAME.to_string(),
        status: "live".to_string(),
        version: version().to_string(),
        time: now.and_utc().to_rfc3339(),
    }
}

pub fn handle(now: NaiveDateTime) -> HttpResponse {
    json_response(StatusCode::OK, &status(now))
}
