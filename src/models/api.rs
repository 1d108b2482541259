use serde::{Deserialize, Serialize};

/// API request body for `POST /calculate`.
///
/// Only a JSON object is accepted; see `handlers::calculate::extract_dob`.
/// `dob` stays untyped so that a missing value and a value of the wrong
/// type can be reported differently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculateRequest {
    #[serde(default)]
    pub dob: Option<serde_json::Value>,
}

/// Query string accepted by the serverless `GET /api/age` function.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgeQuery {
    #[serde(default)]
    pub dob: Option<String>,
}

/// JSON body of every 4xx response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorBody {
            error: error.into(),
        }
    }
}

/// Liveness payload returned by `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub app: String,
    pub status: String,
    pub version: String,
    /// RFC 3339 timestamp of the check.
    pub time: String,
}
