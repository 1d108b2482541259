//! Framework-neutral request handling.
//!
//! Every endpoint is a plain function from request parts (body bytes, path
//! segment, current instant) to an `http::Response<String>`. The axum server
//! and the serverless functions in `api/` both wrap these, so status codes,
//! headers, and error bodies are defined once.

pub mod age;
pub mod calculate;
pub mod health;
pub mod index;

use http::header::{HeaderValue, CONTENT_TYPE};
use http::StatusCode;
use serde::Serialize;

use crate::error::AgeError;
use crate::models::ErrorBody;

pub type HttpResponse = http::Response<String>;

const JSON: &str = "application/json";
const HTML: &str = "text/html; charset=utf-8";

fn respond(status: StatusCode, content_type: &'static str, body: String) -> HttpResponse {
    let mut response = http::Response::new(body);
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}

/// Serialize `payload` as the JSON body of a response with `status`.
pub fn json_response<T: Serialize>(status: StatusCode, payload: &T) -> HttpResponse {
    match serde_json::to_string(payload) {
        Ok(body) => respond(status, JSON, body),
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize response body");
            respond(
                StatusCode::INTERNAL_SERVER_ERROR,
                JSON,
                r#"{"error":"Internal server error"}"#.to_string(),
            )
        }
    }
}

pub fn html_response(body: &str) -> HttpResponse {
    respond(StatusCode::OK, HTML, body.to_string())
}

/// 400 response carrying the client-facing message for `err`.
pub fn error_response(err: &AgeError) -> HttpResponse {
    tracing::warn!(error = %err, "rejected date of birth");
    json_response(err.status_code(), &ErrorBody::new(err.client_message()))
}

pub fn not_found() -> HttpResponse {
    json_response(StatusCode::NOT_FOUND, &ErrorBody::new("Not found"))
}

pub fn method_not_allowed(message: &str) -> HttpResponse {
    json_response(StatusCode::METHOD_NOT_ALLOWED, &ErrorBody::new(message))
}
