/// POST /calculate — age for the `dob` field of a JSON body.
use chrono::NaiveDateTime;
use http::StatusCode;
use serde_json::Value;

use super::{error_response, json_response, HttpResponse};
use crate::engine::{calculate_age, parse_birth_date};
use crate::error::{AgeError, Result};
use crate::models::{AgeResult, CalculateRequest};

/// Pull the date-of-birth string out of a request body.
///
/// A body that is not JSON, or a `dob` that is absent, null, or blank, counts
/// as missing. A `dob` of any other non-string type is an invalid date.
pub fn extract_dob(body: &[u8]) -> Result<String> {
    let request: CalculateRequest = match serde_json::from_slice(body) {
        Ok(object @ Value::Object(_)) => {
            serde_json::from_value(object).map_err(|_| AgeError::MissingInput)?
        }
        _ => return Err(AgeError::MissingInput),
    };

    match request.dob {
        None | Some(Value::Null) => Err(AgeError::MissingInput),
        Some(Value::String(dob)) if dob.trim().is_empty() => Err(AgeError::MissingInput),
        Some(Value::String(dob)) => Ok(dob),
        Some(other) => Err(AgeError::InvalidDate {
            input: other.to_string(),
        }),
    }
}

pub fn calculate(body: &[u8], now: NaiveDateTime) -> Result<AgeResult> {
    let dob = extract_dob(body)?;
    let birth = parse_birth_date(&dob)?;
    calculate_age(birth, now)
}

pub fn handle(body: &[u8], now: NaiveDateTime) -> HttpResponse {
    match calculate(body, now) {
        Ok(result) => json_response(StatusCode::OK, &result),
        Err(e) => error_response(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 20)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_extract_dob() {
        assert_eq!(extract_dob(br#"{"dob":"1990-05-20"}"#).unwrap(), "1990-05-20");
        assert_eq!(extract_dob(br#"{}"#), Err(AgeError::MissingInput));
        assert_eq!(extract_dob(br#"{"dob":null}"#), Err(AgeError::MissingInput));
        assert_eq!(extract_dob(br#"{"dob":""}"#), Err(AgeError::MissingInput));
        assert_eq!(extract_dob(b""), Err(AgeError::MissingInput));
        assert_eq!(extract_dob(b"dob=1990-05-20"), Err(AgeError::MissingInput));
        assert_eq!(extract_dob(br#"["1990-05-20"]"#), Err(AgeError::MissingInput));
        assert_eq!(extract_dob(br#""1990-05-20""#), Err(AgeError::MissingInput));
        assert!(matches!(
            extract_dob(br#"{"dob":19900520}"#),
            Err(AgeError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_handle_success() {
        let response = handle(br#"{"dob":"1990-05-20"}"#, now());
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = serde_json::from_str(response.body()).unwrap();
        assert_eq!(body["years"], 34);
        assert_eq!(body["fraction"]["numerator"], 0);
        assert_eq!(body["fraction"]["denominator"], 1);
        assert_eq!(body["daysSinceBirthday"], 0);
        assert!(body["decimal"].as_f64().unwrap() >= 34.0);
        assert!(body.get("formatted").is_none());
    }

    #[test]
    fn test_handle_missing_dob() {
        let response = handle(br#"{"name":"x"}"#, now());
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.body(), r#"{"error":"Date of birth required"}"#);
    }

    #[test]
    fn test_handle_rejects_array_body() {
        let response = handle(br#"["1990-05-20"]"#, now());
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.body(), r#"{"error":"Date of birth required"}"#);
    }

    #[test]
    fn test_handle_malformed_dob() {
        let response = handle(br#"{"dob":"yesterday"}"#, now());
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.body(), r#"{"error":"Invalid date format"}"#);
    }
}
