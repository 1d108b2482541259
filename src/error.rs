use chrono::NaiveDate;
use http::StatusCode;
use thiserror::Error;

/// Failures surfaced while turning a date of birth into an age.
///
/// Every variant is handled at the request boundary and reported as a
/// `400 Bad Request` with a short client-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgeError {
    #[error("date of birth was not supplied")]
    MissingInput,

    #[error("could not parse date of birth: {input:?}")]
    InvalidDate { input: String },

    #[error("date of birth {date} is after the current date")]
    BirthDateInFuture { date: NaiveDate },
}

impl AgeError {
    /// Message returned to HTTP clients in the `error` field.
    pub fn client_message(&self) -> &'static str {
        match self {
            AgeError::MissingInput => "Date of birth required",
            AgeError::InvalidDate { .. } | AgeError::BirthDateInFuture { .. } => {
                "Invalid date format"
            }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

pub type Result<T> = std::result::Result<T, AgeError>;

/// Startup failures for the standalone server.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_messages_match_http_contract() {
        assert_eq!(AgeError::MissingInput.client_message(), "Date of birth required");
        assert_eq!(
            AgeError::InvalidDate { input: "nope".into() }.client_message(),
            "Invalid date format"
        );
        let future = NaiveDate::from_ymd_opt(2999, 1, 1).unwrap();
        assert_eq!(
            AgeError::BirthDateInFuture { date: future }.client_message(),
            "Invalid date format"
        );
    }

    #[test]
    fn test_all_errors_are_bad_requests() {
        assert_eq!(AgeError::MissingInput.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AgeError::InvalidDate { input: String::new() }.status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}
