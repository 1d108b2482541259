/// GET /api/{dob} — age plus a formatted sentence.
use chrono::NaiveDateTime;
use http::{StatusCode, Uri};
use percent_encoding::percent_decode_str;

use super::{error_response, json_response, HttpResponse};
use crate::engine::{calculate_age, parse_birth_date};
use crate::error::Result;
use crate::models::{AgeQuery, FormattedAgeResult};

pub fn age_for(dob: &str, now: NaiveDateTime) -> Result<FormattedAgeResult> {
    let birth = parse_birth_date(dob)?;
    Ok(calculate_age(birth, now)?.into())
}

pub fn handle(dob: &str, now: NaiveDateTime) -> HttpResponse {
    match age_for(dob, now) {
        Ok(result) => json_response(StatusCode::OK, &result),
        Err(e) => error_response(&e),
    }
}

/// Locate the date of birth in a request URI.
///
/// A `dob` query parameter wins; otherwise the last path segment is used
/// unless it is the function's own name (`/api/age`). Both are percent-decoded.
pub fn dob_from_uri(uri: &Uri) -> Option<String> {
    let from_query = uri
        .query()
        .and_then(|query| serde_urlencoded::from_str::<AgeQuery>(query).ok())
        .and_then(|query| query.dob)
        .filter(|dob| !dob.is_empty());

    from_query.or_else(|| {
        uri.path()
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty() && *segment != "age" && *segment != "api")
            .and_then(|segment| percent_decode_str(segment).decode_utf8().ok())
            .map(|segment| segment.into_owned())
    })
}
