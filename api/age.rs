use age_fraction_calculator::clock::{Clock, SystemClock};
use age_fraction_calculator::error::AgeError;
use age_fraction_calculator::{handlers, logging, serverless};
use vercel_runtime::{run, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init_serverless_logger();
    run(handler).await
}

/// GET /api/{dob} — age plus a formatted sentence.
///
/// The date of birth comes from the rewritten path or a `dob` query parameter.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    if *req.method() != http::Method::GET {
        return Ok(serverless::into_vercel(handlers::method_not_allowed(
            "Use GET /api/{dob} to look up an age",
        )));
    }

    let response = match handlers::age::dob_from_uri(req.uri()) {
        Some(dob) => handlers::age::handle(&dob, SystemClock.now()),
        None => handlers::error_response(&AgeError::MissingInput),
    };
    Ok(serverless::into_vercel(response))
}
