use age_fraction_calculator::clock::{Clock, SystemClock};
use age_fraction_calculator::{handlers, logging, serverless};
use vercel_runtime::{run, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init_serverless_logger();
    run(handler).await
}

/// POST /calculate — age for the `dob` field of a JSON body.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    if *req.method() != http::Method::POST {
        return Ok(serverless::into_vercel(handlers::method_not_allowed(
            "Use POST with a JSON body containing \"dob\"",
        )));
    }

    let response = handlers::calculate::handle(serverless::request_body(&req), SystemClock.now());
    Ok(serverless::into_vercel(response))
}
