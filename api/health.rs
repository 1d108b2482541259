use age_fraction_calculator::clock::{Clock, SystemClock};
use age_fraction_calculator::{handlers, logging, serverless};
use vercel_runtime::{run, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init_serverless_logger();
    run(handler).await
}

/// GET /health — liveness check.
pub async fn handler(_req: Request) -> Result<Response<Body>, Error> {
    Ok(serverless::into_vercel(handlers::health::handle(
        SystemClock.now(),
    )))
}
