use age_fraction_calculator::{handlers, logging, serverless};
use vercel_runtime::{run, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init_serverless_logger();
    run(handler).await
}

/// GET / — the date-of-birth form.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    if *req.method() != http::Method::GET {
        return Ok(serverless::into_vercel(handlers::method_not_allowed(
            "Use GET to load the calculator page",
        )));
    }

    Ok(serverless::into_vercel(handlers::index::handle()))
}
