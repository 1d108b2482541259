//! Glue between the shared handlers and `vercel_runtime` functions.

use vercel_runtime::{Body, Request, Response};

use crate::handlers::HttpResponse;

/// Raw bytes of a serverless request body.
pub fn request_body(req: &Request) -> &[u8] {
    match req.body() {
        Body::Empty => &[],
        Body::Text(text) => text.as_bytes(),
        Body::Binary(bytes) => bytes.as_slice(),
    }
}

/// Convert a handler response into the runtime's response type.
pub fn into_vercel(response: HttpResponse) -> Response<Body> {
    let (parts, body) = response.into_parts();
    Response::from_parts(parts, Body::Text(body))
}
