//! Request observation middleware: one line per request, plus an error line
//! for 5xx responses.

use axum::{extract::Request, middleware::Next, response::Response};
use log::{error, info};

pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();
    info!("{} {} -> {}", method, uri, status);
    if status.is_server_error() {
        error!("{} {} returned {}", method, uri, status);
    }

    response
}
