use axum::body::Body;
use axum::http::{header, HeaderMap, Request};
use axum::middleware::Next;
use axum::response::Response;

/// Middleware that logs every HTTP request
///
/// Emits method, path, status code, duration and response size through
/// tracing. The size comes from the Content-Length header so bodies are
/// never buffered; streaming responses without the header log as "?".
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let size = match content_length(response.headers()) {
        Some(n) => n.to_string(),
        None => "?".to_string(),
    };

    tracing::info!(
        "{} {} -> {} in {}ms, {} bytes",
        method,
        path,
        response.status().as_u16(),
        start.elapsed().as_millis(),
        size
    );

    response
}

fn content_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(header::CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}
