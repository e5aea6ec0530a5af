use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use uuid::Uuid;

use crate::domain::session::service;
use crate::shared::error::ApiError;

/// Middleware that requires an admin-authenticated session
///
/// The UI Shell passes its session id in the `X-Session-Id` header; the
/// session must exist and have passed the auth gate. Failures surface
/// through the regular error taxonomy so the UI gets a message to display.
pub async fn require_admin(mut req: Request<Body>, next: Next) -> Result<Response, ApiError> {
    // Extract session header
    let header = req
        .headers()
        .get("X-Session-Id")
        .and_then(|h| h.to_str().ok())
        .ok_or(ApiError::AdminRequired)?;

    let session_id = Uuid::parse_str(header).map_err(|_| ApiError::AdminRequired)?;

    // Check admin flag
    service::authorize_admin(session_id)?;

    // Make the session id available to handlers
    req.extensions_mut().insert(session_id);

    Ok(next.run(req).await)
}
