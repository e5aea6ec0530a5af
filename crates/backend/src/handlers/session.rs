use axum::extract::{Json, Path};
use uuid::Uuid;

use contracts::session::{LoginRequest, NavigateRequest, SessionSnapshot};

use crate::domain::session::service;
use crate::shared::config;
use crate::shared::error::ApiError;

/// POST /api/session
pub async fn create() -> Json<SessionSnapshot> {
    Json(service::create())
}

/// GET /api/session/:id
pub async fn get_by_id(Path(id): Path<Uuid>) -> Result<Json<SessionSnapshot>, ApiError> {
    service::snapshot(id).map(Json)
}

/// POST /api/session/:id/login
pub async fn login(
    Path(id): Path<Uuid>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let secret = &config::get_config().auth.admin_password;
    service::login(id, &request.password, secret).map(Json)
}

/// POST /api/session/:id/logout
pub async fn logout(Path(id): Path<Uuid>) -> Result<Json<SessionSnapshot>, ApiError> {
    service::logout(id).map(Json)
}

/// POST /api/session/:id/navigate
pub async fn navigate(
    Path(id): Path<Uuid>,
    Json(request): Json<NavigateRequest>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    service::navigate(id, &request.target).map(Json)
}

/// DELETE /api/session/:id
pub async fn end(Path(id): Path<Uuid>) -> Result<(), ApiError> {
    service::end(id)
}
