use axum::extract::DefaultBodyLimit;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, system};

/// Configure all application routes
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SESSION ROUTES (PUBLIC)
        // ========================================
        .route("/api/session", post(handlers::session::create))
        .route(
            "/api/session/:id",
            get(handlers::session::get_by_id).delete(handlers::session::end),
        )
        .route("/api/session/:id/login", post(handlers::session::login))
        .route("/api/session/:id/logout", post(handlers::session::logout))
        .route(
            "/api/session/:id/navigate",
            post(handlers::session::navigate),
        )
        // ========================================
        // BROWSING ROUTES (PUBLIC)
        // ========================================
        .route("/api/categories", get(handlers::categories::list_all))
        .route("/api/categories/:key/files", get(handlers::files::list))
        .route(
            "/api/categories/:key/files/:name",
            get(handlers::files::fetch),
        )
        // ========================================
        // UPLOAD ROUTE (ADMIN ONLY)
        // ========================================
        .route(
            "/api/categories/:key/files",
            post(handlers::files::upload)
                .route_layer(middleware::from_fn(system::auth::middleware::require_admin))
                .layer(DefaultBodyLimit::disable()),
        )
}
