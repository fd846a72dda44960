//! Route definitions for the Shiftlog HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`, except
//! the health check. The router receives `AppState` and passes it to all
//! handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.server.max_upload_size_bytes as usize;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(report_routes())
        .merge(monitoring_routes())
        .merge(admin_routes());

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes())
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .with_state(state)
}

/// Auth and self-service endpoints
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
        .route("/settings", get(handlers::settings::get_settings))
        .route("/settings", put(handlers::settings::update_settings))
        .route("/settings/password", put(handlers::settings::change_password))
}

/// Dashboard, reports, templates, and item autocomplete
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(handlers::dashboard::dashboard))
        .route("/reports", post(handlers::report::create_report))
        .route("/reports/{id}", get(handlers::report::get_report))
        .route("/reports/{id}", put(handlers::report::update_report))
        .route("/reports/{id}", delete(handlers::report::delete_report))
        .route("/items/search", get(handlers::item::search_items))
        .route("/templates", get(handlers::template::list_templates))
        .route("/templates", post(handlers::template::create_template))
        .route("/templates/{id}", delete(handlers::template::delete_template))
}

/// Monitoring and audit endpoints
fn monitoring_routes() -> Router<AppState> {
    Router::new()
        .route("/monitoring/overview", get(handlers::monitoring::overview))
        .route(
            "/monitoring/users/{id}",
            get(handlers::monitoring::user_detail),
        )
        .route("/audit-log", get(handlers::audit::view_audit_log))
}

/// Admin-only endpoints
fn admin_routes() -> Router<AppState> {
    Router::new()
        // User management
        .route("/admin/users", get(handlers::admin::users::list_users))
        .route("/admin/users/{id}", put(handlers::admin::users::update_user))
        .route(
            "/admin/users/{id}/favorite",
            put(handlers::admin::users::toggle_favorite),
        )
        .route(
            "/admin/users/{id}",
            delete(handlers::admin::users::delete_user),
        )
        // Category management
        .route(
            "/admin/categories",
            get(handlers::admin::categories::list_categories),
        )
        .route(
            "/admin/categories",
            post(handlers::admin::categories::create_category),
        )
        .route(
            "/admin/categories/{id}",
            put(handlers::admin::categories::update_category),
        )
        .route(
            "/admin/categories/{id}/toggle",
            put(handlers::admin::categories::toggle_category),
        )
        .route(
            "/admin/categories/{id}",
            delete(handlers::admin::categories::delete_category),
        )
        // Item catalog
        .route("/admin/items", get(handlers::admin::items::list_items))
        .route("/admin/items", post(handlers::admin::items::create_item))
        .route("/admin/items", delete(handlers::admin::items::clear_items))
        .route("/admin/items/{id}", put(handlers::admin::items::update_item))
        .route(
            "/admin/items/{id}",
            delete(handlers::admin::items::delete_item),
        )
        .route(
            "/admin/items/upload",
            post(handlers::admin::items::upload_items),
        )
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}
