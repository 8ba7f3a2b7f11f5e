//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod auth;
pub mod health;
pub mod payroll;

/// Creates the API router with all routes.
///
/// Authentication is soft: handlers and role guards decide whether a caller
/// is required, so every route sits under the same token middleware.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .nest("/payroll-configuration", payroll::routes())
}
