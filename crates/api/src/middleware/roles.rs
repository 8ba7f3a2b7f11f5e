//! Per-endpoint role guard.
//!
//! ```ignore
//! let route = guarded(patch(update), &[SystemRole::HrManager, SystemRole::SystemAdmin]);
//! ```

use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::MethodRouter,
};
use tracing::warn;

use super::auth::claims_from;
use crate::{AppState, error::ApiError};
use hris_core::auth::{SystemRole, authorize};
use hris_shared::AppError;

/// Roles allowed to review payroll configuration.
pub const REVIEWERS: &[SystemRole] = &[
    SystemRole::HrManager,
    SystemRole::PayrollManager,
    SystemRole::SystemAdmin,
    SystemRole::HrAdmin,
];

/// Roles allowed to take and read backups.
pub const BACKUP_OPERATORS: &[SystemRole] = &[SystemRole::SystemAdmin, SystemRole::PayrollManager];

/// Roles allowed to restore or delete backups.
pub const BACKUP_ADMINS: &[SystemRole] = &[SystemRole::SystemAdmin];

/// Roles allowed to edit insurance brackets.
pub const INSURANCE_EDITORS: &[SystemRole] = &[
    SystemRole::HrManager,
    SystemRole::PayrollManager,
    SystemRole::SystemAdmin,
];

/// Roles allowed to delete insurance brackets.
pub const INSURANCE_ADMINS: &[SystemRole] = &[SystemRole::HrManager, SystemRole::SystemAdmin];

/// Rejects callers whose token claims none of the `required` roles.
///
/// An empty `required` list lets every request through, signed in or not.
pub async fn role_guard(
    State(required): State<&'static [SystemRole]>,
    request: Request,
    next: Next,
) -> Response {
    if required.is_empty() {
        return next.run(request).await;
    }

    let claims = match claims_from(request.extensions()) {
        Ok(claims) => claims,
        Err(failure) => return ApiError::from(failure).into_response(),
    };

    if let Err(denied) = authorize(&claims.claimed_roles(), required) {
        warn!(
            user_id = %claims.sub,
            email = %claims.email,
            required = ?denied.required,
            claimed = ?denied.claimed,
            path = %request.uri().path(),
            "Access denied"
        );
        let message = format!("{denied}. User: {} ({})", claims.sub, claims.email);
        return ApiError(AppError::Forbidden(message)).into_response();
    }

    next.run(request).await
}

/// Puts a method route behind the role guard.
pub fn guarded(
    route: MethodRouter<AppState>,
    required: &'static [SystemRole],
) -> MethodRouter<AppState> {
    route.route_layer(middleware::from_fn_with_state(required, role_guard))
}
