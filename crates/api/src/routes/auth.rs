//! Authentication routes for login, password change and the current caller.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    AppState,
    error::{ApiError, ApiResult, database},
    extractors::ValidatedJson,
    middleware::AuthUser,
};
use hris_core::auth::{PasswordError, SystemRole, hash_password, verify_password};
use hris_db::EmployeeRepository;
use hris_shared::{
    AppError,
    auth::{ChangePasswordRequest, LoginRequest, LoginResponse},
};

/// Creates the auth router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/change-password", post(change_password))
        .route("/auth/me", get(me))
}

fn invalid_credentials() -> ApiError {
    ApiError(AppError::Unauthorized("Invalid credentials".to_string()))
}

/// Checks a login password. A hash from another scheme counts as a mismatch.
fn password_matches(employee_id: Uuid, password: &str, hash: &str) -> ApiResult<bool> {
    match verify_password(password, hash) {
        Ok(matches) => Ok(matches),
        Err(PasswordError::InvalidHash) => {
            warn!(user_id = %employee_id, "Stored password hash is not Argon2");
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

/// POST /auth/login - Verify credentials and issue an access token.
async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    let repo = EmployeeRepository::new((*state.db).clone());

    let Some(employee) = repo.find_by_email(&payload.email).await.map_err(|e| {
        error!(error = %e, "Database error during login");
        database(e)
    })?
    else {
        info!(email = %payload.email, "Login attempt for unknown email");
        return Err(invalid_credentials());
    };

    let Some(hash) = employee.password_hash.as_deref() else {
        info!(user_id = %employee.id, "Login attempt for employee without a password");
        return Err(invalid_credentials());
    };

    if !password_matches(employee.id, &payload.password, hash)? {
        info!(user_id = %employee.id, "Failed login attempt - invalid password");
        return Err(invalid_credentials());
    }

    let mut roles = repo.roles_for(employee.id).await.map_err(database)?;
    if roles.is_empty() {
        roles.push(SystemRole::fallback().display_name().to_string());
    }
    let role = roles[0].clone();
    let full_name = format!("{} {}", employee.first_name, employee.last_name);

    let access_token = state
        .jwt_service
        .generate_access_token(employee.id, &employee.work_email, roles, &full_name)
        .map_err(|e| {
            error!(error = %e, "Failed to generate access token");
            AppError::Internal(e.to_string())
        })?;

    info!(user_id = %employee.id, %role, "Employee logged in");

    Ok(Json(LoginResponse {
        access_token,
        expires_in: state.jwt_service.access_token_expires_in(),
        user_id: employee.id,
        email: employee.work_email,
        full_name,
        role,
        is_temporary_password: employee.is_temporary_password,
    }))
}

/// POST /auth/change-password - Replace the caller's password.
async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(payload): ValidatedJson<ChangePasswordRequest>,
) -> ApiResult<impl IntoResponse> {
    let hash = hash_password(&payload.new_password)?;
    let repo = EmployeeRepository::new((*state.db).clone());

    match repo.set_password(auth.user_id(), hash, false).await {
        Ok(_) => {}
        Err(sea_orm::DbErr::RecordNotFound(_)) => {
            return Err(ApiError(AppError::NotFound("Employee not found".to_string())));
        }
        Err(e) => {
            error!(user_id = %auth.user_id(), error = %e, "Failed to store new password");
            return Err(database(e));
        }
    }

    info!(user_id = %auth.user_id(), "Password changed");
    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Password changed successfully" })),
    ))
}

/// GET /auth/me - The caller's decoded token claims.
async fn me(auth: AuthUser) -> impl IntoResponse {
    Json(auth.0)
}
