//! In-process router tests.
//!
//! The database is disconnected, so these cover the paths that finish before
//! any query: token handling, role guards and body validation.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use rstest::rstest;
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use super::{AppState, create_router};
use hris_shared::{Claims, JwtConfig, JwtService};

fn jwt() -> JwtService {
    JwtService::new(&JwtConfig {
        secret: "router-test-secret-with-enough-length".to_string(),
        access_token_expiry_secs: 3600,
    })
}

fn app() -> Router {
    create_router(AppState::new(DatabaseConnection::Disconnected, jwt()))
}

fn token_for(roles: &[&str]) -> String {
    jwt()
        .generate_access_token(
            Uuid::nil(),
            "tester@example.com",
            roles.iter().map(ToString::to_string).collect(),
            "Test User",
        )
        .unwrap()
}

async fn send(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app().oneshot(builder.body(body).unwrap()).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_reports_database_down() {
    let response = send(Method::GET, "/health", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "down");
}

#[tokio::test]
async fn test_guarded_route_without_token_is_unauthorized() {
    let response = send(
        Method::GET,
        "/payroll-configuration/pending-approvals",
        None,
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized_on_guarded_route() {
    let response = send(
        Method::GET,
        "/payroll-configuration/backups",
        Some("not-a-jwt"),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid or malformed token");
}

#[tokio::test]
async fn test_expired_token_is_reported() {
    let now = Utc::now();
    let claims = Claims {
        sub: Uuid::nil(),
        email: "tester@example.com".to_string(),
        role: "System Admin".to_string(),
        roles: vec!["System Admin".to_string()],
        full_name: "Test User".to_string(),
        iat: (now - Duration::hours(3)).timestamp(),
        exp: (now - Duration::hours(2)).timestamp(),
    };
    let token = jwt().encode(&claims).unwrap();

    let response = send(
        Method::GET,
        "/payroll-configuration/backups",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Token has expired");
}

#[tokio::test]
async fn test_wrong_role_is_forbidden_with_caller_details() {
    let token = token_for(&["Recruiter"]);
    let response = send(
        Method::GET,
        "/payroll-configuration/pending-approvals",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = body_json(response).await;
    assert_eq!(body["error"], "FORBIDDEN");
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("Recruiter"));
    assert!(message.contains("tester@example.com"));
}

#[rstest]
#[case(&["super-admin"])]
#[case(&["HR Admin"])]
#[case(&["PAYROLL_MANAGER"])]
#[tokio::test]
async fn test_reviewer_passes_guard(#[case] roles: &[&str]) {
    let token = token_for(roles);
    let response = send(
        Method::GET,
        "/payroll-configuration/pending-approvals",
        Some(&token),
        None,
    )
    .await;

    // Past the guard the disconnected database answers.
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "DATABASE_ERROR");
    assert_eq!(body["message"], "An internal error occurred");
}

#[tokio::test]
async fn test_payroll_manager_cannot_delete_insurance_bracket() {
    let token = token_for(&["Payroll Manager"]);
    let uri = format!("/payroll-configuration/insurance-brackets/{}", Uuid::new_v4());
    let response = send(Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_insurance_patch_validated_after_guard() {
    let token = token_for(&["Payroll Manager"]);
    let uri = format!("/payroll-configuration/insurance-brackets/{}", Uuid::new_v4());
    let response = send(
        Method::PATCH,
        &uri,
        Some(&token),
        Some(json!({"employerRate": 140})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_open_create_rejects_negative_amount() {
    let response = send(
        Method::POST,
        "/payroll-configuration/pay-types",
        None,
        Some(json!({"type": "Monthly", "amount": -1})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_rejects_malformed_json() {
    let response = app()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/payroll-configuration/benefits")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"name\":"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_rejects_amount_too_large_for_storage() {
    let response = send(
        Method::POST,
        "/payroll-configuration/pay-types",
        None,
        Some(json!({"type": "Monthly", "amount": "10000000000000"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[rstest]
#[case(Some("application/json"), "{\"payDate\":")]
#[case(None, "{\"payDate\": 25}")]
#[tokio::test]
async fn test_settings_patch_rejects_bad_body_as_json_error(
    #[case] content_type: Option<&str>,
    #[case] body: &'static str,
) {
    let mut builder = Request::builder()
        .method(Method::PATCH)
        .uri("/payroll-configuration/company-settings");
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let response = app()
        .oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_approve_requires_reviewer() {
    let uri = format!("/payroll-configuration/tax-rules/{}/approve", Uuid::new_v4());
    let response = send(Method::PATCH, &uri, None, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let token = token_for(&["Department Employee"]);
    let response = send(Method::PATCH, &uri, Some(&token), None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_me_returns_claims() {
    let token = token_for(&["HR Manager", "Recruiter"]);
    let response = send(Method::GET, "/auth/me", Some(&token), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["email"], "tester@example.com");
    assert_eq!(body["role"], "HR Manager");
    assert_eq!(body["roles"], json!(["HR Manager", "Recruiter"]));
    assert_eq!(body["fullName"], "Test User");
}

#[tokio::test]
async fn test_me_without_token_is_unauthorized() {
    let response = send(Method::GET, "/auth/me", None, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_validates_email() {
    let response = send(
        Method::POST,
        "/auth/login",
        None,
        Some(json!({"email": "not-an-email", "password": "x"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_change_password_enforces_length() {
    let token = token_for(&["HR Employee"]);
    let response = send(
        Method::POST,
        "/auth/change-password",
        Some(&token),
        Some(json!({"newPassword": "short"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
