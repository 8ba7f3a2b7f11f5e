//! Unit tests for claims and token handling.

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::auth::Claims;
use crate::config::JwtConfig;
use crate::jwt::{JwtError, JwtService};

fn create_test_service() -> JwtService {
    JwtService::new(&JwtConfig {
        secret: "test-secret-key-for-testing".to_string(),
        access_token_expiry_secs: 3600,
    })
}

fn roles(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

#[test]
fn test_claims_new_sets_correct_fields() {
    let user_id = Uuid::new_v4();
    let expires_at = Utc::now() + Duration::hours(1);

    let claims = Claims::new(
        user_id,
        "alice@company.com",
        roles(&["HR Manager", "System Admin"]),
        "Alice Smith",
        expires_at,
    );

    assert_eq!(claims.sub, user_id);
    assert_eq!(claims.email, "alice@company.com");
    assert_eq!(claims.role, "HR Manager");
    assert_eq!(claims.roles.len(), 2);
    assert!(claims.iat <= Utc::now().timestamp());
    assert_eq!(claims.exp, expires_at.timestamp());
}

#[test]
fn test_claimed_roles_prefers_plural_claim() {
    let mut claims = Claims::new(
        Uuid::new_v4(),
        "a@b.c",
        roles(&["Payroll Manager"]),
        "",
        Utc::now() + Duration::hours(1),
    );
    claims.role = "Recruiter".to_string();

    assert_eq!(claims.claimed_roles(), vec!["Payroll Manager"]);
}

#[test]
fn test_claimed_roles_falls_back_to_singular_claim() {
    let mut claims = Claims::new(
        Uuid::new_v4(),
        "a@b.c",
        Vec::new(),
        "",
        Utc::now() + Duration::hours(1),
    );
    assert!(claims.claimed_roles().is_empty());

    claims.role = "HR Admin".to_string();
    assert_eq!(claims.claimed_roles(), vec!["HR Admin"]);
}

#[test]
fn test_claims_serialize_camel_case() {
    let claims = Claims::new(
        Uuid::nil(),
        "a@b.c",
        roles(&["Recruiter"]),
        "Ann Lee",
        Utc::now() + Duration::hours(1),
    );
    let json = serde_json::to_value(&claims).unwrap();

    assert_eq!(json["fullName"], "Ann Lee");
    assert_eq!(json["roles"][0], "Recruiter");
}

#[test]
fn test_claims_without_roles_deserialize() {
    let json = serde_json::json!({
        "sub": Uuid::nil(),
        "email": "legacy@company.com",
        "role": "System Admin",
        "iat": 0,
        "exp": 1,
    });
    let claims: Claims = serde_json::from_value(json).unwrap();

    assert!(claims.roles.is_empty());
    assert_eq!(claims.claimed_roles(), vec!["System Admin"]);
}

#[test]
fn test_generate_and_validate_token() {
    let service = create_test_service();
    let user_id = Uuid::new_v4();

    let token = service
        .generate_access_token(user_id, "bob@company.com", roles(&["HR Admin"]), "Bob")
        .unwrap();
    let claims = service.validate_token(&token).unwrap();

    assert_eq!(claims.user_id(), user_id);
    assert_eq!(claims.role, "HR Admin");
    assert_eq!(claims.full_name, "Bob");
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[test]
fn test_expired_token_is_reported() {
    let service = create_test_service();
    let claims = Claims::new(
        Uuid::new_v4(),
        "a@b.c",
        Vec::new(),
        "",
        Utc::now() - Duration::hours(2),
    );
    let token = service.encode(&claims).unwrap();

    assert!(matches!(service.validate_token(&token), Err(JwtError::Expired)));
}

#[test]
fn test_token_from_other_secret_is_rejected() {
    let other = JwtService::new(&JwtConfig {
        secret: "another-secret".to_string(),
        access_token_expiry_secs: 60,
    });
    let token = other
        .generate_access_token(Uuid::new_v4(), "a@b.c", Vec::new(), "")
        .unwrap();

    let result = create_test_service().validate_token(&token);
    assert!(matches!(result, Err(JwtError::DecodingError(_))));
}

#[test]
fn test_invalid_token() {
    let service = create_test_service();
    assert!(service.validate_token("invalid.token.here").is_err());
}

#[test]
fn test_debug_hides_keys() {
    let rendered = format!("{:?}", create_test_service());
    assert!(rendered.contains("[hidden]"));
    assert!(!rendered.contains("test-secret-key"));
}
