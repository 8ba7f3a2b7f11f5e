//! Handlers shared by every payroll configuration kind.
//!
//! Each handler is generic over the stored entity; `mod.rs` mounts one
//! concrete instantiation per kind.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::{ActiveModelBehavior, ActiveModelTrait, IntoActiveModel};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{error, info};
use uuid::Uuid;
use validator::Validate;

use super::requests::{
    ApproveRequest, CreateAllowanceRequest, CreateBenefitRequest, CreateInsuranceBracketRequest,
    CreatePayGradeRequest, CreatePayTypeRequest, CreatePolicyRequest, CreateSigningBonusRequest,
    CreateTaxRuleRequest, RejectRequest, UpdateAllowanceRequest, UpdateBenefitRequest,
    UpdateInsuranceBracketRequest, UpdatePayGradeRequest, UpdatePayTypeRequest,
    UpdatePolicyRequest, UpdateSigningBonusRequest, UpdateTaxRuleRequest,
};
use crate::{
    AppState,
    error::{ApiError, ApiResult},
    extractors::{OptionalJson, ValidatedJson},
    middleware::MaybeAuthUser,
};
use hris_db::entities::{
    allowances, benefits, insurance_brackets, pay_grades, pay_types, payroll_policies,
    signing_bonuses, tax_rules,
};
use hris_db::repositories::{ConfigEntity, ConfigError, ConfigRepository};

/// A configuration kind exposed over HTTP.
pub trait ConfigResource: ConfigEntity + Send + Sync + 'static {
    /// Body accepted by `POST /{kind}`.
    type CreateRequest: DeserializeOwned + Validate + Into<Self::Create> + Send + 'static;
    /// Body accepted by `PATCH /{kind}/{id}`.
    type UpdateRequest: DeserializeOwned + Validate + Into<Self::Patch> + Send + 'static;
}

macro_rules! resource {
    ($module:ident, $create:ty, $update:ty) => {
        impl ConfigResource for $module::Entity {
            type CreateRequest = $create;
            type UpdateRequest = $update;
        }
    };
}

resource!(pay_types, CreatePayTypeRequest, UpdatePayTypeRequest);
resource!(pay_grades, CreatePayGradeRequest, UpdatePayGradeRequest);
resource!(allowances, CreateAllowanceRequest, UpdateAllowanceRequest);
resource!(
    insurance_brackets,
    CreateInsuranceBracketRequest,
    UpdateInsuranceBracketRequest
);
resource!(tax_rules, CreateTaxRuleRequest, UpdateTaxRuleRequest);
resource!(benefits, CreateBenefitRequest, UpdateBenefitRequest);
resource!(
    signing_bonuses,
    CreateSigningBonusRequest,
    UpdateSigningBonusRequest
);
resource!(payroll_policies, CreatePolicyRequest, UpdatePolicyRequest);

/// Picks the reviewer recorded on a decision.
///
/// The body wins, then the caller's token subject, then `system`.
fn reviewer(explicit: Option<String>, caller: &MaybeAuthUser) -> String {
    explicit
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| caller.0.as_ref().map(|claims| claims.sub.to_string()))
        .unwrap_or_else(|| "system".to_string())
}

fn log_failure<E: ConfigEntity>(err: &ConfigError, action: &str, id: Option<Uuid>) {
    if matches!(err, ConfigError::Database(_) | ConfigError::Snapshot(_)) {
        error!(kind = %E::KIND, ?id, error = %err, "Failed to {} record", action);
    }
}

fn repo<E>(state: &AppState) -> ConfigRepository<E>
where
    E: ConfigResource,
    E::Model: IntoActiveModel<E::ActiveModel> + Serialize + DeserializeOwned + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
{
    ConfigRepository::new((*state.db).clone())
}

/// POST `/{kind}` - Create a draft record.
pub(super) async fn create_record<E>(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<E::CreateRequest>,
) -> ApiResult<impl IntoResponse>
where
    E: ConfigResource,
    E::Model: IntoActiveModel<E::ActiveModel> + Serialize + DeserializeOwned + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
{
    let created = repo::<E>(&state)
        .create(body.into())
        .await
        .inspect_err(|e| log_failure::<E>(e, "create", None))?;

    info!(kind = %E::KIND, id = %E::record_id(&created), "Configuration draft created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET `/{kind}` - List every record, oldest first.
pub(super) async fn list_records<E>(State(state): State<AppState>) -> ApiResult<impl IntoResponse>
where
    E: ConfigResource,
    E::Model: IntoActiveModel<E::ActiveModel> + Serialize + DeserializeOwned + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
{
    let records = repo::<E>(&state)
        .list()
        .await
        .inspect_err(|e| log_failure::<E>(e, "list", None))?;
    Ok(Json(records))
}

/// GET `/{kind}/{id}` - Fetch one record.
pub(super) async fn get_record<E>(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse>
where
    E: ConfigResource,
    E::Model: IntoActiveModel<E::ActiveModel> + Serialize + DeserializeOwned + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
{
    let record = repo::<E>(&state)
        .get(id)
        .await
        .inspect_err(|e| log_failure::<E>(e, "fetch", Some(id)))?;
    Ok(Json(record))
}

/// PATCH `/{kind}/{id}` - Merge a partial update.
pub(super) async fn update_record<E>(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(body): ValidatedJson<E::UpdateRequest>,
) -> ApiResult<impl IntoResponse>
where
    E: ConfigResource,
    E::Model: IntoActiveModel<E::ActiveModel> + Serialize + DeserializeOwned + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
{
    let updated = repo::<E>(&state)
        .update(id, body.into())
        .await
        .inspect_err(|e| log_failure::<E>(e, "update", Some(id)))?;

    info!(kind = %E::KIND, %id, "Configuration record updated");
    Ok(Json(updated))
}

/// DELETE `/{kind}/{id}` - Remove a record.
pub(super) async fn delete_record<E>(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
    E: ConfigResource,
    E::Model: IntoActiveModel<E::ActiveModel> + Serialize + DeserializeOwned + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
{
    repo::<E>(&state)
        .delete(id)
        .await
        .inspect_err(|e| log_failure::<E>(e, "delete", Some(id)))?;

    info!(kind = %E::KIND, %id, "Configuration record deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH `/{kind}/{id}/approve` - Approve a draft.
pub(super) async fn approve_record<E>(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    caller: MaybeAuthUser,
    OptionalJson(body): OptionalJson<ApproveRequest>,
) -> ApiResult<impl IntoResponse>
where
    E: ConfigResource,
    E::Model: IntoActiveModel<E::ActiveModel> + Serialize + DeserializeOwned + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
{
    let actor = reviewer(body.unwrap_or_default().approved_by, &caller);
    let record = repo::<E>(&state)
        .approve(id, &actor)
        .await
        .inspect_err(|e| log_failure::<E>(e, "approve", Some(id)))?;

    info!(kind = %E::KIND, %id, %actor, "Configuration record approved");
    Ok(Json(record))
}

/// PATCH `/{kind}/{id}/reject` - Reject a draft.
pub(super) async fn reject_record<E>(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    caller: MaybeAuthUser,
    OptionalJson(body): OptionalJson<RejectRequest>,
) -> ApiResult<impl IntoResponse>
where
    E: ConfigResource,
    E::Model: IntoActiveModel<E::ActiveModel> + Serialize + DeserializeOwned + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
{
    let actor = reviewer(body.unwrap_or_default().rejected_by, &caller);
    let record = repo::<E>(&state)
        .reject(id, &actor)
        .await
        .inspect_err(|e| log_failure::<E>(e, "reject", Some(id)))?;

    info!(kind = %E::KIND, %id, %actor, "Configuration record rejected");
    Ok(Json(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hris_shared::Claims;

    fn caller() -> MaybeAuthUser {
        MaybeAuthUser(Some(Claims {
            sub: Uuid::nil(),
            email: "hr@example.com".to_string(),
            role: "HR Manager".to_string(),
            roles: vec!["HR Manager".to_string()],
            full_name: "HR".to_string(),
            iat: 0,
            exp: 0,
        }))
    }

    #[test]
    fn test_reviewer_prefers_body() {
        assert_eq!(reviewer(Some("alice".to_string()), &caller()), "alice");
    }

    #[test]
    fn test_reviewer_falls_back_to_caller() {
        assert_eq!(
            reviewer(Some("  ".to_string()), &caller()),
            Uuid::nil().to_string()
        );
        assert_eq!(reviewer(None, &caller()), Uuid::nil().to_string());
    }

    #[test]
    fn test_reviewer_defaults_to_system() {
        assert_eq!(reviewer(None, &MaybeAuthUser(None)), "system");
    }
}
