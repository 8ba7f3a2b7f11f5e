//! Company-wide payroll settings.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde_json::Value;
use tracing::info;

use crate::{
    AppState,
    error::{ApiResult, database},
    extractors::json_rejection,
};
use hris_db::CompanySettingsRepository;

/// GET `/company-settings` - The settings document, `{}` before first write.
pub(super) async fn get_settings(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let repo = CompanySettingsRepository::new((*state.db).clone());
    let settings = repo.get().await.map_err(database)?;
    Ok(Json(Value::Object(settings)))
}

/// PATCH `/company-settings` - Shallow-merge keys into the document.
pub(super) async fn update_settings(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(patch) = payload.map_err(json_rejection)?;
    let repo = CompanySettingsRepository::new((*state.db).clone());
    let settings = repo.update(&patch).await?;

    info!(
        keys = ?patch.as_object().map(|m| m.keys().cloned().collect::<Vec<_>>()),
        "Company settings updated"
    );
    Ok(Json(Value::Object(settings)))
}
