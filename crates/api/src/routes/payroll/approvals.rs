//! Review queue.

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::Value;

use crate::{AppState, error::ApiResult};
use hris_db::PendingApprovalRepository;

/// GET `/pending-approvals` - Every draft, grouped by collection.
pub(super) async fn pending_approvals(
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    let repo = PendingApprovalRepository::new((*state.db).clone());
    let pending = repo.list().await?;
    Ok(Json(Value::Object(pending)))
}
