//! Configuration backup and restore.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::{
    AppState,
    error::{ApiResult, database},
    extractors::OptionalJson,
    middleware::AuthUser,
};
use hris_db::BackupRepository;

/// Optional body of `POST /backups/run`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunBackupRequest {
    /// Who asked for the backup; defaults to the caller's email.
    pub triggered_by: Option<String>,
}

/// Optional body of `POST /backups/{id}/restore`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreBackupRequest {
    /// Who asked for the restore; defaults to the caller's email.
    pub restored_by: Option<String>,
}

fn actor(explicit: Option<String>, auth: &AuthUser) -> String {
    explicit
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| auth.email().to_string())
}

/// POST `/backups/run` - Snapshot the current configuration.
pub(super) async fn run_backup(
    State(state): State<AppState>,
    auth: AuthUser,
    OptionalJson(body): OptionalJson<RunBackupRequest>,
) -> ApiResult<impl IntoResponse> {
    let triggered_by = actor(body.unwrap_or_default().triggered_by, &auth);
    let repo = BackupRepository::new((*state.db).clone());

    let backup = repo.run(Some(triggered_by)).await.inspect_err(|e| {
        error!(error = %e, "Failed to run configuration backup");
    })?;

    Ok((StatusCode::CREATED, Json(backup)))
}

/// GET `/backups` - Backup summaries, newest first.
pub(super) async fn list_backups(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let repo = BackupRepository::new((*state.db).clone());
    let backups = repo.list().await.map_err(database)?;
    Ok(Json(backups))
}

/// GET `/backups/{id}` - One backup including its snapshot.
pub(super) async fn get_backup(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let repo = BackupRepository::new((*state.db).clone());
    let backup = repo.get(id).await?;
    Ok(Json(backup))
}

/// POST `/backups/{id}/restore` - Replace current configuration with a snapshot.
pub(super) async fn restore_backup(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    auth: AuthUser,
    OptionalJson(body): OptionalJson<RestoreBackupRequest>,
) -> ApiResult<impl IntoResponse> {
    let restored_by = actor(body.unwrap_or_default().restored_by, &auth);
    let repo = BackupRepository::new((*state.db).clone());

    let outcome = repo.restore(id, &restored_by).await.inspect_err(|e| {
        error!(backup_id = %id, error = %e, "Failed to restore configuration backup");
    })?;

    Ok(Json(outcome))
}

/// DELETE `/backups/{id}` - Remove a backup.
pub(super) async fn delete_backup(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    auth: AuthUser,
) -> ApiResult<StatusCode> {
    let repo = BackupRepository::new((*state.db).clone());
    repo.delete(id).await?;

    info!(backup_id = %id, actor = %auth.email(), "Configuration backup deleted");
    Ok(StatusCode::NO_CONTENT)
}
