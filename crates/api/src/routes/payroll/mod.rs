//! Payroll configuration routes, mounted under `/payroll-configuration`.
//!
//! # Modules
//!
//! - `requests` - Validated request bodies per kind
//! - `resource` - CRUD and review handlers shared by the eight kinds
//! - `company_settings` - Company settings document
//! - `backups` - Snapshot, list, restore and delete configuration backups
//! - `approvals` - Drafts waiting for review

mod approvals;
mod backups;
mod company_settings;
pub mod requests;
mod resource;

use axum::{
    Router,
    routing::{self, get, patch, post},
};

use crate::{
    AppState,
    middleware::{
        guarded,
        roles::{BACKUP_ADMINS, BACKUP_OPERATORS, INSURANCE_ADMINS, INSURANCE_EDITORS, REVIEWERS},
    },
};
use hris_core::auth::SystemRole;
use hris_db::entities::{
    allowances, benefits, insurance_brackets, pay_grades, pay_types, payroll_policies,
    signing_bonuses, tax_rules,
};
use hris_db::repositories::ConfigEntity;
use resource::{
    approve_record, create_record, delete_record, get_record, list_records, reject_record,
    update_record,
};

pub use resource::ConfigResource;

const OPEN: &[SystemRole] = &[];

/// Mounts the CRUD and review routes of one kind.
///
/// `edit` guards `PATCH /{kind}/{id}` and `remove` guards the delete; an empty
/// list leaves the route open.
macro_rules! config_routes {
    ($router:expr, $entity:ty, edit: $edit:expr, remove: $remove:expr) => {{
        let segment = <$entity as ConfigEntity>::KIND.segment();
        $router
            .route(
                &format!("/{segment}"),
                post(create_record::<$entity>).get(list_records::<$entity>),
            )
            .route(
                &format!("/{segment}/{{id}}"),
                get(get_record::<$entity>)
                    .merge(guarded(patch(update_record::<$entity>), $edit))
                    .merge(guarded(routing::delete(delete_record::<$entity>), $remove)),
            )
            .route(
                &format!("/{segment}/{{id}}/approve"),
                guarded(patch(approve_record::<$entity>), REVIEWERS),
            )
            .route(
                &format!("/{segment}/{{id}}/reject"),
                guarded(patch(reject_record::<$entity>), REVIEWERS),
            )
    }};
}

/// Creates the payroll configuration routes.
pub fn routes() -> Router<AppState> {
    let router = Router::new();
    let router = config_routes!(router, pay_types::Entity, edit: OPEN, remove: OPEN);
    let router = config_routes!(router, pay_grades::Entity, edit: OPEN, remove: OPEN);
    let router = config_routes!(router, allowances::Entity, edit: OPEN, remove: OPEN);
    let router = config_routes!(
        router,
        insurance_brackets::Entity,
        edit: INSURANCE_EDITORS,
        remove: INSURANCE_ADMINS
    );
    let router = config_routes!(router, tax_rules::Entity, edit: OPEN, remove: OPEN);
    let router = config_routes!(router, benefits::Entity, edit: OPEN, remove: OPEN);
    let router = config_routes!(router, signing_bonuses::Entity, edit: OPEN, remove: OPEN);
    let router = config_routes!(router, payroll_policies::Entity, edit: OPEN, remove: OPEN);

    router
        .route(
            "/company-settings",
            get(company_settings::get_settings).patch(company_settings::update_settings),
        )
        .route(
            "/pending-approvals",
            guarded(get(approvals::pending_approvals), REVIEWERS),
        )
        .route(
            "/backups",
            guarded(get(backups::list_backups), BACKUP_OPERATORS),
        )
        .route(
            "/backups/run",
            guarded(post(backups::run_backup), BACKUP_OPERATORS),
        )
        .route(
            "/backups/{id}",
            guarded(get(backups::get_backup), BACKUP_OPERATORS)
                .merge(guarded(routing::delete(backups::delete_backup), BACKUP_ADMINS)),
        )
        .route(
            "/backups/{id}/restore",
            guarded(post(backups::restore_backup), BACKUP_ADMINS),
        )
}
