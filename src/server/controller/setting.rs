use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        setting::{SettingDto, UpsertSettingDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::setting::Setting,
        service::setting::SettingService,
        state::AppState,
    },
};

/// Tag for grouping setting endpoints in OpenAPI documentation
pub static SETTING_TAG: &str = "setting";

/// List all settings of a park.
#[utoipa::path(
    get,
    path = "/api/parks/{park_id}/settings",
    tag = SETTING_TAG,
    params(
        ("park_id" = i32, Path, description = "Park ID")
    ),
    responses(
        (status = 200, description = "Settings of the park", body = Vec<SettingDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "No access to this park", body = ErrorDto),
        (status = 404, description = "Park not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_settings(
    State(state): State<AppState>,
    session: Session,
    Path(park_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ParkAccess(park_id)])
        .await?;

    let service = SettingService::new(&state.db);
    let settings = service.get_settings(park_id).await?;
    let dtos: Vec<SettingDto> = settings.into_iter().map(Setting::into_dto).collect();

    Ok(Json(dtos))
}

/// Get a single setting by key.
#[utoipa::path(
    get,
    path = "/api/parks/{park_id}/settings/{key}",
    tag = SETTING_TAG,
    params(
        ("park_id" = i32, Path, description = "Park ID"),
        ("key" = String, Path, description = "Setting key")
    ),
    responses(
        (status = 200, description = "Setting", body = SettingDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "No access to this park", body = ErrorDto),
        (status = 404, description = "Park or setting not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_setting(
    State(state): State<AppState>,
    session: Session,
    Path((park_id, key)): Path<(i32, String)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ParkAccess(park_id)])
        .await?;

    let service = SettingService::new(&state.db);
    let setting = service.get_setting(park_id, &key).await?;

    Ok(Json(setting.into_dto()))
}

/// Create or replace a setting value. Admins, or the park's manager.
#[utoipa::path(
    put,
    path = "/api/parks/{park_id}/settings/{key}",
    tag = SETTING_TAG,
    params(
        ("park_id" = i32, Path, description = "Park ID"),
        ("key" = String, Path, description = "Setting key")
    ),
    request_body = UpsertSettingDto,
    responses(
        (status = 200, description = "Setting stored", body = SettingDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Cannot manage this park", body = ErrorDto),
        (status = 404, description = "Park not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_setting(
    State(state): State<AppState>,
    session: Session,
    Path((park_id, key)): Path<(i32, String)>,
    Json(payload): Json<UpsertSettingDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ParkManage(park_id)])
        .await?;

    let service = SettingService::new(&state.db);
    let setting = service.upsert_setting(park_id, &key, payload.value).await?;

    Ok(Json(setting.into_dto()))
}

/// Delete a setting. Admins, or the park's manager.
#[utoipa::path(
    delete,
    path = "/api/parks/{park_id}/settings/{key}",
    tag = SETTING_TAG,
    params(
        ("park_id" = i32, Path, description = "Park ID"),
        ("key" = String, Path, description = "Setting key")
    ),
    responses(
        (status = 204, description = "Setting deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Cannot manage this park", body = ErrorDto),
        (status = 404, description = "Park or setting not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_setting(
    State(state): State<AppState>,
    session: Session,
    Path((park_id, key)): Path<(i32, String)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ParkManage(park_id)])
        .await?;

    let service = SettingService::new(&state.db);
    service.delete_setting(park_id, &key).await?;

    Ok(StatusCode::NO_CONTENT)
}
