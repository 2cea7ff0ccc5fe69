use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        driver::{CreateDriverDto, DriverDto, DriverStatusDto, PaginatedDriversDto, UpdateDriverDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::driver::{CreateDriverParams, DriverFilter, UpdateDriverParams},
        service::driver::DriverService,
        state::AppState,
    },
};

/// Tag for grouping driver endpoints in OpenAPI documentation
pub static DRIVER_TAG: &str = "driver";

#[derive(Deserialize)]
pub struct DriverListParams {
    #[serde(default = "super::default_page")]
    pub page: u64,
    #[serde(default = "super::default_per_page")]
    pub per_page: u64,
    pub park_id: Option<i32>,
    pub status: Option<DriverStatusDto>,
}

/// Register a driver with a park. Admins, or the park's manager.
#[utoipa::path(
    post,
    path = "/api/drivers",
    tag = DRIVER_TAG,
    request_body = CreateDriverDto,
    responses(
        (status = 201, description = "Driver created", body = DriverDto),
        (status = 400, description = "Invalid driver data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Cannot manage this park", body = ErrorDto),
        (status = 409, description = "License number already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_driver(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateDriverDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ParkManage(payload.park_id)])
        .await?;

    let service = DriverService::new(&state.db);
    let driver = service
        .create_driver(CreateDriverParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(driver.into_dto())))
}

/// List drivers. Scoped to a park for non-admins.
#[utoipa::path(
    get,
    path = "/api/drivers",
    tag = DRIVER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "1-based page number"),
        ("per_page" = Option<u64>, Query, description = "Items per page"),
        ("park_id" = Option<i32>, Query, description = "Restrict to one park"),
        ("status" = Option<DriverStatusDto>, Query, description = "Restrict to one duty status")
    ),
    responses(
        (status = 200, description = "Paginated drivers", body = PaginatedDriversDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "No access to this park", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_drivers(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<DriverListParams>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &session);
    match params.park_id {
        Some(park_id) => {
            let _ = guard.require(&[Permission::ParkAccess(park_id)]).await?;
        }
        // Listing across all parks is an admin view.
        None => {
            let _ = guard.require(&[Permission::Admin]).await?;
        }
    }

    let (page, per_page) = PaginationParams {
        page: params.page,
        per_page: params.per_page,
    }
    .clamp();

    let filter = DriverFilter {
        park_id: params.park_id,
        status: params.status.map(Into::into),
    };

    let service = DriverService::new(&state.db);
    let drivers = service.get_all_drivers(filter, page, per_page).await?;

    Ok(Json(drivers.into_dto()))
}

/// Get a single driver.
#[utoipa::path(
    get,
    path = "/api/drivers/{driver_id}",
    tag = DRIVER_TAG,
    params(
        ("driver_id" = i32, Path, description = "Driver ID")
    ),
    responses(
        (status = 200, description = "Driver", body = DriverDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "No access to this park", body = ErrorDto),
        (status = 404, description = "Driver not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_driver(
    State(state): State<AppState>,
    session: Session,
    Path(driver_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = DriverService::new(&state.db);
    let driver = service.get_driver(driver_id).await?;
    AuthGuard::check(&user, &[Permission::ParkAccess(driver.park_id)])?;

    Ok(Json(driver.into_dto()))
}

/// Update a driver. Admins, or the park's manager.
#[utoipa::path(
    put,
    path = "/api/drivers/{driver_id}",
    tag = DRIVER_TAG,
    params(
        ("driver_id" = i32, Path, description = "Driver ID")
    ),
    request_body = UpdateDriverDto,
    responses(
        (status = 200, description = "Driver updated", body = DriverDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Cannot manage this park", body = ErrorDto),
        (status = 404, description = "Driver not found", body = ErrorDto),
        (status = 409, description = "License number already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_driver(
    State(state): State<AppState>,
    session: Session,
    Path(driver_id): Path<i32>,
    Json(payload): Json<UpdateDriverDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = DriverService::new(&state.db);
    let driver = service.get_driver(driver_id).await?;
    AuthGuard::check(&user, &[Permission::ParkManage(driver.park_id)])?;

    let driver = service
        .update_driver(UpdateDriverParams::from_dto(driver_id, payload))
        .await?;

    Ok(Json(driver.into_dto()))
}

/// Remove a driver. Admins, or the park's manager. Refused while the driver
/// still has open bookings.
#[utoipa::path(
    delete,
    path = "/api/drivers/{driver_id}",
    tag = DRIVER_TAG,
    params(
        ("driver_id" = i32, Path, description = "Driver ID")
    ),
    responses(
        (status = 204, description = "Driver deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Cannot manage this park", body = ErrorDto),
        (status = 404, description = "Driver not found", body = ErrorDto),
        (status = 409, description = "Driver still has open bookings", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_driver(
    State(state): State<AppState>,
    session: Session,
    Path(driver_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = DriverService::new(&state.db);
    let driver = service.get_driver(driver_id).await?;
    AuthGuard::check(&user, &[Permission::ParkManage(driver.park_id)])?;

    service.delete_driver(driver_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
