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
        vehicle::{
            AssignVehicleDriverDto, CreateVehicleDto, PaginatedVehiclesDto, UpdateVehicleDto,
            VehicleDto, VehicleStatusDto,
        },
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::vehicle::{CreateVehicleParams, UpdateVehicleParams, VehicleFilter},
        service::vehicle::VehicleService,
        state::AppState,
    },
};

/// Tag for grouping vehicle endpoints in OpenAPI documentation
pub static VEHICLE_TAG: &str = "vehicle";

#[derive(Deserialize)]
pub struct VehicleListParams {
    #[serde(default = "super::default_page")]
    pub page: u64,
    #[serde(default = "super::default_per_page")]
    pub per_page: u64,
    pub park_id: Option<i32>,
    pub status: Option<VehicleStatusDto>,
    pub driver_id: Option<i32>,
}

/// Register a vehicle with a park. Admins, or the park's manager.
#[utoipa::path(
    post,
    path = "/api/vehicles",
    tag = VEHICLE_TAG,
    request_body = CreateVehicleDto,
    responses(
        (status = 201, description = "Vehicle created", body = VehicleDto),
        (status = 400, description = "Invalid vehicle data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Cannot manage this park", body = ErrorDto),
        (status = 409, description = "Plate number already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ParkManage(payload.park_id)])
        .await?;

    let service = VehicleService::new(&state.db);
    let vehicle = service
        .create_vehicle(CreateVehicleParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(vehicle.into_dto())))
}

/// List vehicles. Scoped to a park for non-admins.
#[utoipa::path(
    get,
    path = "/api/vehicles",
    tag = VEHICLE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "1-based page number"),
        ("per_page" = Option<u64>, Query, description = "Items per page"),
        ("park_id" = Option<i32>, Query, description = "Restrict to one park"),
        ("status" = Option<VehicleStatusDto>, Query, description = "Restrict to one status"),
        ("driver_id" = Option<i32>, Query, description = "Restrict to one assigned driver")
    ),
    responses(
        (status = 200, description = "Paginated vehicles", body = PaginatedVehiclesDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "No access to this park", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicles(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<VehicleListParams>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &session);
    match params.park_id {
        Some(park_id) => {
            let _ = guard.require(&[Permission::ParkAccess(park_id)]).await?;
        }
        None => {
            let _ = guard.require(&[Permission::Admin]).await?;
        }
    }

    let (page, per_page) = PaginationParams {
        page: params.page,
        per_page: params.per_page,
    }
    .clamp();

    let filter = VehicleFilter {
        park_id: params.park_id,
        status: params.status.map(Into::into),
        driver_id: params.driver_id,
    };

    let service = VehicleService::new(&state.db);
    let vehicles = service.get_all_vehicles(filter, page, per_page).await?;

    Ok(Json(vehicles.into_dto()))
}

/// Get a single vehicle.
#[utoipa::path(
    get,
    path = "/api/vehicles/{vehicle_id}",
    tag = VEHICLE_TAG,
    params(
        ("vehicle_id" = i32, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 200, description = "Vehicle", body = VehicleDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "No access to this park", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    session: Session,
    Path(vehicle_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = VehicleService::new(&state.db);
    let vehicle = service.get_vehicle(vehicle_id).await?;
    AuthGuard::check(&user, &[Permission::ParkAccess(vehicle.park_id)])?;

    Ok(Json(vehicle.into_dto()))
}

/// Update a vehicle. Admins, or the park's manager.
#[utoipa::path(
    put,
    path = "/api/vehicles/{vehicle_id}",
    tag = VEHICLE_TAG,
    params(
        ("vehicle_id" = i32, Path, description = "Vehicle ID")
    ),
    request_body = UpdateVehicleDto,
    responses(
        (status = 200, description = "Vehicle updated", body = VehicleDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Cannot manage this park", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 409, description = "Plate number already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_vehicle(
    State(state): State<AppState>,
    session: Session,
    Path(vehicle_id): Path<i32>,
    Json(payload): Json<UpdateVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = VehicleService::new(&state.db);
    let vehicle = service.get_vehicle(vehicle_id).await?;
    AuthGuard::check(&user, &[Permission::ParkManage(vehicle.park_id)])?;

    let vehicle = service
        .update_vehicle(UpdateVehicleParams::from_dto(vehicle_id, payload))
        .await?;

    Ok(Json(vehicle.into_dto()))
}

/// Assign a driver to a vehicle, or clear the assignment with a null driver.
#[utoipa::path(
    put,
    path = "/api/vehicles/{vehicle_id}/driver",
    tag = VEHICLE_TAG,
    params(
        ("vehicle_id" = i32, Path, description = "Vehicle ID")
    ),
    request_body = AssignVehicleDriverDto,
    responses(
        (status = 200, description = "Assignment updated", body = VehicleDto),
        (status = 400, description = "Driver invalid for this vehicle", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Cannot manage this park", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 409, description = "Driver already has a vehicle", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_vehicle_driver(
    State(state): State<AppState>,
    session: Session,
    Path(vehicle_id): Path<i32>,
    Json(payload): Json<AssignVehicleDriverDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = VehicleService::new(&state.db);
    let vehicle = service.get_vehicle(vehicle_id).await?;
    AuthGuard::check(&user, &[Permission::ParkManage(vehicle.park_id)])?;

    let vehicle = service
        .assign_driver(vehicle_id, payload.driver_id)
        .await?;

    Ok(Json(vehicle.into_dto()))
}

/// Remove a vehicle. Admins, or the park's manager.
#[utoipa::path(
    delete,
    path = "/api/vehicles/{vehicle_id}",
    tag = VEHICLE_TAG,
    params(
        ("vehicle_id" = i32, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 204, description = "Vehicle deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Cannot manage this park", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    session: Session,
    Path(vehicle_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = VehicleService::new(&state.db);
    let vehicle = service.get_vehicle(vehicle_id).await?;
    AuthGuard::check(&user, &[Permission::ParkManage(vehicle.park_id)])?;

    service.delete_vehicle(vehicle_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
