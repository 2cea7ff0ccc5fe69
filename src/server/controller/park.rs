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
        park::{CreateParkDto, ParkDto, UpdateParkDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::park::{CreateParkParams, Park, UpdateParkParams},
        service::park::ParkService,
        state::AppState,
    },
};

/// Tag for grouping park endpoints in OpenAPI documentation
pub static PARK_TAG: &str = "park";

/// Create a new park. Admin only.
#[utoipa::path(
    post,
    path = "/api/parks",
    tag = PARK_TAG,
    request_body = CreateParkDto,
    responses(
        (status = 201, description = "Park created", body = ParkDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_park(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateParkDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = ParkService::new(&state.db);
    let park = service.create_park(CreateParkParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(park.into_dto())))
}

/// List all parks.
#[utoipa::path(
    get,
    path = "/api/parks",
    tag = PARK_TAG,
    responses(
        (status = 200, description = "All parks", body = Vec<ParkDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_parks(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ParkService::new(&state.db);
    let parks = service.get_all_parks().await?;
    let dtos: Vec<ParkDto> = parks.into_iter().map(Park::into_dto).collect();

    Ok(Json(dtos))
}

/// Get a single park.
#[utoipa::path(
    get,
    path = "/api/parks/{park_id}",
    tag = PARK_TAG,
    params(
        ("park_id" = i32, Path, description = "Park ID")
    ),
    responses(
        (status = 200, description = "Park", body = ParkDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Park not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_park(
    State(state): State<AppState>,
    session: Session,
    Path(park_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ParkService::new(&state.db);
    let park = service.get_park(park_id).await?;

    Ok(Json(park.into_dto()))
}

/// Update a park. Admins, or the park's manager.
#[utoipa::path(
    put,
    path = "/api/parks/{park_id}",
    tag = PARK_TAG,
    params(
        ("park_id" = i32, Path, description = "Park ID")
    ),
    request_body = UpdateParkDto,
    responses(
        (status = 200, description = "Park updated", body = ParkDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Cannot manage this park", body = ErrorDto),
        (status = 404, description = "Park not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_park(
    State(state): State<AppState>,
    session: Session,
    Path(park_id): Path<i32>,
    Json(payload): Json<UpdateParkDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ParkManage(park_id)])
        .await?;

    let service = ParkService::new(&state.db);
    let park = service
        .update_park(UpdateParkParams::from_dto(park_id, payload))
        .await?;

    Ok(Json(park.into_dto()))
}

/// Delete a park and everything attached to it. Admin only.
#[utoipa::path(
    delete,
    path = "/api/parks/{park_id}",
    tag = PARK_TAG,
    params(
        ("park_id" = i32, Path, description = "Park ID")
    ),
    responses(
        (status = 204, description = "Park deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Park not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_park(
    State(state): State<AppState>,
    session: Session,
    Path(park_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = ParkService::new(&state.db);
    service.delete_park(park_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
