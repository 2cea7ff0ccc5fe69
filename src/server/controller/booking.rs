use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        booking::{
            AssignBookingDto, BookingDetailDto, BookingDto, BookingStatusDto, CreateBookingDto,
            PaginatedBookingsDto, UpdateBookingDto, UpdateBookingStatusDto,
        },
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::booking::{
            AssignBookingParams, BookingFilter, CreateBookingParams, UpdateBookingParams,
            UpdateBookingStatusParams,
        },
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

#[derive(Deserialize)]
pub struct BookingListParams {
    #[serde(default = "super::default_page")]
    pub page: u64,
    #[serde(default = "super::default_per_page")]
    pub per_page: u64,
    pub park_id: Option<i32>,
    pub status: Option<BookingStatusDto>,
    pub driver_id: Option<i32>,
    pub customer_id: Option<i32>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

/// Create a booking. Any staff member of the park can dispatch.
///
/// The booking number is generated under today's date prefix. Attaching a
/// driver immediately moves the booking to the assigned status.
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created", body = BookingDto),
        (status = 400, description = "Invalid booking data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "No access to this park", body = ErrorDto),
        (status = 409, description = "Driver or vehicle unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ParkAccess(payload.park_id)])
        .await?;

    let service = BookingService::new(&state.db, &state.hub);
    let booking = service
        .create_booking(CreateBookingParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

/// List bookings. Scoped to a park for non-admins.
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    params(
        ("page" = Option<u64>, Query, description = "1-based page number"),
        ("per_page" = Option<u64>, Query, description = "Items per page"),
        ("park_id" = Option<i32>, Query, description = "Restrict to one park"),
        ("status" = Option<BookingStatusDto>, Query, description = "Restrict to one status"),
        ("driver_id" = Option<i32>, Query, description = "Restrict to one driver"),
        ("customer_id" = Option<i32>, Query, description = "Restrict to one customer"),
        ("from" = Option<String>, Query, description = "Earliest pickup time (RFC 3339)"),
        ("to" = Option<String>, Query, description = "Latest pickup time, exclusive (RFC 3339)")
    ),
    responses(
        (status = 200, description = "Paginated bookings", body = PaginatedBookingsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "No access to this park", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<BookingListParams>,
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

    let filter = BookingFilter {
        park_id: params.park_id,
        status: params.status.map(Into::into),
        driver_id: params.driver_id,
        customer_id: params.customer_id,
        from: params.from,
        to: params.to,
    };

    let service = BookingService::new(&state.db, &state.hub);
    let bookings = service.get_all_bookings(filter, page, per_page).await?;

    Ok(Json(bookings.into_dto()))
}

/// Get a booking with its customer, driver and vehicle resolved.
#[utoipa::path(
    get,
    path = "/api/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking detail", body = BookingDetailDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "No access to this park", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    session: Session,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = BookingService::new(&state.db, &state.hub);
    let detail = service.get_booking(booking_id).await?;
    AuthGuard::check(&user, &[Permission::ParkAccess(detail.booking.park_id)])?;

    Ok(Json(detail.into_dto()))
}

/// Update trip details of a booking that has not reached a terminal state.
#[utoipa::path(
    put,
    path = "/api/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    request_body = UpdateBookingDto,
    responses(
        (status = 200, description = "Booking updated", body = BookingDto),
        (status = 400, description = "Booking can no longer be edited", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "No access to this park", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking(
    State(state): State<AppState>,
    session: Session,
    Path(booking_id): Path<i32>,
    Json(payload): Json<UpdateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = BookingService::new(&state.db, &state.hub);
    let detail = service.get_booking(booking_id).await?;
    AuthGuard::check(&user, &[Permission::ParkAccess(detail.booking.park_id)])?;

    let booking = service
        .update_booking(UpdateBookingParams::from_dto(booking_id, payload))
        .await?;

    Ok(Json(booking.into_dto()))
}

/// Assign or reassign a driver (and optional vehicle) to a booking.
#[utoipa::path(
    put,
    path = "/api/bookings/{booking_id}/assignment",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    request_body = AssignBookingDto,
    responses(
        (status = 200, description = "Booking assigned", body = BookingDto),
        (status = 400, description = "Booking or driver not assignable", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "No access to this park", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Driver or vehicle unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_booking(
    State(state): State<AppState>,
    session: Session,
    Path(booking_id): Path<i32>,
    Json(payload): Json<AssignBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = BookingService::new(&state.db, &state.hub);
    let detail = service.get_booking(booking_id).await?;
    AuthGuard::check(&user, &[Permission::ParkAccess(detail.booking.park_id)])?;

    let booking = service
        .assign_booking(AssignBookingParams::from_dto(booking_id, payload))
        .await?;

    Ok(Json(booking.into_dto()))
}

/// Move a booking through its status machine.
///
/// Legal transitions are assigned to in_progress, in_progress to completed
/// (with an optional final fare), and any non-terminal state to cancelled.
#[utoipa::path(
    put,
    path = "/api/bookings/{booking_id}/status",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    request_body = UpdateBookingStatusDto,
    responses(
        (status = 200, description = "Status updated", body = BookingDto),
        (status = 400, description = "Illegal status transition", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "No access to this park", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking_status(
    State(state): State<AppState>,
    session: Session,
    Path(booking_id): Path<i32>,
    Json(payload): Json<UpdateBookingStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = BookingService::new(&state.db, &state.hub);
    let detail = service.get_booking(booking_id).await?;
    AuthGuard::check(&user, &[Permission::ParkAccess(detail.booking.park_id)])?;

    let booking = service
        .update_booking_status(UpdateBookingStatusParams::from_dto(booking_id, payload))
        .await?;

    Ok(Json(booking.into_dto()))
}

/// Remove a booking. Admins, or the park's manager.
///
/// Deleting an open booking releases its driver back to available unless
/// they hold other open bookings.
#[utoipa::path(
    delete,
    path = "/api/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 204, description = "Booking deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Cannot manage this park", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    session: Session,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = BookingService::new(&state.db, &state.hub);
    let detail = service.get_booking(booking_id).await?;
    AuthGuard::check(&user, &[Permission::ParkManage(detail.booking.park_id)])?;

    service.delete_booking(booking_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
