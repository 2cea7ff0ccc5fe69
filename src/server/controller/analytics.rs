use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, analytics::ParkDashboardDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::analytics::AnalyticsService,
        state::AppState,
    },
};

/// Tag for grouping analytics endpoints in OpenAPI documentation
pub static ANALYTICS_TAG: &str = "analytics";

/// Get the dashboard aggregates for one park.
///
/// Includes booking, driver and vehicle status breakdowns, today's booking
/// count and completed-fare revenue, and a bookings-per-day series for the
/// last seven days.
#[utoipa::path(
    get,
    path = "/api/parks/{park_id}/dashboard",
    tag = ANALYTICS_TAG,
    params(
        ("park_id" = i32, Path, description = "Park ID")
    ),
    responses(
        (status = 200, description = "Dashboard aggregates", body = ParkDashboardDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "No access to this park", body = ErrorDto),
        (status = 404, description = "Park not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_park_dashboard(
    State(state): State<AppState>,
    session: Session,
    Path(park_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ParkAccess(park_id)])
        .await?;

    let service = AnalyticsService::new(&state.db);
    let dashboard = service.park_dashboard(park_id).await?;

    Ok(Json(dashboard.into_dto()))
}
