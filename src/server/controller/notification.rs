use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        notification::{PaginatedNotificationsDto, UnreadCountDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::AuthGuard,
        service::notification::NotificationService,
        state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

#[derive(Deserialize)]
pub struct NotificationListParams {
    #[serde(default = "super::default_page")]
    pub page: u64,
    #[serde(default = "super::default_per_page")]
    pub per_page: u64,
}

/// List the caller's notifications, newest first.
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    params(
        ("page" = Option<u64>, Query, description = "1-based page number"),
        ("per_page" = Option<u64>, Query, description = "Items per page")
    ),
    responses(
        (status = 200, description = "Paginated notifications", body = PaginatedNotificationsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<NotificationListParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let (page, per_page) = PaginationParams {
        page: params.page,
        per_page: params.per_page,
    }
    .clamp();

    let service = NotificationService::new(&state.db, &state.hub);
    let notifications = service.get_notifications(user.id, page, per_page).await?;

    Ok(Json(notifications.into_dto()))
}

/// Count the caller's unread notifications.
#[utoipa::path(
    get,
    path = "/api/notifications/unread",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Unread count", body = UnreadCountDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_unread_count(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = NotificationService::new(&state.db, &state.hub);
    let unread = service.unread_count(user.id).await?;

    Ok(Json(UnreadCountDto { unread }))
}

/// Mark one of the caller's notifications as read.
#[utoipa::path(
    post,
    path = "/api/notifications/{notification_id}/read",
    tag = NOTIFICATION_TAG,
    params(
        ("notification_id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Marked read", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    session: Session,
    Path(notification_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = NotificationService::new(&state.db, &state.hub);
    service.mark_read(user.id, notification_id).await?;

    Ok(Json(MessageDto {
        message: "Notification marked as read".to_string(),
    }))
}

/// Mark all of the caller's notifications as read.
#[utoipa::path(
    post,
    path = "/api/notifications/read-all",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "All marked read", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_all_notifications_read(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = NotificationService::new(&state.db, &state.hub);
    let updated = service.mark_all_read(user.id).await?;

    Ok(Json(MessageDto {
        message: format!("{} notification(s) marked as read", updated),
    }))
}
