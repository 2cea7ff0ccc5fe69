use axum::{extract::State, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{LoginDto, PasswordResetConfirmDto, PasswordResetRequestDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::User,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Session key holding the id of the authenticated user.
pub static SESSION_AUTH_USER_ID: &str = "AUTH_USER_ID";

/// Log in with email and password.
///
/// Verifies the credentials and stores the user id in the session cookie.
/// The session id is cycled on success so a pre-login cookie cannot be
/// replayed.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 403, description = "Account is deactivated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db);
    let user = service.login(&payload.email, &payload.password).await?;

    session.cycle_id().await?;
    session.insert(SESSION_AUTH_USER_ID, user.id).await?;

    tracing::info!("User {} logged in", user.id);

    Ok(Json(User::from_entity(user).into_dto()))
}

/// Log out and destroy the session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    session.flush().await?;

    Ok(Json(MessageDto {
        message: "Logged out".to_string(),
    }))
}

/// Get the currently authenticated user.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Authenticated user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok(Json(User::from_entity(user).into_dto()))
}

/// Request a password reset code.
///
/// Always responds with the same acknowledgement whether or not the email
/// belongs to an account, so the endpoint cannot be used to probe for
/// registered addresses.
#[utoipa::path(
    post,
    path = "/api/auth/password-reset/request",
    tag = AUTH_TAG,
    request_body = PasswordResetRequestDto,
    responses(
        (status = 200, description = "Acknowledged", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request_password_reset(
    State(state): State<AppState>,
    Json(payload): Json<PasswordResetRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db);
    service.request_password_reset(&payload.email).await?;

    Ok(Json(MessageDto {
        message: "If the email belongs to an account, a reset code has been issued".to_string(),
    }))
}

/// Redeem a password reset code and set a new password.
#[utoipa::path(
    post,
    path = "/api/auth/password-reset/confirm",
    tag = AUTH_TAG,
    request_body = PasswordResetConfirmDto,
    responses(
        (status = 200, description = "Password replaced", body = MessageDto),
        (status = 400, description = "Invalid or expired reset code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_password_reset(
    State(state): State<AppState>,
    Json(payload): Json<PasswordResetConfirmDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db);
    service
        .confirm_password_reset(&payload.email, &payload.code, &payload.new_password)
        .await?;

    Ok(Json(MessageDto {
        message: "Password has been reset".to_string(),
    }))
}
