use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    ///
    /// The request reached a protected endpoint without a prior login.
    /// Results in a 401 Unauthorized response.
    #[error("No user in session")]
    UserNotInSession,

    /// The session references a user id that no longer exists.
    ///
    /// Usually means the account was deleted while the session was live.
    /// Results in a 401 Unauthorized response.
    #[error("User {0} in session but not in database")]
    UserNotInDatabase(i32),

    /// Email/password combination did not match a stored credential.
    ///
    /// Results in a 401 Unauthorized response with a generic message so the
    /// caller cannot distinguish a wrong password from an unknown email.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The account exists but is deactivated.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Account for user {0} is deactivated")]
    AccountDisabled(i32),

    /// The user lacks the permission required by the endpoint.
    ///
    /// Results in a 403 Forbidden response. The message is logged server-side
    /// for auditing; the client receives a generic denial.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// The supplied password-reset code is wrong, expired, or already used.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Invalid or expired password reset code")]
    InvalidResetCode,
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping
/// client-facing messages generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) | Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid credentials or not logged in".to_string(),
                }),
            )
                .into_response(),
            Self::AccountDisabled(_) | Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Access denied".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidResetCode => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Invalid or expired reset code".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
