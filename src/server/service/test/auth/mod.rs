use crate::server::{
    data::password_reset_otp::PasswordResetOtpRepository,
    error::AppError,
    service::{auth::AuthService, password},
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod confirm_password_reset;
mod request_password_reset;
