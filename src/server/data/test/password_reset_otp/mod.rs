use crate::server::data::password_reset_otp::PasswordResetOtpRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_active_for_user;
mod purge_stale;
