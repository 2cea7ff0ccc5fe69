use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    realtime::hub::RealtimeHub,
    service::notification::NotificationService,
};
use test_utils::{builder::TestBuilder, factory};

mod notify_park_staff;
