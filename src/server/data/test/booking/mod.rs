use crate::server::{
    data::booking::BookingRepository,
    model::booking::{BookingFilter, CreateBookingParams},
};
use chrono::{Duration, Utc};
use entity::booking::BookingStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_open_for_driver;
mod create;
mod delete;
mod get_all_paginated;
mod last_number_with_prefix;
mod set_status;
mod sum_completed_fares;
