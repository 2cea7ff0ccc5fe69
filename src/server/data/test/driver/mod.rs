use crate::server::{
    data::driver::DriverRepository,
    model::driver::{CreateDriverParams, DriverFilter},
};
use entity::driver::DriverStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all_paginated;
mod license_exists;
mod set_status;
