use crate::server::data::customer::CustomerRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all_paginated;
