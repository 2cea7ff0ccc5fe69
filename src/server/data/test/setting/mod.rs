use crate::server::data::setting::SettingRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod upsert;
