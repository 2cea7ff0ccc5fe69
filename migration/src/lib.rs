pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_park_table;
mod m20260110_000002_create_user_table;
mod m20260110_000003_create_driver_table;
mod m20260110_000004_create_vehicle_table;
mod m20260110_000005_create_customer_table;
mod m20260110_000006_create_booking_table;
mod m20260110_000007_create_setting_table;
mod m20260110_000008_create_notification_table;
mod m20260110_000009_create_password_reset_otp_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_park_table::Migration),
            Box::new(m20260110_000002_create_user_table::Migration),
            Box::new(m20260110_000003_create_driver_table::Migration),
            Box::new(m20260110_000004_create_vehicle_table::Migration),
            Box::new(m20260110_000005_create_customer_table::Migration),
            Box::new(m20260110_000006_create_booking_table::Migration),
            Box::new(m20260110_000007_create_setting_table::Migration),
            Box::new(m20260110_000008_create_notification_table::Migration),
            Box::new(m20260110_000009_create_password_reset_otp_table::Migration),
        ]
    }
}
