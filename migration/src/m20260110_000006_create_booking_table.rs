use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000001_create_park_table::Park, m20260110_000002_create_user_table::User,
    m20260110_000003_create_driver_table::Driver, m20260110_000004_create_vehicle_table::Vehicle,
    m20260110_000005_create_customer_table::Customer,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(string_uniq(Booking::BookingNumber))
                    .col(integer(Booking::ParkId))
                    .col(integer(Booking::CustomerId))
                    .col(integer_null(Booking::DriverId))
                    .col(integer_null(Booking::VehicleId))
                    .col(integer(Booking::CreatedBy))
                    .col(string(Booking::PickupAddress))
                    .col(string(Booking::DropoffAddress))
                    .col(timestamp(Booking::PickupTime))
                    .col(string(Booking::Status))
                    .col(double_null(Booking::Fare))
                    .col(text_null(Booking::Notes))
                    .col(
                        timestamp(Booking::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Booking::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_park_id")
                            .from(Booking::Table, Booking::ParkId)
                            .to(Park::Table, Park::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_customer_id")
                            .from(Booking::Table, Booking::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_driver_id")
                            .from(Booking::Table, Booking::DriverId)
                            .to(Driver::Table, Driver::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_vehicle_id")
                            .from(Booking::Table, Booking::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_created_by")
                            .from(Booking::Table, Booking::CreatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_park_pickup_time")
                    .table(Booking::Table)
                    .col(Booking::ParkId)
                    .col(Booking::PickupTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    BookingNumber,
    ParkId,
    CustomerId,
    DriverId,
    VehicleId,
    CreatedBy,
    PickupAddress,
    DropoffAddress,
    PickupTime,
    Status,
    Fare,
    Notes,
    CreatedAt,
    UpdatedAt,
}
