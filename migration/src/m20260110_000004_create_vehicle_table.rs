use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000001_create_park_table::Park, m20260110_000003_create_driver_table::Driver,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(integer(Vehicle::ParkId))
                    .col(integer_null(Vehicle::DriverId))
                    .col(string_uniq(Vehicle::PlateNumber))
                    .col(string(Vehicle::Make))
                    .col(string(Vehicle::Model))
                    .col(integer(Vehicle::Year))
                    .col(string_null(Vehicle::Color))
                    .col(integer(Vehicle::Capacity))
                    .col(string(Vehicle::Status))
                    .col(
                        timestamp(Vehicle::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Vehicle::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_park_id")
                            .from(Vehicle::Table, Vehicle::ParkId)
                            .to(Park::Table, Park::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_driver_id")
                            .from(Vehicle::Table, Vehicle::DriverId)
                            .to(Driver::Table, Driver::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
    Id,
    ParkId,
    DriverId,
    PlateNumber,
    Make,
    Model,
    Year,
    Color,
    Capacity,
    Status,
    CreatedAt,
    UpdatedAt,
}
