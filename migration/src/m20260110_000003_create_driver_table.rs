use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000001_create_park_table::Park;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Driver::Table)
                    .if_not_exists()
                    .col(pk_auto(Driver::Id))
                    .col(integer(Driver::ParkId))
                    .col(string(Driver::FirstName))
                    .col(string(Driver::LastName))
                    .col(string_uniq(Driver::LicenseNumber))
                    .col(string(Driver::Phone))
                    .col(string_null(Driver::Email))
                    .col(string(Driver::Status))
                    .col(
                        timestamp(Driver::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Driver::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_driver_park_id")
                            .from(Driver::Table, Driver::ParkId)
                            .to(Park::Table, Park::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Driver::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Driver {
    Table,
    Id,
    ParkId,
    FirstName,
    LastName,
    LicenseNumber,
    Phone,
    Email,
    Status,
    CreatedAt,
    UpdatedAt,
}
