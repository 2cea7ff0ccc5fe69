use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Park::Table)
                    .if_not_exists()
                    .col(pk_auto(Park::Id))
                    .col(string(Park::Name))
                    .col(string(Park::Address))
                    .col(string(Park::City))
                    .col(string_null(Park::Phone))
                    .col(boolean(Park::Active).default(true))
                    .col(
                        timestamp(Park::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Park::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Park {
    Table,
    Id,
    Name,
    Address,
    City,
    Phone,
    Active,
    CreatedAt,
}
