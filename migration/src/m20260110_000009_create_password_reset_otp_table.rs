use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000002_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PasswordResetOtp::Table)
                    .if_not_exists()
                    .col(pk_auto(PasswordResetOtp::Id))
                    .col(integer(PasswordResetOtp::UserId))
                    .col(string(PasswordResetOtp::CodeHash))
                    .col(timestamp(PasswordResetOtp::ExpiresAt))
                    .col(boolean(PasswordResetOtp::Consumed).default(false))
                    .col(
                        timestamp(PasswordResetOtp::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_password_reset_otp_user_id")
                            .from(PasswordResetOtp::Table, PasswordResetOtp::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PasswordResetOtp::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PasswordResetOtp {
    Table,
    Id,
    UserId,
    CodeHash,
    ExpiresAt,
    Consumed,
    CreatedAt,
}
