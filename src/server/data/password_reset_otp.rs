use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct PasswordResetOtpRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PasswordResetOtpRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new reset code hash for a user.
    pub async fn create(
        &self,
        user_id: i32,
        code_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<entity::password_reset_otp::Model, DbErr> {
        entity::password_reset_otp::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            code_hash: ActiveValue::Set(code_hash),
            expires_at: ActiveValue::Set(expires_at),
            consumed: ActiveValue::Set(false),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Marks all of a user's outstanding codes as consumed so only the most
    /// recently issued code can succeed. Returns the number of rows updated.
    pub async fn invalidate_for_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::PasswordResetOtp::update_many()
            .filter(entity::password_reset_otp::Column::UserId.eq(user_id))
            .filter(entity::password_reset_otp::Column::Consumed.eq(false))
            .col_expr(
                entity::password_reset_otp::Column::Consumed,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets a user's usable codes (unconsumed and unexpired), newest first.
    pub async fn find_active_for_user(
        &self,
        user_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Vec<entity::password_reset_otp::Model>, DbErr> {
        entity::prelude::PasswordResetOtp::find()
            .filter(entity::password_reset_otp::Column::UserId.eq(user_id))
            .filter(entity::password_reset_otp::Column::Consumed.eq(false))
            .filter(entity::password_reset_otp::Column::ExpiresAt.gt(now))
            .order_by_desc(entity::password_reset_otp::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Marks a single code as consumed.
    pub async fn consume(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::PasswordResetOtp::update_many()
            .filter(entity::password_reset_otp::Column::Id.eq(id))
            .col_expr(
                entity::password_reset_otp::Column::Consumed,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes expired and consumed codes. Returns the number of rows
    /// removed. Run periodically by the scheduler.
    pub async fn purge_stale(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::PasswordResetOtp::delete_many()
            .filter(
                Condition::any()
                    .add(entity::password_reset_otp::Column::ExpiresAt.lte(now))
                    .add(entity::password_reset_otp::Column::Consumed.eq(true)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
