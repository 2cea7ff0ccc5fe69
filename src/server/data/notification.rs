use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::notification::{CreateNotificationParams, Notification};

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateNotificationParams) -> Result<Notification, DbErr> {
        let notification = entity::notification::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            booking_id: ActiveValue::Set(params.booking_id),
            park_id: ActiveValue::Set(params.park_id),
            kind: ActiveValue::Set(params.kind),
            title: ActiveValue::Set(params.title),
            body: ActiveValue::Set(params.body),
            read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(notification))
    }

    /// Gets a user's notifications with pagination, newest first.
    pub async fn get_for_user_paginated(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Notification>, u64), DbErr> {
        let paginator = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let notifications = entities
            .into_iter()
            .map(Notification::from_entity)
            .collect();

        Ok((notifications, total))
    }

    pub async fn unread_count(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::Read.eq(false))
            .count(self.db)
            .await
    }

    /// Marks a single notification as read. Scoped to the owning user so one
    /// user cannot touch another's notifications. Returns the number of rows
    /// updated.
    pub async fn mark_read(&self, user_id: i32, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .filter(entity::notification::Column::Id.eq(id))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .col_expr(
                entity::notification::Column::Read,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Marks all of a user's notifications as read. Returns the number of
    /// rows updated.
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::Read.eq(false))
            .col_expr(
                entity::notification::Column::Read,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
