use crate::server::{
    data::notification::NotificationRepository,
    model::notification::CreateNotificationParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod mark_read;
mod unread_count;

/// Inserts a notification for the user with throwaway content.
async fn seed_notification(
    db: &sea_orm::DatabaseConnection,
    user_id: i32,
) -> Result<crate::server::model::notification::Notification, DbErr> {
    NotificationRepository::new(db)
        .create(CreateNotificationParams {
            user_id,
            booking_id: None,
            park_id: None,
            kind: "booking.created".to_string(),
            title: "New booking".to_string(),
            body: "A booking was created".to_string(),
        })
        .await
}
