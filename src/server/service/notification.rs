//! Notification business logic.
//!
//! Notifications are persisted per user and pushed over the realtime hub to
//! whichever of the user's connections are open. The database row is the
//! source of truth; the push is best effort.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{notification::NotificationRepository, user::UserRepository},
    error::AppError,
    model::notification::{CreateNotificationParams, Notification, PaginatedNotifications},
    realtime::{hub::RealtimeHub, message::ServerEvent},
};

pub struct NotificationService<'a> {
    pub db: &'a DatabaseConnection,
    pub hub: &'a RealtimeHub,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection, hub: &'a RealtimeHub) -> Self {
        Self { db, hub }
    }

    pub async fn get_notifications(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedNotifications, AppError> {
        let notification_repo = NotificationRepository::new(self.db);

        let (notifications, total) = notification_repo
            .get_for_user_paginated(user_id, page.saturating_sub(1), per_page)
            .await?;
        let total_pages = (total as f64 / per_page as f64).ceil() as u64;

        Ok(PaginatedNotifications {
            notifications,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    pub async fn unread_count(&self, user_id: i32) -> Result<u64, AppError> {
        let notification_repo = NotificationRepository::new(self.db);
        let count = notification_repo.unread_count(user_id).await?;
        Ok(count)
    }

    /// Marks one of the user's notifications as read.
    pub async fn mark_read(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        let notification_repo = NotificationRepository::new(self.db);

        let updated = notification_repo.mark_read(user_id, id).await?;
        if updated == 0 {
            return Err(AppError::NotFound(format!("Notification {} not found", id)));
        }

        Ok(())
    }

    /// Marks all of the user's notifications as read. Returns how many were
    /// still unread.
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, AppError> {
        let notification_repo = NotificationRepository::new(self.db);
        let updated = notification_repo.mark_all_read(user_id).await?;
        Ok(updated)
    }

    /// Persists a notification for one user and pushes it to their open
    /// connections.
    pub async fn notify_user(
        &self,
        params: CreateNotificationParams,
    ) -> Result<Notification, AppError> {
        let notification_repo = NotificationRepository::new(self.db);

        let notification = notification_repo.create(params).await?;
        let user_id = notification.user_id;

        self.hub
            .send_to_user(
                user_id,
                ServerEvent::Notification {
                    notification: notification.clone().into_dto(),
                },
            )
            .await;

        Ok(notification)
    }

    /// Fans a booking event out to every active staff member of a park,
    /// skipping the user who caused the event.
    ///
    /// `include_user` adds one extra recipient outside the park's staff,
    /// typically the booking's creator when that is an admin without a park
    /// scope. Inactive accounts are never notified.
    pub async fn notify_park_staff(
        &self,
        park_id: i32,
        include_user: Option<i32>,
        exclude_user: Option<i32>,
        booking_id: Option<i32>,
        kind: &str,
        title: &str,
        body: &str,
    ) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let staff = user_repo.get_active_by_park(park_id).await?;
        let mut recipients: Vec<i32> = staff.into_iter().map(|user| user.id).collect();

        if let Some(extra) = include_user {
            if !recipients.contains(&extra) {
                if let Some(user) = user_repo.find_by_id(extra).await? {
                    if user.active {
                        recipients.push(extra);
                    }
                }
            }
        }

        for user_id in recipients {
            if Some(user_id) == exclude_user {
                continue;
            }

            self.notify_user(CreateNotificationParams {
                user_id,
                booking_id,
                park_id: Some(park_id),
                kind: kind.to_string(),
                title: title.to_string(),
                body: body.to_string(),
            })
            .await?;
        }

        Ok(())
    }
}
