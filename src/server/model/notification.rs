use chrono::{DateTime, Utc};

use crate::model::notification::{NotificationDto, PaginatedNotificationsDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub user_id: i32,
    pub booking_id: Option<i32>,
    pub park_id: Option<i32>,
    pub kind: String,
    pub title: String,
    pub body: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            booking_id: entity.booking_id,
            park_id: entity.park_id,
            kind: entity.kind,
            title: entity.title,
            body: entity.body,
            read: entity.read,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            booking_id: self.booking_id,
            park_id: self.park_id,
            kind: self.kind,
            title: self.title,
            body: self.body,
            read: self.read,
            created_at: self.created_at,
        }
    }
}

/// Parameters for persisting one notification row. Fan-out to several users
/// repeats these with a different `user_id`.
#[derive(Debug, Clone)]
pub struct CreateNotificationParams {
    pub user_id: i32,
    pub booking_id: Option<i32>,
    pub park_id: Option<i32>,
    pub kind: String,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct PaginatedNotifications {
    pub notifications: Vec<Notification>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedNotifications {
    pub fn into_dto(self) -> PaginatedNotificationsDto {
        PaginatedNotificationsDto {
            notifications: self
                .notifications
                .into_iter()
                .map(Notification::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
