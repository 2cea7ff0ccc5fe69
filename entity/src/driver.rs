use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Duty status of a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum DriverStatus {
    #[sea_orm(string_value = "available")]
    Available,
    #[sea_orm(string_value = "on_trip")]
    OnTrip,
    #[sea_orm(string_value = "off_duty")]
    OffDuty,
    #[sea_orm(string_value = "suspended")]
    Suspended,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "driver")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub park_id: i32,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub license_number: String,
    pub phone: String,
    pub email: Option<String>,
    pub status: DriverStatus,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::park::Entity",
        from = "Column::ParkId",
        to = "super::park::Column::Id"
    )]
    Park,
    #[sea_orm(has_many = "super::vehicle::Entity")]
    Vehicle,
    #[sea_orm(has_many = "super::booking::Entity")]
    Booking,
}

impl Related<super::park::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Park.def()
    }
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicle.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
