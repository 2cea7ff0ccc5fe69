use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SettingDto {
    pub id: i32,
    pub park_id: i32,
    pub key: String,
    pub value: String,
}

/// Body for creating or replacing a setting value under a key.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpsertSettingDto {
    pub value: String,
}
