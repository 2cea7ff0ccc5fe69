use crate::model::setting::SettingDto;

/// Per-park configuration entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Setting {
    pub id: i32,
    pub park_id: i32,
    pub key: String,
    pub value: String,
}

impl Setting {
    pub fn from_entity(entity: entity::setting::Model) -> Self {
        Self {
            id: entity.id,
            park_id: entity.park_id,
            key: entity.key,
            value: entity.value,
        }
    }

    pub fn into_dto(self) -> SettingDto {
        SettingDto {
            id: self.id,
            park_id: self.park_id,
            key: self.key,
            value: self.value,
        }
    }
}
