use crate::model::park::{CreateParkDto, ParkDto, UpdateParkDto};

/// Taxi depot with its contact details.
#[derive(Debug, Clone, PartialEq)]
pub struct Park {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone: Option<String>,
    pub active: bool,
}

impl Park {
    pub fn from_entity(entity: entity::park::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
            city: entity.city,
            phone: entity.phone,
            active: entity.active,
        }
    }

    pub fn into_dto(self) -> ParkDto {
        ParkDto {
            id: self.id,
            name: self.name,
            address: self.address,
            city: self.city,
            phone: self.phone,
            active: self.active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateParkParams {
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone: Option<String>,
}

impl CreateParkParams {
    pub fn from_dto(dto: CreateParkDto) -> Self {
        Self {
            name: dto.name,
            address: dto.address,
            city: dto.city,
            phone: dto.phone,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateParkParams {
    pub id: i32,
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<Option<String>>,
    pub active: Option<bool>,
}

impl UpdateParkParams {
    pub fn from_dto(id: i32, dto: UpdateParkDto) -> Self {
        Self {
            id,
            name: dto.name,
            address: dto.address,
            city: dto.city,
            phone: dto.phone,
            active: dto.active,
        }
    }
}
