use entity::user::UserRole;

use crate::model::user::{CreateUserDto, UpdateUserDto, UserDto, UserRoleDto};

impl From<UserRole> for UserRoleDto {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Admin => Self::Admin,
            UserRole::Manager => Self::Manager,
            UserRole::Dispatcher => Self::Dispatcher,
        }
    }
}

impl From<UserRoleDto> for UserRole {
    fn from(role: UserRoleDto) -> Self {
        match role {
            UserRoleDto::Admin => Self::Admin,
            UserRoleDto::Manager => Self::Manager,
            UserRoleDto::Dispatcher => Self::Dispatcher,
        }
    }
}

/// Dashboard user account without credential material.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub park_id: Option<i32>,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub phone: Option<String>,
    pub active: bool,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            park_id: entity.park_id,
            name: entity.name,
            email: entity.email,
            role: entity.role,
            phone: entity.phone,
            active: entity.active,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            park_id: self.park_id,
            name: self.name,
            email: self.email,
            role: self.role.into(),
            phone: self.phone,
            active: self.active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub park_id: Option<i32>,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub phone: Option<String>,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            park_id: dto.park_id,
            name: dto.name,
            email: dto.email,
            password: dto.password,
            role: dto.role.into(),
            phone: dto.phone,
        }
    }
}

/// Only provided fields are updated. Double options distinguish "leave
/// unchanged" from "set to null".
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub id: i32,
    pub park_id: Option<Option<i32>>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<UserRole>,
    pub phone: Option<Option<String>>,
    pub active: Option<bool>,
}

impl UpdateUserParams {
    pub fn from_dto(id: i32, dto: UpdateUserDto) -> Self {
        Self {
            id,
            park_id: dto.park_id,
            name: dto.name,
            email: dto.email,
            password: dto.password,
            role: dto.role.map(Into::into),
            phone: dto.phone,
            active: dto.active,
        }
    }
}

/// Paginated user listing with page metadata.
#[derive(Debug, Clone)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> crate::model::user::PaginatedUsersDto {
        crate::model::user::PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
