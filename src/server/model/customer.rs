use crate::model::customer::{
    CreateCustomerDto, CustomerDto, PaginatedCustomersDto, UpdateCustomerDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
}

impl Customer {
    pub fn from_entity(entity: entity::customer::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            phone: entity.phone,
            email: entity.email,
        }
    }

    pub fn into_dto(self) -> CustomerDto {
        CustomerDto {
            id: self.id,
            name: self.name,
            phone: self.phone,
            email: self.email,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCustomerParams {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
}

impl CreateCustomerParams {
    pub fn from_dto(dto: CreateCustomerDto) -> Self {
        Self {
            name: dto.name,
            phone: dto.phone,
            email: dto.email,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCustomerParams {
    pub id: i32,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<Option<String>>,
}

impl UpdateCustomerParams {
    pub fn from_dto(id: i32, dto: UpdateCustomerDto) -> Self {
        Self {
            id,
            name: dto.name,
            phone: dto.phone,
            email: dto.email,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedCustomers {
    pub customers: Vec<Customer>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedCustomers {
    pub fn into_dto(self) -> PaginatedCustomersDto {
        PaginatedCustomersDto {
            customers: self.customers.into_iter().map(Customer::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
