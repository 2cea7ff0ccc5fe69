//! Customer business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::customer::CustomerRepository,
    error::AppError,
    model::customer::{
        CreateCustomerParams, Customer, PaginatedCustomers, UpdateCustomerParams,
    },
};

pub struct CustomerService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CustomerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a customer. Phone numbers are unique; a customer who calls
    /// again is found by phone, not re-created.
    pub async fn create_customer(
        &self,
        params: CreateCustomerParams,
    ) -> Result<Customer, AppError> {
        let customer_repo = CustomerRepository::new(self.db);

        if customer_repo.phone_exists(&params.phone, None).await? {
            return Err(AppError::Conflict(format!(
                "phone number {} is already registered",
                params.phone
            )));
        }

        let customer = customer_repo.create(params).await?;
        Ok(customer)
    }

    pub async fn get_customer(&self, id: i32) -> Result<Customer, AppError> {
        let customer_repo = CustomerRepository::new(self.db);

        customer_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Customer {} not found", id)))
    }

    pub async fn get_all_customers(
        &self,
        search: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedCustomers, AppError> {
        let customer_repo = CustomerRepository::new(self.db);

        let (customers, total) = customer_repo
            .get_all_paginated(search, page.saturating_sub(1), per_page)
            .await?;
        let total_pages = (total as f64 / per_page as f64).ceil() as u64;

        Ok(PaginatedCustomers {
            customers,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    pub async fn update_customer(
        &self,
        params: UpdateCustomerParams,
    ) -> Result<Customer, AppError> {
        let customer_repo = CustomerRepository::new(self.db);

        if let Some(phone) = params.phone.as_deref() {
            if customer_repo.phone_exists(phone, Some(params.id)).await? {
                return Err(AppError::Conflict(format!(
                    "phone number {} is already registered",
                    phone
                )));
            }
        }

        let id = params.id;
        customer_repo
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Customer {} not found", id)))
    }

    pub async fn delete_customer(&self, id: i32) -> Result<(), AppError> {
        let customer_repo = CustomerRepository::new(self.db);

        let deleted = customer_repo.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound(format!("Customer {} not found", id)));
        }

        Ok(())
    }
}
