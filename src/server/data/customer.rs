use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::customer::{CreateCustomerParams, Customer, UpdateCustomerParams};

pub struct CustomerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCustomerParams) -> Result<Customer, DbErr> {
        let customer = entity::customer::ActiveModel {
            name: ActiveValue::Set(params.name),
            phone: ActiveValue::Set(params.phone),
            email: ActiveValue::Set(params.email),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Customer::from_entity(customer))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Customer>, DbErr> {
        let customer = entity::prelude::Customer::find_by_id(id).one(self.db).await?;
        Ok(customer.map(Customer::from_entity))
    }

    /// Checks whether a phone number is already registered, optionally
    /// ignoring one customer (for updates that keep the existing number).
    pub async fn phone_exists(&self, phone: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Customer::find().filter(entity::customer::Column::Phone.eq(phone));

        if let Some(id) = exclude_id {
            query = query.filter(entity::customer::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets customers with pagination, ordered alphabetically by name. When
    /// `search` is given, matches it against name and phone.
    pub async fn get_all_paginated(
        &self,
        search: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Customer>, u64), DbErr> {
        let mut query = entity::prelude::Customer::find();

        if let Some(term) = search {
            let pattern = format!("%{}%", term);
            query = query.filter(
                Condition::any()
                    .add(entity::customer::Column::Name.like(&pattern))
                    .add(entity::customer::Column::Phone.like(&pattern)),
            );
        }

        let paginator = query
            .order_by_asc(entity::customer::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let customers = entities.into_iter().map(Customer::from_entity).collect();

        Ok((customers, total))
    }

    /// Applies a partial update. Returns `None` when no customer with the
    /// given id exists.
    pub async fn update(&self, params: UpdateCustomerParams) -> Result<Option<Customer>, DbErr> {
        let Some(customer) = entity::prelude::Customer::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::customer::ActiveModel = customer.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(phone) = params.phone {
            active_model.phone = ActiveValue::Set(phone);
        }
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
        }

        let updated = active_model.update(self.db).await?;
        Ok(Some(Customer::from_entity(updated)))
    }

    /// Deletes a customer. Returns the number of rows removed.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Customer::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
