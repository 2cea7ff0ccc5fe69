use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::park::{CreateParkParams, Park, UpdateParkParams};

pub struct ParkRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ParkRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateParkParams) -> Result<Park, DbErr> {
        let park = entity::park::ActiveModel {
            name: ActiveValue::Set(params.name),
            address: ActiveValue::Set(params.address),
            city: ActiveValue::Set(params.city),
            phone: ActiveValue::Set(params.phone),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Park::from_entity(park))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Park>, DbErr> {
        let park = entity::prelude::Park::find_by_id(id).one(self.db).await?;
        Ok(park.map(Park::from_entity))
    }

    /// Gets all parks ordered alphabetically by name.
    pub async fn get_all(&self) -> Result<Vec<Park>, DbErr> {
        let parks = entity::prelude::Park::find()
            .order_by_asc(entity::park::Column::Name)
            .all(self.db)
            .await?;

        Ok(parks.into_iter().map(Park::from_entity).collect())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Park::find()
            .filter(entity::park::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Applies a partial update. Returns `None` when no park with the given
    /// id exists.
    pub async fn update(&self, params: UpdateParkParams) -> Result<Option<Park>, DbErr> {
        let Some(park) = entity::prelude::Park::find_by_id(params.id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::park::ActiveModel = park.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(address) = params.address {
            active_model.address = ActiveValue::Set(address);
        }
        if let Some(city) = params.city {
            active_model.city = ActiveValue::Set(city);
        }
        if let Some(phone) = params.phone {
            active_model.phone = ActiveValue::Set(phone);
        }
        if let Some(active) = params.active {
            active_model.active = ActiveValue::Set(active);
        }

        let updated = active_model.update(self.db).await?;
        Ok(Some(Park::from_entity(updated)))
    }

    /// Deletes a park. Returns the number of rows removed.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Park::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected)
    }
}
