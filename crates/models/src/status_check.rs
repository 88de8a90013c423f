use sea_orm::{entity::prelude::*, DatabaseConnection, QuerySelect};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "status_check")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub client_name: String,
    pub timestamp: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn insert(db: &DatabaseConnection, row: ActiveModel) -> Result<Uuid, ModelError> {
    let res = Entity::insert(row).exec(db).await?;
    Ok(res.last_insert_id)
}

/// Unordered, at most `limit` rows.
pub async fn list(db: &DatabaseConnection, limit: u64) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().limit(limit).all(db).await?)
}
