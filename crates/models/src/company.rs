use sea_orm::{entity::prelude::*, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Company profile. The table is treated as a singleton: the first row wins.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub social: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn find_first(db: &DatabaseConnection) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find().one(db).await?)
}
