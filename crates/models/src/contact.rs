use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, QuerySelect};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: Option<String>,
    pub industry: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub created_at: DateTimeWithTimeZone,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Insert one row; returns the primary key the database acknowledged.
pub async fn insert(db: &DatabaseConnection, row: ActiveModel) -> Result<Uuid, ModelError> {
    let res = Entity::insert(row).exec(db).await?;
    Ok(res.last_insert_id)
}

/// Newest first, at most `limit` rows.
pub async fn list_recent(db: &DatabaseConnection, limit: u64) -> Result<Vec<Model>, ModelError> {
    let rows = Entity::find()
        .order_by_desc(Column::CreatedAt)
        .limit(limit)
        .all(db)
        .await?;
    Ok(rows)
}
