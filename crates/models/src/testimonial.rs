use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, QuerySelect, TransactionTrait};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "testimonial")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub quote: String,
    pub author: String,
    pub position: String,
    pub company: String,
    pub created_at: DateTimeWithTimeZone,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Active rows only, newest first.
pub async fn list_active(db: &DatabaseConnection, limit: u64) -> Result<Vec<Model>, ModelError> {
    let rows = Entity::find()
        .filter(Column::Active.eq(true))
        .order_by_desc(Column::CreatedAt)
        .limit(limit)
        .all(db)
        .await?;
    Ok(rows)
}

/// Delete every row and insert `rows` in one transaction.
pub async fn replace_all(db: &DatabaseConnection, rows: Vec<ActiveModel>) -> Result<u64, ModelError> {
    let count = rows.len() as u64;
    let txn = db.begin().await?;
    Entity::delete_many().exec(&txn).await?;
    if !rows.is_empty() {
        Entity::insert_many(rows).exec(&txn).await?;
    }
    txn.commit().await?;
    Ok(count)
}
