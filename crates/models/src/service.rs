use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, QuerySelect, TransactionTrait};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub icon: String,
    pub order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Ascending by `order`; `id` keeps ties stable between calls.
pub async fn list_ordered(db: &DatabaseConnection, limit: u64) -> Result<Vec<Model>, ModelError> {
    let rows = Entity::find()
        .order_by_asc(Column::Order)
        .order_by_asc(Column::Id)
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
