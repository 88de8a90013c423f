use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, QuerySelect, TransactionTrait};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub image: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub created_at: DateTimeWithTimeZone,
    pub featured: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Newest first. `category` is compared with exact equality.
pub async fn list(db: &DatabaseConnection, category: Option<&str>, limit: u64) -> Result<Vec<Model>, ModelError> {
    let mut query = Entity::find();
    if let Some(category) = category {
        query = query.filter(Column::Category.eq(category));
    }
    let rows = query
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
