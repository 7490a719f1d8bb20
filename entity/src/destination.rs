use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::DestinationCategory;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "destination")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category: DestinationCategory,
    pub price: f64,
    pub duration_days: i32,
    pub rating_average: f64,
    pub rating_count: i32,
    pub images: Json,
    pub city: String,
    pub country: String,
    pub highlights: Json,
    pub includes: Json,
    pub excludes: Json,
    pub featured: bool,
    pub best_season: Option<String>,
    pub tags: Json,
    pub created_by: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
