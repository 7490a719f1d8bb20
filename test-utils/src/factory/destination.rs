//! Destination factory for creating test catalog entries.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::DestinationCategory;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test destinations with customizable fields.
///
/// Defaults produce an active, non-featured adventure destination in Lisbon priced at
/// 1000 for 5 days with no rating.
pub struct DestinationFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    slug: String,
    category: DestinationCategory,
    price: f64,
    duration_days: i32,
    rating_average: f64,
    rating_count: i32,
    city: String,
    country: String,
    featured: bool,
    tags: Vec<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl<'a> DestinationFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Destination {}", id),
            slug: format!("destination-{}", id),
            category: DestinationCategory::Adventure,
            price: 1000.0,
            duration_days: 5,
            rating_average: 0.0,
            rating_count: 0,
            city: "Lisbon".to_string(),
            country: "Portugal".to_string(),
            featured: false,
            tags: Vec::new(),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn category(mut self, category: DestinationCategory) -> Self {
        self.category = category;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn duration_days(mut self, duration_days: i32) -> Self {
        self.duration_days = duration_days;
        self
    }

    /// Sets the denormalized rating directly, bypassing review aggregation.
    pub fn rating(mut self, average: f64, count: i32) -> Self {
        self.rating_average = average;
        self.rating_count = count;
        self
    }

    pub fn location(mut self, city: impl Into<String>, country: impl Into<String>) -> Self {
        self.city = city.into();
        self.country = country.into();
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the destination entity into the database.
    pub async fn build(self) -> Result<entity::destination::Model, DbErr> {
        let empty = serde_json::json!([]);
        entity::destination::ActiveModel {
            name: ActiveValue::Set(self.name),
            slug: ActiveValue::Set(self.slug),
            description: ActiveValue::Set("A place worth visiting.".to_string()),
            category: ActiveValue::Set(self.category),
            price: ActiveValue::Set(self.price),
            duration_days: ActiveValue::Set(self.duration_days),
            rating_average: ActiveValue::Set(self.rating_average),
            rating_count: ActiveValue::Set(self.rating_count),
            images: ActiveValue::Set(empty.clone()),
            city: ActiveValue::Set(self.city),
            country: ActiveValue::Set(self.country),
            highlights: ActiveValue::Set(empty.clone()),
            includes: ActiveValue::Set(empty.clone()),
            excludes: ActiveValue::Set(empty),
            featured: ActiveValue::Set(self.featured),
            best_season: ActiveValue::Set(None),
            tags: ActiveValue::Set(serde_json::json!(self.tags)),
            created_by: ActiveValue::Set(None),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a destination with default values.
pub async fn create_destination(
    db: &DatabaseConnection,
) -> Result<entity::destination::Model, DbErr> {
    DestinationFactory::new(db).build().await
}
