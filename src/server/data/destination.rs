//! Destination data repository.
//!
//! Handles catalog reads (filtered listing, featured, slug lookup), admin writes and the
//! denormalized rating columns maintained by the review service.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    destination::{
        CreateDestinationParams, Destination, DestinationFilter, SortField,
        UpdateDestinationParams,
    },
    review::RatingSummary,
};

/// Tag membership test against the JSON `tags` column.
const TAG_MATCH_SQL: &str =
    r#"EXISTS (SELECT 1 FROM json_each("destination"."tags") WHERE json_each.value = ?)"#;

pub struct DestinationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DestinationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a destination with zero rating, active.
    pub async fn create(
        &self,
        params: CreateDestinationParams,
        slug: String,
    ) -> Result<Destination, DbErr> {
        let now = Utc::now();
        let entity = entity::destination::ActiveModel {
            name: ActiveValue::Set(params.name),
            slug: ActiveValue::Set(slug),
            description: ActiveValue::Set(params.description),
            category: ActiveValue::Set(params.category),
            price: ActiveValue::Set(params.price),
            duration_days: ActiveValue::Set(params.duration_days),
            rating_average: ActiveValue::Set(0.0),
            rating_count: ActiveValue::Set(0),
            images: ActiveValue::Set(serde_json::json!(params.images)),
            city: ActiveValue::Set(params.city),
            country: ActiveValue::Set(params.country),
            highlights: ActiveValue::Set(serde_json::json!(params.highlights)),
            includes: ActiveValue::Set(serde_json::json!(params.includes)),
            excludes: ActiveValue::Set(serde_json::json!(params.excludes)),
            featured: ActiveValue::Set(params.featured),
            best_season: ActiveValue::Set(params.best_season),
            tags: ActiveValue::Set(serde_json::json!(params.tags)),
            created_by: ActiveValue::Set(params.created_by),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Destination::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Destination>, DbErr> {
        let entity = entity::prelude::Destination::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Destination::from_entity))
    }

    /// Finds a destination by slug regardless of its active flag.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Destination>, DbErr> {
        let entity = entity::prelude::Destination::find()
            .filter(entity::destination::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        Ok(entity.map(Destination::from_entity))
    }

    /// Checks whether `slug` is used by a destination other than `exclude_id`.
    pub async fn slug_taken(&self, slug: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Destination::find()
            .filter(entity::destination::Column::Slug.eq(slug));

        if let Some(id) = exclude_id {
            query = query.filter(entity::destination::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets one page of active destinations matching the filter.
    ///
    /// # Arguments
    /// - `filter` - Filters, sort order, 1-based page and page size
    ///
    /// # Returns
    /// - `Ok((destinations, total))` - Destinations on the requested page and the total
    ///   number of matches across all pages
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_filtered(
        &self,
        filter: &DestinationFilter,
    ) -> Result<(Vec<Destination>, u64), DbErr> {
        use entity::destination::Column;

        let mut condition = Condition::all().add(Column::IsActive.eq(true));

        if let Some(category) = filter.category {
            condition = condition.add(Column::Category.eq(category));
        }
        if let Some(city) = &filter.city {
            condition = condition.add(Column::City.contains(city));
        }
        if let Some(country) = &filter.country {
            condition = condition.add(Column::Country.contains(country));
        }
        if let Some(min_price) = filter.min_price {
            condition = condition.add(Column::Price.gte(min_price));
        }
        if let Some(max_price) = filter.max_price {
            condition = condition.add(Column::Price.lte(max_price));
        }
        if let Some(min_rating) = filter.min_rating {
            condition = condition.add(Column::RatingAverage.gte(min_rating));
        }
        if let Some(max_duration) = filter.max_duration {
            condition = condition.add(Column::DurationDays.lte(max_duration));
        }
        if let Some(search) = &filter.search {
            condition = condition.add(
                Condition::any()
                    .add(Column::Name.contains(search))
                    .add(Column::Description.contains(search))
                    .add(Column::Category.contains(search))
                    .add(Column::City.contains(search))
                    .add(Column::Country.contains(search)),
            );
        }
        if !filter.tags.is_empty() {
            let mut any_tag = Condition::any();
            for tag in &filter.tags {
                any_tag = any_tag.add(Expr::cust_with_values(TAG_MATCH_SQL, [tag.clone()]));
            }
            condition = condition.add(any_tag);
        }

        let sort_column = match filter.sort.field {
            SortField::CreatedAt => Column::CreatedAt,
            SortField::Price => Column::Price,
            SortField::RatingAverage => Column::RatingAverage,
            SortField::DurationDays => Column::DurationDays,
            SortField::Name => Column::Name,
        };
        let order = if filter.sort.descending {
            Order::Desc
        } else {
            Order::Asc
        };

        let paginator = entity::prelude::Destination::find()
            .filter(condition)
            .order_by(sort_column, order.clone())
            .order_by(Column::Id, order)
            .paginate(self.db, filter.limit);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(filter.page.saturating_sub(1)).await?;

        Ok((
            entities.into_iter().map(Destination::from_entity).collect(),
            total,
        ))
    }

    /// Gets featured, active destinations by rating, best first.
    pub async fn get_featured(&self, limit: u64) -> Result<Vec<Destination>, DbErr> {
        let entities = entity::prelude::Destination::find()
            .filter(entity::destination::Column::Featured.eq(true))
            .filter(entity::destination::Column::IsActive.eq(true))
            .order_by_desc(entity::destination::Column::RatingAverage)
            .order_by_desc(entity::destination::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Destination::from_entity).collect())
    }

    /// Gets the highest rated destinations, active or not.
    pub async fn get_top_rated(&self, limit: u64) -> Result<Vec<Destination>, DbErr> {
        let entities = entity::prelude::Destination::find()
            .order_by_desc(entity::destination::Column::RatingAverage)
            .order_by_desc(entity::destination::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Destination::from_entity).collect())
    }

    /// Applies a partial update.
    ///
    /// # Arguments
    /// - `params` - Fields to change, `None` leaves a column untouched
    /// - `slug` - New slug when the name changed
    ///
    /// # Returns
    /// - `Ok(Some(Destination))` - The updated destination
    /// - `Ok(None)` - No destination with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        params: UpdateDestinationParams,
        slug: Option<String>,
    ) -> Result<Option<Destination>, DbErr> {
        let Some(destination) = entity::prelude::Destination::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::destination::ActiveModel = destination.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(slug) = slug {
            active_model.slug = ActiveValue::Set(slug);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(category) = params.category {
            active_model.category = ActiveValue::Set(category);
        }
        if let Some(price) = params.price {
            active_model.price = ActiveValue::Set(price);
        }
        if let Some(duration_days) = params.duration_days {
            active_model.duration_days = ActiveValue::Set(duration_days);
        }
        if let Some(images) = params.images {
            active_model.images = ActiveValue::Set(serde_json::json!(images));
        }
        if let Some(city) = params.city {
            active_model.city = ActiveValue::Set(city);
        }
        if let Some(country) = params.country {
            active_model.country = ActiveValue::Set(country);
        }
        if let Some(highlights) = params.highlights {
            active_model.highlights = ActiveValue::Set(serde_json::json!(highlights));
        }
        if let Some(includes) = params.includes {
            active_model.includes = ActiveValue::Set(serde_json::json!(includes));
        }
        if let Some(excludes) = params.excludes {
            active_model.excludes = ActiveValue::Set(serde_json::json!(excludes));
        }
        if let Some(featured) = params.featured {
            active_model.featured = ActiveValue::Set(featured);
        }
        if let Some(best_season) = params.best_season {
            active_model.best_season = ActiveValue::Set(Some(best_season));
        }
        if let Some(tags) = params.tags {
            active_model.tags = ActiveValue::Set(serde_json::json!(tags));
        }
        if let Some(is_active) = params.is_active {
            active_model.is_active = ActiveValue::Set(is_active);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Destination::from_entity(entity)))
    }

    /// Flips `is_active`.
    ///
    /// # Returns
    /// - `Ok(Some(Destination))` - The destination with its new flag
    /// - `Ok(None)` - No destination with that ID
    pub async fn toggle_active(&self, id: i32) -> Result<Option<Destination>, DbErr> {
        let Some(destination) = entity::prelude::Destination::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let is_active = destination.is_active;
        let mut active_model: entity::destination::ActiveModel = destination.into();
        active_model.is_active = ActiveValue::Set(!is_active);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Destination::from_entity(entity)))
    }

    /// Writes the recomputed rating columns.
    ///
    /// A missing destination is silently skipped.
    pub async fn set_rating(&self, id: i32, rating: RatingSummary) -> Result<(), DbErr> {
        entity::prelude::Destination::update_many()
            .filter(entity::destination::Column::Id.eq(id))
            .col_expr(
                entity::destination::Column::RatingAverage,
                Expr::value(rating.average),
            )
            .col_expr(
                entity::destination::Column::RatingCount,
                Expr::value(rating.count),
            )
            .col_expr(
                entity::destination::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a destination. Reviews and bookings referencing it are left in place.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No destination with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Destination::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Destination::find().count(self.db).await
    }
}
