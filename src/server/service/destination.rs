//! Destination catalog service.
//!
//! Derives slugs from names and guards against slug collisions before writing.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::destination::DestinationRepository,
    error::AppError,
    model::destination::{
        CreateDestinationParams, Destination, DestinationFilter, PaginatedDestinations,
        UpdateDestinationParams,
    },
};

const SLUG_TAKEN: &str = "A destination with this name already exists";

/// Lowercase, hyphen-separated slug of a destination name.
pub fn slugify_name(name: &str) -> String {
    slug::slugify(name)
}

pub struct DestinationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DestinationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of active destinations.
    ///
    /// `pages` is `ceil(total / limit)`, so an empty result has zero pages.
    pub async fn list(&self, filter: DestinationFilter) -> Result<PaginatedDestinations, AppError> {
        let repo = DestinationRepository::new(self.db);

        let (destinations, total) = repo.get_filtered(&filter).await?;
        let pages = if filter.limit > 0 {
            total.div_ceil(filter.limit)
        } else {
            0
        };

        Ok(PaginatedDestinations {
            destinations,
            total,
            page: filter.page,
            pages,
        })
    }

    pub async fn featured(&self, limit: u64) -> Result<Vec<Destination>, AppError> {
        let repo = DestinationRepository::new(self.db);

        Ok(repo.get_featured(limit).await?)
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Destination, AppError> {
        let repo = DestinationRepository::new(self.db);

        repo.find_by_slug(slug).await?.ok_or_else(not_found)
    }

    /// Creates a destination under the slug of its name.
    ///
    /// # Returns
    /// - `Ok(Destination)` - The created destination
    /// - `Err(AppError::BadRequest)` - Another destination already uses the slug
    pub async fn create(&self, params: CreateDestinationParams) -> Result<Destination, AppError> {
        let repo = DestinationRepository::new(self.db);

        let slug = slugify_name(&params.name);
        if repo.slug_taken(&slug, None).await? {
            return Err(AppError::BadRequest(SLUG_TAKEN.to_string()));
        }

        let destination = repo.create(params, slug).await?;

        tracing::info!(
            "Created destination {} ({})",
            destination.id,
            destination.slug
        );

        Ok(destination)
    }

    /// Applies a partial update. A new name also regenerates the slug.
    pub async fn update(&self, params: UpdateDestinationParams) -> Result<Destination, AppError> {
        let repo = DestinationRepository::new(self.db);

        let slug = match &params.name {
            Some(name) => {
                let slug = slugify_name(name);
                if repo.slug_taken(&slug, Some(params.id)).await? {
                    return Err(AppError::BadRequest(SLUG_TAKEN.to_string()));
                }
                Some(slug)
            }
            None => None,
        };

        repo.update(params, slug).await?.ok_or_else(not_found)
    }

    pub async fn toggle(&self, id: i32) -> Result<Destination, AppError> {
        let repo = DestinationRepository::new(self.db);

        repo.toggle_active(id).await?.ok_or_else(not_found)
    }

    /// Deletes a destination. Its reviews and bookings stay behind.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = DestinationRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(not_found());
        }

        tracing::info!("Deleted destination {}", id);

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Destination not found".to_string())
}
