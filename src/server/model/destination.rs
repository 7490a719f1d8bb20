//! Destination domain models, listing filters and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::DestinationCategory;

use crate::{
    model::destination::{
        CreateDestinationDto, DestinationDto, DestinationQueryDto, LocationDto,
        PaginatedDestinationsDto, PaginationDto, UpdateDestinationDto,
    },
    server::{error::AppError, util::parse::json_strings},
};

pub const DEFAULT_PAGE_SIZE: u64 = 12;
pub const DEFAULT_FEATURED_LIMIT: u64 = 6;
/// Larger requested page sizes are clamped to this.
pub const MAX_PAGE_SIZE: u64 = 100;
/// Highest page whose row offset still fits a SQLite integer at `MAX_PAGE_SIZE`.
pub const MAX_PAGE: u64 = i64::MAX as u64 / MAX_PAGE_SIZE;

/// Resolves the featured listing size: zero or missing uses the default, large values
/// are clamped to `MAX_PAGE_SIZE`.
pub fn featured_limit(limit: Option<u64>) -> u64 {
    limit
        .filter(|l| *l > 0)
        .unwrap_or(DEFAULT_FEATURED_LIMIT)
        .min(MAX_PAGE_SIZE)
}

/// Bookable travel package.
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub category: DestinationCategory,
    pub price: f64,
    pub duration_days: i32,
    /// Mean of published review ratings, one decimal place.
    pub rating_average: f64,
    /// Number of published reviews.
    pub rating_count: i32,
    pub images: Vec<String>,
    pub city: String,
    pub country: String,
    pub highlights: Vec<String>,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
    pub featured: bool,
    pub best_season: Option<String>,
    pub tags: Vec<String>,
    pub created_by: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Destination {
    /// Converts an entity model at the repository boundary, unpacking JSON list columns.
    pub fn from_entity(entity: entity::destination::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            description: entity.description,
            category: entity.category,
            price: entity.price,
            duration_days: entity.duration_days,
            rating_average: entity.rating_average,
            rating_count: entity.rating_count,
            images: json_strings(entity.images),
            city: entity.city,
            country: entity.country,
            highlights: json_strings(entity.highlights),
            includes: json_strings(entity.includes),
            excludes: json_strings(entity.excludes),
            featured: entity.featured,
            best_season: entity.best_season,
            tags: json_strings(entity.tags),
            created_by: entity.created_by,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> DestinationDto {
        DestinationDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            description: self.description,
            category: self.category,
            price: self.price,
            duration_days: self.duration_days,
            rating_average: self.rating_average,
            rating_count: self.rating_count,
            images: self.images,
            location: LocationDto {
                city: self.city,
                country: self.country,
            },
            highlights: self.highlights,
            includes: self.includes,
            excludes: self.excludes,
            featured: self.featured,
            best_season: self.best_season,
            tags: self.tags,
            created_by: self.created_by,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Column a destination listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    Price,
    RatingAverage,
    DurationDays,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DestinationSort {
    pub field: SortField,
    pub descending: bool,
}

impl Default for DestinationSort {
    /// Newest first.
    fn default() -> Self {
        Self {
            field: SortField::CreatedAt,
            descending: true,
        }
    }
}

impl DestinationSort {
    /// Parses a sort key such as `price` or `-ratingAverage`.
    ///
    /// A leading `-` sorts descending. Unknown keys fall back to the default.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let (descending, key) = match raw.strip_prefix('-') {
            Some(key) => (true, key),
            None => (false, raw),
        };

        let field = match key {
            "createdAt" => SortField::CreatedAt,
            "price" => SortField::Price,
            "ratingAverage" => SortField::RatingAverage,
            "durationDays" => SortField::DurationDays,
            "name" => SortField::Name,
            _ => return Self::default(),
        };

        Self { field, descending }
    }
}

/// Filters, ordering and paging for the public listing. Only active destinations match.
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationFilter {
    pub category: Option<DestinationCategory>,
    /// Case-insensitive substring of the city.
    pub city: Option<String>,
    /// Case-insensitive substring of the country.
    pub country: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_rating: Option<f64>,
    pub max_duration: Option<i32>,
    pub search: Option<String>,
    /// Destinations carrying any of these tags match.
    pub tags: Vec<String>,
    pub sort: DestinationSort,
    /// 1-based page number.
    pub page: u64,
    pub limit: u64,
}

impl Default for DestinationFilter {
    fn default() -> Self {
        Self {
            category: None,
            city: None,
            country: None,
            min_price: None,
            max_price: None,
            min_rating: None,
            max_duration: None,
            search: None,
            tags: Vec::new(),
            sort: DestinationSort::default(),
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl DestinationFilter {
    /// Builds the filter from query parameters.
    ///
    /// A zero page or limit uses the default and the limit is clamped to `MAX_PAGE_SIZE`.
    ///
    /// # Returns
    /// - `Ok(DestinationFilter)` - The resolved filter
    /// - `Err(AppError::BadRequest)` - Page is beyond `MAX_PAGE`
    pub fn from_dto(dto: DestinationQueryDto) -> Result<Self, AppError> {
        let page = dto.page.filter(|p| *p > 0).unwrap_or(1);
        if page > MAX_PAGE {
            return Err(AppError::BadRequest("Invalid page".to_string()));
        }
        let limit = dto
            .limit
            .filter(|l| *l > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(MAX_PAGE_SIZE);

        let tags = dto
            .tags
            .map(|tags| {
                tags.split(',')
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            category: dto.category,
            city: non_empty(dto.destination),
            country: non_empty(dto.country),
            min_price: dto.min_price,
            max_price: dto.max_price,
            min_rating: dto.min_rating,
            max_duration: dto.max_duration,
            search: non_empty(dto.search),
            tags,
            sort: dto
                .sort
                .as_deref()
                .map(DestinationSort::parse)
                .unwrap_or_default(),
            page,
            limit,
        })
    }
}

/// One page of listing results.
#[derive(Debug, Clone)]
pub struct PaginatedDestinations {
    pub destinations: Vec<Destination>,
    pub total: u64,
    pub page: u64,
    /// `ceil(total / limit)`
    pub pages: u64,
}

impl PaginatedDestinations {
    pub fn into_dto(self) -> PaginatedDestinationsDto {
        PaginatedDestinationsDto {
            destinations: self
                .destinations
                .into_iter()
                .map(Destination::into_dto)
                .collect(),
            pagination: PaginationDto {
                total: self.total,
                page: self.page,
                pages: self.pages,
            },
        }
    }
}

/// Parameters for creating a destination. The slug is derived by the service.
#[derive(Debug, Clone)]
pub struct CreateDestinationParams {
    pub name: String,
    pub description: String,
    pub category: DestinationCategory,
    pub price: f64,
    pub duration_days: i32,
    pub images: Vec<String>,
    pub city: String,
    pub country: String,
    pub highlights: Vec<String>,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
    pub featured: bool,
    pub best_season: Option<String>,
    pub tags: Vec<String>,
    pub created_by: Option<i32>,
}

impl CreateDestinationParams {
    /// Converts a validated DTO. `price` and `duration_days` are required by validation.
    pub fn from_dto(dto: CreateDestinationDto, created_by: i32) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
            category: dto.category.unwrap_or(DestinationCategory::Adventure),
            price: dto.price.unwrap_or_default(),
            duration_days: dto.duration_days.unwrap_or(1),
            images: dto.images,
            city: dto.location.city,
            country: dto.location.country,
            highlights: dto.highlights,
            includes: dto.includes,
            excludes: dto.excludes,
            featured: dto.featured,
            best_season: dto.best_season,
            tags: dto.tags,
            created_by: Some(created_by),
        }
    }
}

/// Partial update, `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateDestinationParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<DestinationCategory>,
    pub price: Option<f64>,
    pub duration_days: Option<i32>,
    pub images: Option<Vec<String>>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub highlights: Option<Vec<String>>,
    pub includes: Option<Vec<String>>,
    pub excludes: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub best_season: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

impl UpdateDestinationParams {
    pub fn from_dto(id: i32, dto: UpdateDestinationDto) -> Self {
        let location = dto.location.unwrap_or_default();

        Self {
            id,
            name: dto.name.map(|n| n.trim().to_string()),
            description: dto.description,
            category: dto.category,
            price: dto.price,
            duration_days: dto.duration_days,
            images: dto.images,
            city: location.city,
            country: location.country,
            highlights: dto.highlights,
            includes: dto.includes,
            excludes: dto.excludes,
            featured: dto.featured,
            best_season: dto.best_season,
            tags: dto.tags,
            is_active: dto.is_active,
        }
    }
}
