use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Destination};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Destination)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements executed after all tables exist.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables needed for catalog, booking and review operations.
    ///
    /// Adds User, Destination, Booking and Review, plus the composite unique index on
    /// (destination, user) that entity-derived schemas cannot express. Use this when
    /// testing anything that touches the rating aggregate or booking listings.
    pub fn with_travel_tables(mut self) -> Self {
        self.indexes.push(
            Index::create()
                .name("idx_review_destination_user")
                .table(entity::review::Entity)
                .col(entity::review::Column::DestinationId)
                .col(entity::review::Column::UserId)
                .unique()
                .to_owned(),
        );

        self.with_table(User)
            .with_table(Destination)
            .with_table(Booking)
            .with_table(Review)
    }

    /// Adds every table in the schema.
    ///
    /// Equivalent to `with_travel_tables()` plus the newsletter tables. Used by HTTP tests
    /// that drive the full router.
    pub fn with_all_tables(self) -> Self {
        self.with_travel_tables()
            .with_table(Subscriber)
            .with_table(NewsletterNotification)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
