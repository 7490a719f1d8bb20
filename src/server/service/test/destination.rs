use entity::sea_orm_active_enums::DestinationCategory;
use test_utils::{builder::TestBuilder, factory, factory::destination::DestinationFactory};

use crate::server::{
    error::AppError,
    model::destination::{CreateDestinationParams, DestinationFilter, UpdateDestinationParams},
    service::destination::{slugify_name, DestinationService},
};

fn create_params(name: &str) -> CreateDestinationParams {
    CreateDestinationParams {
        name: name.to_string(),
        description: "Temples, rice terraces and beaches.".to_string(),
        category: DestinationCategory::Cultural,
        price: 1800.0,
        duration_days: 7,
        images: Vec::new(),
        city: "Ubud".to_string(),
        country: "Indonesia".to_string(),
        highlights: vec!["Monkey Forest".to_string()],
        includes: Vec::new(),
        excludes: Vec::new(),
        featured: true,
        best_season: Some("April to October".to_string()),
        tags: vec!["culture".to_string()],
        created_by: Some(1),
    }
}

#[test]
fn slugifies_names() {
    assert_eq!(slugify_name("Bali Escape"), "bali-escape");
    assert_eq!(slugify_name("  Côte d'Azur & Monaco! "), "cote-d-azur-monaco");
}

/// Tests that creation derives the slug and starts with no rating.
///
/// Expected: Ok with slug `bali-escape`, active, zero rating
#[tokio::test]
async fn create_derives_slug() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Destination)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = DestinationService::new(db);
    let destination = service.create(create_params("Bali Escape")).await.unwrap();

    assert_eq!(destination.slug, "bali-escape");
    assert!(destination.is_active);
    assert_eq!(destination.rating_average, 0.0);
    assert_eq!(destination.rating_count, 0);
    assert_eq!(destination.created_by, Some(1));

    let found = service.get_by_slug("bali-escape").await.unwrap();
    assert_eq!(found.id, destination.id);
}

/// Tests a second destination whose name slugifies to an existing slug.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn create_rejects_slug_collision() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Destination)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = DestinationService::new(db);
    service.create(create_params("Bali Escape")).await.unwrap();
    let result = service.create(create_params("bali escape!")).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

/// Tests that renaming regenerates the slug.
///
/// Expected: Ok with the new slug; the old slug no longer resolves
#[tokio::test]
async fn update_renames_slug() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Destination)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = DestinationService::new(db);
    let destination = service.create(create_params("Bali Escape")).await.unwrap();

    let updated = service
        .update(UpdateDestinationParams {
            id: destination.id,
            name: Some("Bali Retreat".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(updated.slug, "bali-retreat");
    assert!(matches!(
        service.get_by_slug("bali-escape").await,
        Err(AppError::NotFound(_))
    ));
}

/// Tests keeping the same name on update, which must not collide with itself.
///
/// Expected: Ok with unchanged slug
#[tokio::test]
async fn update_same_name_is_not_a_collision() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Destination)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = DestinationService::new(db);
    let destination = service.create(create_params("Bali Escape")).await.unwrap();

    let updated = service
        .update(UpdateDestinationParams {
            id: destination.id,
            name: Some("Bali Escape".to_string()),
            price: Some(1500.0),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(updated.slug, "bali-escape");
    assert_eq!(updated.price, 1500.0);
}

/// Tests the page count of a listing.
///
/// Expected: Ok with 5 matches over 3 pages of 2
#[tokio::test]
async fn list_computes_pages() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Destination)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_destination(db).await.unwrap();
    }

    let service = DestinationService::new(db);
    let page = service
        .list(DestinationFilter {
            limit: 2,
            page: 3,
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(page.total, 5);
    assert_eq!(page.pages, 3);
    assert_eq!(page.page, 3);
    assert_eq!(page.destinations.len(), 1);
}

/// Tests that slug lookup ignores the active flag.
///
/// Expected: Ok with the inactive destination
#[tokio::test]
async fn get_by_slug_includes_inactive() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Destination)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    DestinationFactory::new(db)
        .slug("hidden-gem")
        .active(false)
        .build()
        .await
        .unwrap();

    let service = DestinationService::new(db);

    assert!(service.get_by_slug("hidden-gem").await.is_ok());
}

/// Tests toggling and deleting missing destinations.
///
/// Expected: Err(AppError::NotFound) for both
#[tokio::test]
async fn missing_destination_is_not_found() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Destination)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = DestinationService::new(db);

    assert!(matches!(service.toggle(3).await, Err(AppError::NotFound(_))));
    assert!(matches!(service.delete(3).await, Err(AppError::NotFound(_))));
}
