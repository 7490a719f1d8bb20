use super::*;

/// Tests that inactive destinations never appear in the listing.
///
/// Expected: Ok with only the active destination and total 1
#[tokio::test]
async fn excludes_inactive_destinations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Destination)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::create_destination(db).await?;
    DestinationFactory::new(db).active(false).build().await?;

    let repo = DestinationRepository::new(db);
    let (destinations, total) = repo.get_filtered(&DestinationFilter::default()).await?;

    assert_eq!(total, 1);
    assert_eq!(destinations.len(), 1);
    assert_eq!(destinations[0].id, active.id);

    Ok(())
}

/// Tests the inclusive price range and duration ceiling.
///
/// Expected: Ok with only the destination inside both bounds
#[tokio::test]
async fn filters_by_price_and_duration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Destination)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    DestinationFactory::new(db).price(400.0).build().await?;
    let inside = DestinationFactory::new(db)
        .price(800.0)
        .duration_days(4)
        .build()
        .await?;
    DestinationFactory::new(db)
        .price(800.0)
        .duration_days(10)
        .build()
        .await?;
    DestinationFactory::new(db).price(1500.0).build().await?;

    let repo = DestinationRepository::new(db);
    let filter = DestinationFilter {
        min_price: Some(500.0),
        max_price: Some(1000.0),
        max_duration: Some(7),
        ..Default::default()
    };
    let (destinations, total) = repo.get_filtered(&filter).await?;

    assert_eq!(total, 1);
    assert_eq!(destinations[0].id, inside.id);

    Ok(())
}

/// Tests matching any of several tags.
///
/// Expected: Ok with the two tagged destinations
#[tokio::test]
async fn matches_any_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Destination)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    DestinationFactory::new(db).tags(&["beach", "sun"]).build().await?;
    DestinationFactory::new(db).tags(&["hiking"]).build().await?;
    DestinationFactory::new(db).tags(&["museums"]).build().await?;

    let repo = DestinationRepository::new(db);
    let filter = DestinationFilter {
        tags: vec!["beach".to_string(), "hiking".to_string()],
        ..Default::default()
    };
    let (_, total) = repo.get_filtered(&filter).await?;

    assert_eq!(total, 2);

    Ok(())
}

/// Tests case-insensitive free text search over name and location.
///
/// Expected: Ok with destinations matching by name or by country
#[tokio::test]
async fn searches_name_and_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Destination)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    DestinationFactory::new(db)
        .name("Bali Escape")
        .location("Ubud", "Indonesia")
        .build()
        .await?;
    DestinationFactory::new(db)
        .name("Island Hopping")
        .location("Nusa Penida", "Bali")
        .build()
        .await?;
    DestinationFactory::new(db)
        .name("Alpine Trek")
        .location("Zermatt", "Switzerland")
        .build()
        .await?;

    let repo = DestinationRepository::new(db);
    let filter = DestinationFilter {
        search: Some("bali".to_string()),
        ..Default::default()
    };
    let (_, total) = repo.get_filtered(&filter).await?;

    assert_eq!(total, 2);

    Ok(())
}

/// Tests filtering by category.
///
/// Expected: Ok with only the cultural destination
#[tokio::test]
async fn filters_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Destination)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_destination(db).await?;
    let cultural = DestinationFactory::new(db)
        .category(DestinationCategory::Cultural)
        .build()
        .await?;

    let repo = DestinationRepository::new(db);
    let filter = DestinationFilter {
        category: Some(DestinationCategory::Cultural),
        ..Default::default()
    };
    let (destinations, _) = repo.get_filtered(&filter).await?;

    assert_eq!(destinations.len(), 1);
    assert_eq!(destinations[0].id, cultural.id);

    Ok(())
}

/// Tests ascending price sort and paging.
///
/// Creates five destinations and requests the second page of two.
///
/// Expected: Ok with the third and fourth cheapest and total 5
#[tokio::test]
async fn sorts_and_paginates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Destination)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for price in [500.0, 100.0, 400.0, 200.0, 300.0] {
        DestinationFactory::new(db).price(price).build().await?;
    }

    let repo = DestinationRepository::new(db);
    let filter = DestinationFilter {
        sort: DestinationSort::parse("price"),
        page: 2,
        limit: 2,
        ..Default::default()
    };
    let (destinations, total) = repo.get_filtered(&filter).await?;

    assert_eq!(total, 5);
    let prices: Vec<f64> = destinations.iter().map(|d| d.price).collect();
    assert_eq!(prices, vec![300.0, 400.0]);

    Ok(())
}

/// Tests the default newest-first ordering.
///
/// Expected: Ok with the most recently created destination first
#[tokio::test]
async fn defaults_to_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Destination)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    DestinationFactory::new(db)
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    let newest = DestinationFactory::new(db).created_at(now).build().await?;

    let repo = DestinationRepository::new(db);
    let (destinations, _) = repo.get_filtered(&DestinationFilter::default()).await?;

    assert_eq!(destinations[0].id, newest.id);

    Ok(())
}
