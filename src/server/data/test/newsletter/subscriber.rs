use super::*;

/// Tests creating and finding a subscriber.
///
/// Expected: Ok with the subscriber found by email
#[tokio::test]
async fn creates_and_finds_subscriber() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Subscriber)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SubscriberRepository::new(db);
    let created = repo
        .create("ana@example.com".to_string(), "footer".to_string())
        .await?;

    let found = repo.find_by_email("ana@example.com").await?.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.source, "footer");
    assert!(repo.find_by_email("other@example.com").await?.is_none());

    Ok(())
}

/// Tests listing subscribers newest first.
///
/// Expected: Ok with the later subscriber first
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Subscriber)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    create_subscriber(db, "old@example.com", now - Duration::days(3)).await?;
    create_subscriber(db, "new@example.com", now).await?;

    let repo = SubscriberRepository::new(db);
    let subscribers = repo.get_all().await?;

    let emails: Vec<&str> = subscribers.iter().map(|s| s.email.as_str()).collect();
    assert_eq!(emails, vec!["new@example.com", "old@example.com"]);

    Ok(())
}
