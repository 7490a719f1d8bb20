use super::*;

/// Tests listing a destination's reviews.
///
/// Unpublished reviews and reviews of other destinations are left out; the rest come
/// newest first with their author attached.
///
/// Expected: Ok with two reviews, newest first, each with an author
#[tokio::test]
async fn lists_published_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, destination) = create_user_and_destination(db).await?;
    let second_user = factory::create_user(db).await?;
    let third_user = factory::create_user(db).await?;
    let other_destination = factory::create_destination(db).await?;

    let now = Utc::now();
    let older = ReviewFactory::new(db, user.id, destination.id)
        .created_at(now - Duration::days(1))
        .build()
        .await?;
    let newer = ReviewFactory::new(db, second_user.id, destination.id)
        .created_at(now)
        .build()
        .await?;
    ReviewFactory::new(db, third_user.id, destination.id)
        .published(false)
        .build()
        .await?;
    factory::create_review(db, user.id, other_destination.id, 3).await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo.get_published_by_destination(destination.id).await?;

    let ids: Vec<i32> = reviews.iter().map(|(r, _)| r.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert_eq!(reviews[0].1.as_ref().unwrap().id, second_user.id);
    assert_eq!(reviews[1].1.as_ref().unwrap().id, user.id);

    Ok(())
}
