use super::*;

/// Tests that notifications are stored as scheduled and listed back.
///
/// Expected: Ok with status scheduled and both notifications listed, newest first
#[tokio::test]
async fn stores_scheduled_notifications() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsletterNotification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationRepository::new(db);
    let first = repo
        .create(CreateNotificationParams {
            title: "Spring deals".to_string(),
            message: "Up to 20% off selected trips.".to_string(),
            scheduled_for: Utc::now() + Duration::days(7),
        })
        .await?;
    let second = repo
        .create(CreateNotificationParams {
            title: "Summer deals".to_string(),
            message: "Beach escapes from 499.".to_string(),
            scheduled_for: Utc::now() + Duration::days(60),
        })
        .await?;

    assert_eq!(first.status, NotificationStatus::Scheduled);

    let all = repo.get_all().await?;
    let ids: Vec<i32> = all.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}
