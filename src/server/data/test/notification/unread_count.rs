use super::*;

/// Tests that the unread count is scoped per user.
///
/// Expected: Ok with each user seeing only their own unread rows
#[tokio::test]
async fn counts_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::create_user(db, None).await?;
    let second = factory::user::create_user(db, None).await?;

    seed_notification(db, first.id).await?;
    seed_notification(db, first.id).await?;
    seed_notification(db, second.id).await?;

    let repo = NotificationRepository::new(db);
    assert_eq!(repo.unread_count(first.id).await?, 2);
    assert_eq!(repo.unread_count(second.id).await?, 1);

    Ok(())
}
