use super::*;

/// Tests marking one of the caller's notifications as read.
///
/// Expected: Ok(1) and the notification no longer counts as unread
#[tokio::test]
async fn marks_own_notification_read() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db, None).await?;
    let notification = seed_notification(db, user.id).await?;

    let repo = NotificationRepository::new(db);
    let updated = repo.mark_read(user.id, notification.id).await?;

    assert_eq!(updated, 1);
    assert_eq!(repo.unread_count(user.id).await?, 0);

    Ok(())
}

/// Tests that one user cannot mark another user's notification.
///
/// The update is scoped to the owning user, so a foreign id touches no
/// rows.
///
/// Expected: Ok(0) and the notification stays unread for its owner
#[tokio::test]
async fn ignores_foreign_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db, None).await?;
    let intruder = factory::user::create_user(db, None).await?;
    let notification = seed_notification(db, owner.id).await?;

    let repo = NotificationRepository::new(db);
    let updated = repo.mark_read(intruder.id, notification.id).await?;

    assert_eq!(updated, 0);
    assert_eq!(repo.unread_count(owner.id).await?, 1);

    Ok(())
}

/// Tests marking everything read in one sweep.
///
/// Expected: Ok with the number of previously-unread rows
#[tokio::test]
async fn marks_all_read() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db, None).await?;
    for _ in 0..3 {
        seed_notification(db, user.id).await?;
    }

    let repo = NotificationRepository::new(db);
    let updated = repo.mark_all_read(user.id).await?;

    assert_eq!(updated, 3);
    assert_eq!(repo.unread_count(user.id).await?, 0);

    Ok(())
}
