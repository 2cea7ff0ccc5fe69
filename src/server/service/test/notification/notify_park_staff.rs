use super::*;

/// Tests fanning a booking event out to a park's staff plus an outside
/// creator.
///
/// The admin has no park scope, so they only receive the notification
/// through the extra-recipient slot. The causer is skipped.
///
/// Expected: staff member and admin each have one unread, causer has none
#[tokio::test]
async fn reaches_staff_and_outside_creator() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let hub = RealtimeHub::new();

    let park = factory::park::create_park(db).await?;
    let staff = factory::user::create_user(db, Some(park.id)).await?;
    let causer = factory::user::create_user(db, Some(park.id)).await?;
    let admin = factory::user::create_admin(db).await?;

    let service = NotificationService::new(db, &hub);
    service
        .notify_park_staff(
            park.id,
            Some(admin.id),
            Some(causer.id),
            None,
            "booking_created",
            "New booking",
            "A booking was created",
        )
        .await?;

    let repo = NotificationRepository::new(db);
    assert_eq!(repo.unread_count(staff.id).await?, 1);
    assert_eq!(repo.unread_count(admin.id).await?, 1);
    assert_eq!(repo.unread_count(causer.id).await?, 0);

    Ok(())
}

/// Tests that deactivated accounts are never notified, including through the
/// extra-recipient slot.
///
/// Expected: zero unread for both inactive users
#[tokio::test]
async fn skips_inactive_accounts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let hub = RealtimeHub::new();

    let park = factory::park::create_park(db).await?;
    let inactive_staff = factory::user::UserFactory::new(db, Some(park.id))
        .active(false)
        .build()
        .await?;
    let inactive_extra = factory::user::UserFactory::new(db, None)
        .active(false)
        .build()
        .await?;

    let service = NotificationService::new(db, &hub);
    service
        .notify_park_staff(
            park.id,
            Some(inactive_extra.id),
            None,
            None,
            "booking_created",
            "New booking",
            "A booking was created",
        )
        .await?;

    let repo = NotificationRepository::new(db);
    assert_eq!(repo.unread_count(inactive_staff.id).await?, 0);
    assert_eq!(repo.unread_count(inactive_extra.id).await?, 0);

    Ok(())
}

/// Tests naming a park staff member as the extra recipient.
///
/// Expected: one unread, not two
#[tokio::test]
async fn does_not_double_notify_staff_creator() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let hub = RealtimeHub::new();

    let park = factory::park::create_park(db).await?;
    let staff = factory::user::create_user(db, Some(park.id)).await?;

    let service = NotificationService::new(db, &hub);
    service
        .notify_park_staff(
            park.id,
            Some(staff.id),
            None,
            None,
            "booking_created",
            "New booking",
            "A booking was created",
        )
        .await?;

    let repo = NotificationRepository::new(db);
    assert_eq!(repo.unread_count(staff.id).await?, 1);

    Ok(())
}
