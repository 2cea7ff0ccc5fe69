use super::*;

/// Tests moving a booking to a new status with a final fare.
///
/// Expected: Ok(Some) with status and fare updated
#[tokio::test]
async fn sets_status_and_fare() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (park, user, customer, _) =
        test_utils::factory::helpers::create_booking_with_dependencies(db).await?;
    let booking = factory::booking::BookingFactory::new(db, park.id, customer.id, user.id)
        .status(BookingStatus::InProgress)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let updated = repo
        .set_status(booking.id, BookingStatus::Completed, Some(42.5))
        .await?
        .unwrap();

    assert_eq!(updated.status, BookingStatus::Completed);
    assert_eq!(updated.fare, Some(42.5));

    Ok(())
}

/// Tests that the stored fare survives a status change without a new fare.
///
/// Expected: Ok(Some) with status updated and fare untouched
#[tokio::test]
async fn keeps_existing_fare_when_none_given() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (park, user, customer, _) =
        test_utils::factory::helpers::create_booking_with_dependencies(db).await?;
    let booking = factory::booking::BookingFactory::new(db, park.id, customer.id, user.id)
        .status(BookingStatus::Assigned)
        .fare(Some(15.0))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let updated = repo
        .set_status(booking.id, BookingStatus::InProgress, None)
        .await?
        .unwrap();

    assert_eq!(updated.status, BookingStatus::InProgress);
    assert_eq!(updated.fare, Some(15.0));

    Ok(())
}

/// Tests the missing booking case.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);
    let result = repo
        .set_status(9999, BookingStatus::Cancelled, None)
        .await?;

    assert!(result.is_none());

    Ok(())
}
