use super::*;

/// Tests that only assigned and in-progress bookings count as open.
///
/// Creates one booking in each lifecycle state for the same driver and
/// verifies completed, cancelled and pending bookings are not counted.
///
/// Expected: Ok(2)
#[tokio::test]
async fn counts_only_open_statuses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (park, user, customer, _) =
        test_utils::factory::helpers::create_booking_with_dependencies(db).await?;
    let driver = factory::driver::create_driver(db, park.id).await?;

    for status in [
        BookingStatus::Pending,
        BookingStatus::Assigned,
        BookingStatus::InProgress,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ] {
        factory::booking::BookingFactory::new(db, park.id, customer.id, user.id)
            .driver_id(Some(driver.id))
            .status(status)
            .build()
            .await?;
    }

    let repo = BookingRepository::new(db);
    let count = repo.count_open_for_driver(driver.id, None).await?;

    assert_eq!(count, 2);

    Ok(())
}

/// Tests the exclusion of one booking from the count.
///
/// Used when deciding whether completing a given booking frees its driver;
/// the booking being completed must not count against the driver.
///
/// Expected: Ok(0) when the only open booking is excluded
#[tokio::test]
async fn excludes_given_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (park, user, customer, _) =
        test_utils::factory::helpers::create_booking_with_dependencies(db).await?;
    let driver = factory::driver::create_driver(db, park.id).await?;

    let open = factory::booking::BookingFactory::new(db, park.id, customer.id, user.id)
        .driver_id(Some(driver.id))
        .status(BookingStatus::InProgress)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    assert_eq!(repo.count_open_for_driver(driver.id, None).await?, 1);
    assert_eq!(repo.count_open_for_driver(driver.id, Some(open.id)).await?, 0);

    Ok(())
}
