use super::*;

/// Tests deleting a booking that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_booking_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let hub = RealtimeHub::new();

    let service = BookingService::new(db, &hub);
    let result = service.delete_booking(999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that deleting an open booking releases its driver.
///
/// Expected: Ok, booking gone, driver available again
#[tokio::test]
async fn releases_driver_of_open_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let hub = RealtimeHub::new();

    let park = factory::park::create_park(db).await?;
    let user = factory::user::create_user(db, Some(park.id)).await?;
    let customer = factory::customer::create_customer(db).await?;
    let driver = factory::driver::DriverFactory::new(db, park.id)
        .status(DriverStatus::OnTrip)
        .build()
        .await?;
    let booking = factory::booking::BookingFactory::new(db, park.id, customer.id, user.id)
        .driver_id(Some(driver.id))
        .status(BookingStatus::Assigned)
        .build()
        .await?;

    let service = BookingService::new(db, &hub);
    service.delete_booking(booking.id).await?;

    let repo = crate::server::data::booking::BookingRepository::new(db);
    assert!(repo.get_by_id(booking.id).await?.is_none());

    let driver = DriverRepository::new(db).get_by_id(driver.id).await?.unwrap();
    assert_eq!(driver.status, DriverStatus::Available);

    Ok(())
}
