use super::*;

/// Tests that a pending booking cannot jump straight to completed.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_jump_from_pending_to_completed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let hub = RealtimeHub::new();

    let (_, _, _, booking) =
        test_utils::factory::helpers::create_booking_with_dependencies(db).await?;

    let service = BookingService::new(db, &hub);
    let result = service
        .update_booking_status(UpdateBookingStatusParams {
            booking_id: booking.id,
            status: BookingStatus::Completed,
            fare: Some(25.0),
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests walking an assigned booking through to completion.
///
/// The booking moves assigned -> in_progress -> completed; completion stores
/// the final fare and releases the driver back to available.
///
/// Expected: Ok at each step, driver available afterwards
#[tokio::test]
async fn walks_assigned_booking_to_completion() -> Result<(), AppError> {
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

    let in_progress = service
        .update_booking_status(UpdateBookingStatusParams {
            booking_id: booking.id,
            status: BookingStatus::InProgress,
            fare: None,
        })
        .await?;
    assert_eq!(in_progress.status, BookingStatus::InProgress);

    let completed = service
        .update_booking_status(UpdateBookingStatusParams {
            booking_id: booking.id,
            status: BookingStatus::Completed,
            fare: Some(42.5),
        })
        .await?;
    assert_eq!(completed.status, BookingStatus::Completed);
    assert_eq!(completed.fare, Some(42.5));

    let driver = DriverRepository::new(db).get_by_id(driver.id).await?.unwrap();
    assert_eq!(driver.status, DriverStatus::Available);

    Ok(())
}

/// Tests that a terminal booking cannot be cancelled.
///
/// Expected: Err(BadRequest) for the completed booking, Ok for the pending
/// one
#[tokio::test]
async fn cancellation_requires_a_non_terminal_state() -> Result<(), AppError> {
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
    let completed = factory::booking::BookingFactory::new(db, park.id, customer.id, user.id)
        .status(BookingStatus::Completed)
        .build()
        .await?;
    let pending =
        factory::booking::create_booking(db, park.id, customer.id, user.id).await?;

    let service = BookingService::new(db, &hub);

    let refused = service
        .update_booking_status(UpdateBookingStatusParams {
            booking_id: completed.id,
            status: BookingStatus::Cancelled,
            fare: None,
        })
        .await;
    assert!(matches!(refused, Err(AppError::BadRequest(_))));

    let cancelled = service
        .update_booking_status(UpdateBookingStatusParams {
            booking_id: pending.id,
            status: BookingStatus::Cancelled,
            fare: None,
        })
        .await?;
    assert_eq!(cancelled.status, BookingStatus::Cancelled);

    Ok(())
}
