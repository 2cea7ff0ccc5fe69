use super::*;

/// Tests creating a booking against a park that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_park_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let hub = RealtimeHub::new();

    let user = factory::user::create_user(db, None).await?;
    let customer = factory::customer::create_customer(db).await?;

    let service = BookingService::new(db, &hub);
    let result = service
        .create_booking(create_params(999, customer.id, user.id))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests creating a booking for a customer that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_customer_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let hub = RealtimeHub::new();

    let park = factory::park::create_park(db).await?;
    let user = factory::user::create_user(db, Some(park.id)).await?;

    let service = BookingService::new(db, &hub);
    let result = service
        .create_booking(create_params(park.id, 999, user.id))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests attaching a driver that does not exist at creation time.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_driver_is_not_found() -> Result<(), AppError> {
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

    let mut params = create_params(park.id, customer.id, user.id);
    params.driver_id = Some(999);

    let service = BookingService::new(db, &hub);
    let result = service.create_booking(params).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
