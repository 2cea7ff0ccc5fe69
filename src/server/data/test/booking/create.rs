use super::*;

/// Tests creating a booking without a driver.
///
/// Verifies that the repository persists the provided trip details under the
/// supplied booking number and initial status.
///
/// Expected: Ok with booking created in the pending status
#[tokio::test]
async fn creates_pending_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::park::create_park(db).await?;
    let user = factory::user::create_user(db, Some(park.id)).await?;
    let customer = factory::customer::create_customer(db).await?;

    let repo = BookingRepository::new(db);
    let pickup_time = Utc::now() + Duration::hours(2);
    let result = repo
        .create(
            CreateBookingParams {
                park_id: park.id,
                customer_id: customer.id,
                driver_id: None,
                vehicle_id: None,
                created_by: user.id,
                pickup_address: "1 Main Street".to_string(),
                dropoff_address: "2 Harbor Avenue".to_string(),
                pickup_time,
                fare: None,
                notes: Some("ring the bell".to_string()),
            },
            "BK-20260824-0001".to_string(),
            BookingStatus::Pending,
        )
        .await;

    assert!(result.is_ok());
    let booking = result.unwrap();
    assert_eq!(booking.booking_number, "BK-20260824-0001");
    assert_eq!(booking.status, BookingStatus::Pending);
    assert!(booking.driver_id.is_none());
    assert_eq!(booking.notes.as_deref(), Some("ring the bell"));

    Ok(())
}

/// Tests that the booking number unique constraint is enforced.
///
/// Verifies that inserting a second booking under an already-issued number
/// fails at the database level.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_booking_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::park::create_park(db).await?;
    let user = factory::user::create_user(db, Some(park.id)).await?;
    let customer = factory::customer::create_customer(db).await?;

    let repo = BookingRepository::new(db);
    let params = CreateBookingParams {
        park_id: park.id,
        customer_id: customer.id,
        driver_id: None,
        vehicle_id: None,
        created_by: user.id,
        pickup_address: "1 Main Street".to_string(),
        dropoff_address: "2 Harbor Avenue".to_string(),
        pickup_time: Utc::now() + Duration::hours(2),
        fare: None,
        notes: None,
    };

    repo.create(
        params.clone(),
        "BK-20260824-0001".to_string(),
        BookingStatus::Pending,
    )
    .await?;

    let result = repo
        .create(
            params,
            "BK-20260824-0001".to_string(),
            BookingStatus::Pending,
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
