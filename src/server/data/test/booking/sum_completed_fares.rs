use super::*;

/// Tests summing fares over a pickup-time window.
///
/// Two completed bookings fall inside the window, one completed booking is
/// outside it, and a cancelled booking inside the window carries a fare that
/// must not count.
///
/// Expected: 30.0
#[tokio::test]
async fn sums_completed_fares_in_window() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::park::create_park(db).await?;
    let user = factory::user::create_user(db, Some(park.id)).await?;
    let customer = factory::customer::create_customer(db).await?;

    let now = Utc::now();
    let in_window = now + Duration::hours(1);
    let outside = now + Duration::days(2);

    factory::booking::BookingFactory::new(db, park.id, customer.id, user.id)
        .status(BookingStatus::Completed)
        .pickup_time(in_window)
        .fare(Some(12.5))
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, park.id, customer.id, user.id)
        .status(BookingStatus::Completed)
        .pickup_time(in_window)
        .fare(Some(17.5))
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, park.id, customer.id, user.id)
        .status(BookingStatus::Completed)
        .pickup_time(outside)
        .fare(Some(99.0))
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, park.id, customer.id, user.id)
        .status(BookingStatus::Cancelled)
        .pickup_time(in_window)
        .fare(Some(50.0))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let total = repo
        .sum_completed_fares(park.id, now, now + Duration::days(1))
        .await?;

    assert!((total - 30.0).abs() < f64::EPSILON);

    Ok(())
}

/// Tests summing when no completed bookings match.
///
/// Expected: 0.0
#[tokio::test]
async fn empty_window_sums_to_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::park::create_park(db).await?;

    let repo = BookingRepository::new(db);
    let total = repo
        .sum_completed_fares(park.id, Utc::now(), Utc::now() + Duration::days(1))
        .await?;

    assert_eq!(total, 0.0);

    Ok(())
}
