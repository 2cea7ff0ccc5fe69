use super::*;

/// Tests filtering by park and status together.
///
/// Expected: Ok with only the matching booking returned
#[tokio::test]
async fn filters_by_park_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (park, user, customer, _) =
        test_utils::factory::helpers::create_booking_with_dependencies(db).await?;
    let other_park = factory::park::create_park(db).await?;

    let wanted = factory::booking::BookingFactory::new(db, park.id, customer.id, user.id)
        .status(BookingStatus::Completed)
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, park.id, customer.id, user.id)
        .status(BookingStatus::Cancelled)
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, other_park.id, customer.id, user.id)
        .status(BookingStatus::Completed)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let (bookings, total) = repo
        .get_all_paginated(
            BookingFilter {
                park_id: Some(park.id),
                status: Some(BookingStatus::Completed),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, wanted.id);

    Ok(())
}

/// Tests the pickup time window filter.
///
/// The window is half-open: `from` is inclusive, `to` is exclusive.
///
/// Expected: Ok with only bookings inside the window
#[tokio::test]
async fn filters_by_pickup_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (park, user, customer, _) =
        test_utils::factory::helpers::create_booking_with_dependencies(db).await?;

    let base = Utc::now();
    let inside = factory::booking::BookingFactory::new(db, park.id, customer.id, user.id)
        .pickup_time(base + Duration::hours(1))
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, park.id, customer.id, user.id)
        .pickup_time(base + Duration::hours(5))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let (bookings, _) = repo
        .get_all_paginated(
            BookingFilter {
                from: Some(base),
                to: Some(base + Duration::hours(2)),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;

    assert_eq!(bookings.len(), 2); // the helper booking and `inside`
    assert!(bookings.iter().any(|b| b.id == inside.id));

    Ok(())
}

/// Tests ordering and page sizes.
///
/// Bookings come back newest pickup first and paginate with an accurate item
/// total.
///
/// Expected: Ok with descending pickup times across pages
#[tokio::test]
async fn orders_newest_pickup_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::park::create_park(db).await?;
    let user = factory::user::create_user(db, Some(park.id)).await?;
    let customer = factory::customer::create_customer(db).await?;

    let base = Utc::now();
    for offset in 1..=5 {
        factory::booking::BookingFactory::new(db, park.id, customer.id, user.id)
            .pickup_time(base + Duration::hours(offset))
            .build()
            .await?;
    }

    let repo = BookingRepository::new(db);
    let (first_page, total) = repo
        .get_all_paginated(BookingFilter::default(), 0, 2)
        .await?;

    assert_eq!(total, 5);
    assert_eq!(first_page.len(), 2);
    assert!(first_page[0].pickup_time > first_page[1].pickup_time);

    let (last_page, _) = repo
        .get_all_paginated(BookingFilter::default(), 2, 2)
        .await?;
    assert_eq!(last_page.len(), 1);

    Ok(())
}
