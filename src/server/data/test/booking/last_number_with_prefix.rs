use super::*;

/// Tests that no number is returned for an unused prefix.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unused_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);
    let result = repo.last_number_with_prefix("BK-20260824-").await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that the highest number under the prefix is returned.
///
/// Verifies that bookings under other date prefixes are ignored and the
/// numerically highest number under the requested prefix wins.
///
/// Expected: Ok(Some) with the highest number of the day
#[tokio::test]
async fn returns_highest_number_for_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (park, user, customer, _) =
        test_utils::factory::helpers::create_booking_with_dependencies(db).await?;

    for number in ["BK-20260824-0001", "BK-20260824-0012", "BK-20260823-0099"] {
        factory::booking::BookingFactory::new(db, park.id, customer.id, user.id)
            .booking_number(number)
            .build()
            .await?;
    }

    let repo = BookingRepository::new(db);
    let result = repo.last_number_with_prefix("BK-20260824-").await?;

    assert_eq!(result.as_deref(), Some("BK-20260824-0012"));

    Ok(())
}

/// Tests the sequence past the zero-padded width.
///
/// "9999" sorts above "10000" as a string; the numeric comparison must still
/// pick "10000" so the day's sequence keeps advancing.
///
/// Expected: Ok(Some) with the five digit number
#[tokio::test]
async fn numeric_suffix_beats_string_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (park, user, customer, _) =
        test_utils::factory::helpers::create_booking_with_dependencies(db).await?;

    for number in ["BK-20260824-9999", "BK-20260824-10000"] {
        factory::booking::BookingFactory::new(db, park.id, customer.id, user.id)
            .booking_number(number)
            .build()
            .await?;
    }

    let repo = BookingRepository::new(db);
    let result = repo.last_number_with_prefix("BK-20260824-").await?;

    assert_eq!(result.as_deref(), Some("BK-20260824-10000"));

    Ok(())
}
