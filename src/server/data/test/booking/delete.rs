use super::*;

/// Tests deleting a booking.
///
/// Expected: Ok(1) and the booking is gone
#[tokio::test]
async fn removes_the_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, booking) =
        test_utils::factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let deleted = repo.delete(booking.id).await?;

    assert_eq!(deleted, 1);
    assert!(repo.get_by_id(booking.id).await?.is_none());

    Ok(())
}

/// Tests deleting a missing booking.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_missing_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);
    let deleted = repo.delete(9999).await?;

    assert_eq!(deleted, 0);

    Ok(())
}
