use super::*;

/// Tests the duty status transition used by the booking lifecycle.
///
/// Expected: Ok with the driver's stored status changed
#[tokio::test]
async fn updates_duty_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Park)
        .with_table(entity::prelude::Driver)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::park::create_park(db).await?;
    let driver = factory::driver::create_driver(db, park.id).await?;

    let repo = DriverRepository::new(db);
    repo.set_status(driver.id, DriverStatus::OnTrip).await?;

    let stored = repo.get_by_id(driver.id).await?.unwrap();
    assert_eq!(stored.status, DriverStatus::OnTrip);

    repo.set_status(driver.id, DriverStatus::Available).await?;
    let stored = repo.get_by_id(driver.id).await?.unwrap();
    assert_eq!(stored.status, DriverStatus::Available);

    Ok(())
}
