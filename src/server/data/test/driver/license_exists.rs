use super::*;

/// Tests license lookup for an existing number.
///
/// Expected: Ok(true) for a registered license, Ok(false) otherwise
#[tokio::test]
async fn detects_registered_license() -> Result<(), DbErr> {
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
    assert!(repo.license_exists(&driver.license_number, None).await?);
    assert!(!repo.license_exists("DL-00000", None).await?);

    Ok(())
}

/// Tests that a driver's own license is ignored when excluded.
///
/// Updates that keep the existing number must not trip the uniqueness check
/// against the driver being updated.
///
/// Expected: Ok(false) when the owning driver is excluded
#[tokio::test]
async fn excluded_driver_does_not_count() -> Result<(), DbErr> {
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
    assert!(
        !repo
            .license_exists(&driver.license_number, Some(driver.id))
            .await?
    );

    Ok(())
}
