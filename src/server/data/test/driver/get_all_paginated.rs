use super::*;

/// Tests filtering the roster by park and duty status.
///
/// Expected: Ok with only matching drivers returned
#[tokio::test]
async fn filters_by_park_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Park)
        .with_table(entity::prelude::Driver)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::park::create_park(db).await?;
    let other_park = factory::park::create_park(db).await?;

    let available = factory::driver::create_driver(db, park.id).await?;
    factory::driver::DriverFactory::new(db, park.id)
        .status(DriverStatus::OffDuty)
        .build()
        .await?;
    factory::driver::create_driver(db, other_park.id).await?;

    let repo = DriverRepository::new(db);
    let (drivers, total) = repo
        .get_all_paginated(
            DriverFilter {
                park_id: Some(park.id),
                status: Some(DriverStatus::Available),
            },
            0,
            10,
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(drivers[0].id, available.id);

    Ok(())
}

/// Tests alphabetical ordering by last name.
///
/// Expected: Ok with drivers sorted by last name ascending
#[tokio::test]
async fn orders_by_last_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Park)
        .with_table(entity::prelude::Driver)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::park::create_park(db).await?;
    for last_name in ["Zhou", "Adeyemi", "Moreau"] {
        factory::driver::DriverFactory::new(db, park.id)
            .last_name(last_name)
            .build()
            .await?;
    }

    let repo = DriverRepository::new(db);
    let (drivers, _) = repo
        .get_all_paginated(DriverFilter::default(), 0, 10)
        .await?;

    let names: Vec<&str> = drivers.iter().map(|d| d.last_name.as_str()).collect();
    assert_eq!(names, vec!["Adeyemi", "Moreau", "Zhou"]);

    Ok(())
}
