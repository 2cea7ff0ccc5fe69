use super::*;

/// Tests creating a new driver.
///
/// Verifies that the repository persists the roster details and that new
/// drivers always start in the available status.
///
/// Expected: Ok with driver created as available
#[tokio::test]
async fn creates_available_driver() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Park)
        .with_table(entity::prelude::Driver)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::park::create_park(db).await?;

    let repo = DriverRepository::new(db);
    let result = repo
        .create(CreateDriverParams {
            park_id: park.id,
            first_name: "Maya".to_string(),
            last_name: "Okafor".to_string(),
            license_number: "DL-77001".to_string(),
            phone: "+15550001111".to_string(),
            email: None,
        })
        .await;

    assert!(result.is_ok());
    let driver = result.unwrap();
    assert_eq!(driver.first_name, "Maya");
    assert_eq!(driver.license_number, "DL-77001");
    assert_eq!(driver.status, DriverStatus::Available);

    Ok(())
}
