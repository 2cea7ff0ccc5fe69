use super::*;

/// Tests inserting a new key.
///
/// Expected: Ok with the setting created
#[tokio::test]
async fn inserts_new_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Park)
        .with_table(entity::prelude::Setting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::park::create_park(db).await?;

    let repo = SettingRepository::new(db);
    let setting = repo
        .upsert(park.id, "base_fare", "5.00".to_string())
        .await?;

    assert_eq!(setting.key, "base_fare");
    assert_eq!(setting.value, "5.00");

    Ok(())
}

/// Tests replacing the value of an existing key.
///
/// The second upsert must update the row in place rather than creating a
/// duplicate.
///
/// Expected: Ok with one row holding the new value
#[tokio::test]
async fn replaces_existing_value() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Park)
        .with_table(entity::prelude::Setting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::park::create_park(db).await?;

    let repo = SettingRepository::new(db);
    let original = repo
        .upsert(park.id, "base_fare", "5.00".to_string())
        .await?;
    let replaced = repo
        .upsert(park.id, "base_fare", "6.50".to_string())
        .await?;

    assert_eq!(replaced.id, original.id);
    assert_eq!(replaced.value, "6.50");
    assert_eq!(repo.get_for_park(park.id).await?.len(), 1);

    Ok(())
}

/// Tests that the same key can exist in different parks.
///
/// Expected: Ok with independent values per park
#[tokio::test]
async fn keys_are_scoped_per_park() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Park)
        .with_table(entity::prelude::Setting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::park::create_park(db).await?;
    let other_park = factory::park::create_park(db).await?;

    let repo = SettingRepository::new(db);
    repo.upsert(park.id, "base_fare", "5.00".to_string()).await?;
    repo.upsert(other_park.id, "base_fare", "9.00".to_string())
        .await?;

    let first = repo.get(park.id, "base_fare").await?.unwrap();
    let second = repo.get(other_park.id, "base_fare").await?.unwrap();

    assert_eq!(first.value, "5.00");
    assert_eq!(second.value, "9.00");

    Ok(())
}
