use super::*;

/// Tests that the search term matches either the name or the phone number.
///
/// Expected: one hit by name, one hit by phone, the third customer excluded
#[tokio::test]
async fn search_matches_name_or_phone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::customer::CustomerFactory::new(db)
        .name("Greta Smith")
        .phone("+15550001111")
        .build()
        .await?;
    factory::customer::CustomerFactory::new(db)
        .name("Hans Keller")
        .phone("+15559990000")
        .build()
        .await?;
    factory::customer::CustomerFactory::new(db)
        .name("Ivan Petrov")
        .phone("+15552224444")
        .build()
        .await?;

    let repo = CustomerRepository::new(db);

    let (by_name, total) = repo.get_all_paginated(Some("Greta"), 0, 10).await?;
    assert_eq!(total, 1);
    assert_eq!(by_name[0].name, "Greta Smith");

    let (by_phone, total) = repo.get_all_paginated(Some("9990"), 0, 10).await?;
    assert_eq!(total, 1);
    assert_eq!(by_phone[0].name, "Hans Keller");

    Ok(())
}

/// Tests listing without a search term.
///
/// Expected: every customer, ordered by name
#[tokio::test]
async fn lists_all_customers_alphabetically() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::customer::CustomerFactory::new(db).name("Zoe").build().await?;
    factory::customer::CustomerFactory::new(db).name("Abe").build().await?;

    let repo = CustomerRepository::new(db);
    let (customers, total) = repo.get_all_paginated(None, 0, 10).await?;

    assert_eq!(total, 2);
    assert_eq!(customers[0].name, "Abe");
    assert_eq!(customers[1].name, "Zoe");

    Ok(())
}
