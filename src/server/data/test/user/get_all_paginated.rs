use super::*;

/// Tests pagination with multiple pages.
///
/// Verifies that the repository returns the requested subset along with an
/// accurate total item count.
///
/// Expected: Ok with correct page of users and total count
#[tokio::test]
async fn returns_correct_page_of_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Park)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::user::create_user(db, None).await?;
    }

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_all_paginated(None, 0, 2).await?;

    assert_eq!(users.len(), 2);
    assert_eq!(total, 5);

    let (users, _) = repo.get_all_paginated(None, 2, 2).await?;
    assert_eq!(users.len(), 1);

    Ok(())
}

/// Tests the park scope filter.
///
/// Expected: Ok with only the park's staff returned
#[tokio::test]
async fn restricts_to_park() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Park)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::park::create_park(db).await?;
    let other_park = factory::park::create_park(db).await?;

    let scoped = factory::user::create_user(db, Some(park.id)).await?;
    factory::user::create_user(db, Some(other_park.id)).await?;
    factory::user::create_user(db, None).await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_all_paginated(Some(park.id), 0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(users[0].id, scoped.id);

    Ok(())
}
