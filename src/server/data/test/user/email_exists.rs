use super::*;

/// Tests email uniqueness lookup.
///
/// Expected: Ok(true) for a taken address, Ok(false) otherwise
#[tokio::test]
async fn detects_taken_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Park)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db, None).await?;

    let repo = UserRepository::new(db);
    assert!(repo.email_exists(&user.email, None).await?);
    assert!(!repo.email_exists("free@example.com", None).await?);

    Ok(())
}

/// Tests that a user's own address is ignored when excluded.
///
/// Expected: Ok(false) when the owning user is excluded
#[tokio::test]
async fn excluded_user_does_not_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Park)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db, None).await?;

    let repo = UserRepository::new(db);
    assert!(!repo.email_exists(&user.email, Some(user.id)).await?);

    Ok(())
}
