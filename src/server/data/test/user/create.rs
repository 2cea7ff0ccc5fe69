use super::*;

/// Tests creating a staff account.
///
/// Verifies that the account is stored with the supplied hash, starts
/// active, and keeps its park scope.
///
/// Expected: Ok with active user created
#[tokio::test]
async fn creates_active_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Park)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::park::create_park(db).await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(
            CreateUserParams {
                park_id: Some(park.id),
                name: "Dispatcher One".to_string(),
                email: "dispatch1@example.com".to_string(),
                password: "irrelevant-here".to_string(),
                role: UserRole::Dispatcher,
                phone: None,
            },
            "hashed-password".to_string(),
        )
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.email, "dispatch1@example.com");
    assert_eq!(user.password_hash, "hashed-password");
    assert_eq!(user.park_id, Some(park.id));
    assert!(user.active);

    Ok(())
}
