use super::*;

/// Tests a partial update that leaves the password alone.
///
/// Expected: Ok(Some) with changed fields updated and hash untouched
#[tokio::test]
async fn updates_fields_without_touching_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Park)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db, None)
        .password_hash("original-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            UpdateUserParams {
                id: user.id,
                park_id: None,
                name: Some("Renamed".to_string()),
                email: None,
                password: None,
                role: Some(UserRole::Manager),
                phone: None,
                active: Some(false),
            },
            None,
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.role, UserRole::Manager);
    assert!(!updated.active);
    assert_eq!(updated.password_hash, "original-hash");

    Ok(())
}

/// Tests replacing the stored password hash.
///
/// Expected: Ok(Some) with the new hash stored
#[tokio::test]
async fn replaces_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Park)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db, None)
        .password_hash("original-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            UpdateUserParams {
                id: user.id,
                park_id: None,
                name: None,
                email: None,
                password: None,
                role: None,
                phone: None,
                active: None,
            },
            Some("replacement-hash".to_string()),
        )
        .await?
        .unwrap();

    assert_eq!(updated.password_hash, "replacement-hash");

    Ok(())
}

/// Tests the missing user case.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Park)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update(
            UpdateUserParams {
                id: 9999,
                park_id: None,
                name: Some("Ghost".to_string()),
                email: None,
                password: None,
                role: None,
                phone: None,
                active: None,
            },
            None,
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
