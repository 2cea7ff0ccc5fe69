use super::*;

/// Tests that expired and consumed codes are filtered out.
///
/// Expected: Ok with only the live code returned
#[tokio::test]
async fn skips_expired_and_consumed_codes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db, None).await?;
    let now = Utc::now();

    let repo = PasswordResetOtpRepository::new(db);

    // Expired code
    repo.create(user.id, "hash-expired".to_string(), now - Duration::minutes(1))
        .await?;
    // Consumed code
    let consumed = repo
        .create(user.id, "hash-consumed".to_string(), now + Duration::minutes(10))
        .await?;
    repo.consume(consumed.id).await?;
    // Live code
    let live = repo
        .create(user.id, "hash-live".to_string(), now + Duration::minutes(10))
        .await?;

    let active = repo.find_active_for_user(user.id, now).await?;

    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, live.id);

    Ok(())
}

/// Tests that invalidation marks every outstanding code consumed.
///
/// Issuing a new code must leave only that code usable; all prior codes are
/// swept in one update.
///
/// Expected: Ok(2) rows invalidated, no active codes left
#[tokio::test]
async fn invalidate_sweeps_outstanding_codes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db, None).await?;
    let now = Utc::now();

    let repo = PasswordResetOtpRepository::new(db);
    repo.create(user.id, "hash-one".to_string(), now + Duration::minutes(10))
        .await?;
    repo.create(user.id, "hash-two".to_string(), now + Duration::minutes(10))
        .await?;

    let invalidated = repo.invalidate_for_user(user.id).await?;

    assert_eq!(invalidated, 2);
    assert!(repo.find_active_for_user(user.id, now).await?.is_empty());

    Ok(())
}

/// Tests that codes of other users are untouched by user-scoped queries.
///
/// Expected: Ok with only the requested user's codes returned
#[tokio::test]
async fn scoped_to_requested_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::create_user(db, None).await?;
    let second = factory::user::create_user(db, None).await?;
    let now = Utc::now();

    let repo = PasswordResetOtpRepository::new(db);
    repo.create(first.id, "hash-first".to_string(), now + Duration::minutes(10))
        .await?;
    repo.create(second.id, "hash-second".to_string(), now + Duration::minutes(10))
        .await?;

    let active = repo.find_active_for_user(first.id, now).await?;

    assert_eq!(active.len(), 1);
    assert_eq!(active[0].user_id, first.id);

    Ok(())
}
