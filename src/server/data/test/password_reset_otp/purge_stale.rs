use super::*;

/// Tests the cleanup sweep run by the scheduler.
///
/// Expired and consumed codes are deleted; live codes survive.
///
/// Expected: Ok(2) rows removed, live code still usable
#[tokio::test]
async fn removes_expired_and_consumed_codes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db, None).await?;
    let now = Utc::now();

    let repo = PasswordResetOtpRepository::new(db);
    repo.create(user.id, "hash-expired".to_string(), now - Duration::minutes(1))
        .await?;
    let consumed = repo
        .create(user.id, "hash-consumed".to_string(), now + Duration::minutes(10))
        .await?;
    repo.consume(consumed.id).await?;
    let live = repo
        .create(user.id, "hash-live".to_string(), now + Duration::minutes(10))
        .await?;

    let purged = repo.purge_stale(now).await?;

    assert_eq!(purged, 2);
    let remaining = repo.find_active_for_user(user.id, now).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, live.id);

    Ok(())
}

/// Tests the sweep on an empty table.
///
/// Expected: Ok(0)
#[tokio::test]
async fn no_op_when_nothing_stale() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PasswordResetOtpRepository::new(db);
    let purged = repo.purge_stale(Utc::now()).await?;

    assert_eq!(purged, 0);

    Ok(())
}
