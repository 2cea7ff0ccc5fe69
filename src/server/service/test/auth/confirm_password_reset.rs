use super::*;

/// Tests redeeming a valid reset code.
///
/// The code is seeded directly as an argon2 hash so the plaintext is known.
///
/// Expected: Ok, and the new password logs in afterwards
#[tokio::test]
async fn redeems_code_and_replaces_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db, None)
        .email("resetme@example.com")
        .build()
        .await?;

    let otp_repo = PasswordResetOtpRepository::new(db);
    let code_hash = password::hash_password("123456")?;
    otp_repo
        .create(user.id, code_hash, Utc::now() + Duration::minutes(10))
        .await?;

    let service = AuthService::new(db);
    service
        .confirm_password_reset("resetme@example.com", "123456", "new-password")
        .await?;

    let logged_in = service.login("resetme@example.com", "new-password").await?;
    assert_eq!(logged_in.id, user.id);

    Ok(())
}

/// Tests that a reset code only works once.
///
/// Expected: first confirm Ok, second confirm Err(AuthErr)
#[tokio::test]
async fn code_is_single_use() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db, None)
        .email("once@example.com")
        .build()
        .await?;

    let otp_repo = PasswordResetOtpRepository::new(db);
    let code_hash = password::hash_password("123456")?;
    otp_repo
        .create(user.id, code_hash, Utc::now() + Duration::minutes(10))
        .await?;

    let service = AuthService::new(db);
    service
        .confirm_password_reset("once@example.com", "123456", "first-password")
        .await?;

    let second = service
        .confirm_password_reset("once@example.com", "123456", "second-password")
        .await;
    assert!(matches!(second, Err(AppError::AuthErr(_))));

    Ok(())
}

/// Tests redeeming a code past its expiry.
///
/// Expected: Err(AuthErr)
#[tokio::test]
async fn rejects_expired_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db, None)
        .email("late@example.com")
        .build()
        .await?;

    let otp_repo = PasswordResetOtpRepository::new(db);
    let code_hash = password::hash_password("123456")?;
    otp_repo
        .create(user.id, code_hash, Utc::now() - Duration::minutes(1))
        .await?;

    let service = AuthService::new(db);
    let result = service
        .confirm_password_reset("late@example.com", "123456", "new-password")
        .await;

    assert!(matches!(result, Err(AppError::AuthErr(_))));

    Ok(())
}

/// Tests redeeming the wrong code for an account with an outstanding one.
///
/// Expected: Err(AuthErr), and the correct code still works afterwards
#[tokio::test]
async fn rejects_wrong_code_without_consuming() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db, None)
        .email("guess@example.com")
        .build()
        .await?;

    let otp_repo = PasswordResetOtpRepository::new(db);
    let code_hash = password::hash_password("123456")?;
    otp_repo
        .create(user.id, code_hash, Utc::now() + Duration::minutes(10))
        .await?;

    let service = AuthService::new(db);
    let wrong = service
        .confirm_password_reset("guess@example.com", "654321", "new-password")
        .await;
    assert!(matches!(wrong, Err(AppError::AuthErr(_))));

    service
        .confirm_password_reset("guess@example.com", "123456", "new-password")
        .await?;

    Ok(())
}
