use super::*;

/// Tests requesting a reset for an email with no account.
///
/// Expected: Ok(None), no code issued
#[tokio::test]
async fn unknown_email_issues_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let result = service.request_password_reset("nobody@example.com").await?;

    assert_eq!(result, None);

    Ok(())
}

/// Tests requesting a reset for a deactivated account.
///
/// Expected: Ok(None), no code issued
#[tokio::test]
async fn inactive_account_issues_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db, None)
        .email("gone@example.com")
        .active(false)
        .build()
        .await?;

    let service = AuthService::new(db);
    let result = service.request_password_reset("gone@example.com").await?;

    assert_eq!(result, None);

    let otp_repo = PasswordResetOtpRepository::new(db);
    let active = otp_repo.find_active_for_user(user.id, Utc::now()).await?;
    assert!(active.is_empty());

    Ok(())
}

/// Tests that a second request invalidates the first code.
///
/// Expected: exactly one redeemable code after two requests
#[tokio::test]
async fn second_request_supersedes_first_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db, None)
        .email("again@example.com")
        .build()
        .await?;

    let service = AuthService::new(db);
    service.request_password_reset("again@example.com").await?;
    service.request_password_reset("again@example.com").await?;

    let otp_repo = PasswordResetOtpRepository::new(db);
    let active = otp_repo.find_active_for_user(user.id, Utc::now()).await?;
    assert_eq!(active.len(), 1);

    Ok(())
}
