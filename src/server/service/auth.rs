//! Authentication and password reset business logic.
//!
//! Login verifies credentials against the stored argon2 hash. Password resets
//! use short-lived one-time codes: requesting a reset invalidates any earlier
//! codes, and a code can only be redeemed once before it expires.

use chrono::Duration;
use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{password_reset_otp::PasswordResetOtpRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    service::password,
};

/// Minutes a reset code stays redeemable after being issued.
pub const RESET_CODE_TTL_MINUTES: i64 = 10;

pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies an email/password pair and returns the account on success.
    ///
    /// Unknown emails and wrong passwords produce the same error so the
    /// endpoint cannot be used to probe which emails have accounts.
    /// Deactivated accounts are rejected even with correct credentials.
    pub async fn login(
        &self,
        email: &str,
        raw_password: &str,
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify_password(raw_password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.active {
            return Err(AuthError::AccountDisabled(user.id).into());
        }

        Ok(user)
    }

    /// Issues a fresh reset code for the account behind `email`.
    ///
    /// Returns `None` when no active account matches; the endpoint responds
    /// identically either way. Issuing a new code invalidates all earlier
    /// ones, so only the latest code can be redeemed.
    pub async fn request_password_reset(&self, email: &str) -> Result<Option<()>, AppError> {
        let user_repo = UserRepository::new(self.db);
        let otp_repo = PasswordResetOtpRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email).await? else {
            return Ok(None);
        };
        if !user.active {
            return Ok(None);
        }

        otp_repo.invalidate_for_user(user.id).await?;

        let code = generate_reset_code();
        let code_hash = password::hash_password(&code)?;
        let expires_at = chrono::Utc::now() + Duration::minutes(RESET_CODE_TTL_MINUTES);

        otp_repo.create(user.id, code_hash, expires_at).await?;

        // No outbound mail or SMS channel is wired up; operators read the
        // code from the log and relay it out of band.
        tracing::info!("Password reset code for user {}: {}", user.id, code);

        Ok(Some(()))
    }

    /// Redeems a reset code and replaces the account password.
    ///
    /// The code must be the most recently issued one, unconsumed and within
    /// its lifetime. All failure modes map to the same invalid-code error.
    pub async fn confirm_password_reset(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);
        let otp_repo = PasswordResetOtpRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email).await? else {
            return Err(AuthError::InvalidResetCode.into());
        };

        let candidates = otp_repo
            .find_active_for_user(user.id, chrono::Utc::now())
            .await?;

        let mut matched = None;
        for candidate in candidates {
            if password::verify_password(code, &candidate.code_hash)? {
                matched = Some(candidate);
                break;
            }
        }

        let Some(otp) = matched else {
            return Err(AuthError::InvalidResetCode.into());
        };

        otp_repo.consume(otp.id).await?;

        let new_hash = password::hash_password(new_password)?;
        let params = crate::server::model::user::UpdateUserParams {
            id: user.id,
            park_id: None,
            name: None,
            email: None,
            password: None,
            role: None,
            phone: None,
            active: None,
        };
        user_repo.update(params, Some(new_hash)).await?;

        tracing::info!("Password reset completed for user {}", user.id);

        Ok(())
    }
}

/// Generates a six digit reset code, zero-padded.
fn generate_reset_code() -> String {
    let n: u32 = rand::rng().random_range(0..1_000_000);
    format!("{:06}", n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_codes_are_six_digits() {
        for _ in 0..100 {
            let code = generate_reset_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
