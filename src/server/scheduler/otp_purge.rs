use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{data::password_reset_otp::PasswordResetOtpRepository, error::AppError};

/// Starts the password reset code cleanup scheduler.
///
/// Runs every five minutes and deletes reset codes that have expired or have
/// already been consumed. Expiry is also enforced at verification time, so
/// this job only keeps the table from growing without bound.
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    let job = Job::new_async("0 */5 * * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = purge_stale_codes(&db).await {
                tracing::error!("Error purging stale password reset codes: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Password reset code cleanup scheduler started");

    Ok(())
}

async fn purge_stale_codes(db: &DatabaseConnection) -> Result<(), AppError> {
    let repository = PasswordResetOtpRepository::new(db);
    let purged = repository.purge_stale(Utc::now()).await?;

    if purged > 0 {
        tracing::debug!("Purged {} stale password reset code(s)", purged);
    }

    Ok(())
}
