mod model;
mod server;

use crate::server::{
    config::Config,
    error::AppError,
    realtime::hub::RealtimeHub,
    scheduler::otp_purge,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;

    startup::check_for_admin(&db, &config).await?;

    let scheduler_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = otp_purge::start_scheduler(scheduler_db).await {
            tracing::error!("Password reset cleanup scheduler error: {}", e);
        }
    });

    let hub = RealtimeHub::new();

    let router = server::router::router()
        .with_state(AppState::new(db, hub))
        .layer(session);

    tracing::info!("Listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to bind {}: {}", config.bind_addr, e)))?;

    axum::serve(listener, router)
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    Ok(())
}
