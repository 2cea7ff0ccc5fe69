use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{config::Config, error::AppError, service::password};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is
/// up-to-date before the application accesses the database.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the application database.
///
/// Sessions live in a dedicated SQLite table managed by the store; they
/// expire after seven days of inactivity.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Initializes the tracing subscriber with env-filter support.
///
/// Defaults to `info` for the application when `RUST_LOG` is unset.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Seeds the first admin account when none exists.
///
/// If the user table has no admin and bootstrap credentials are configured,
/// an active admin user is created from them. Without credentials only a
/// warning is logged; the API is unusable until an admin exists.
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let existing = entity::prelude::User::find()
        .filter(entity::user::Column::Role.eq(entity::user::UserRole::Admin))
        .one(db)
        .await?;

    if existing.is_some() {
        return Ok(());
    }

    let (Some(email), Some(raw_password)) = (
        config.bootstrap_admin_email.as_deref(),
        config.bootstrap_admin_password.as_deref(),
    ) else {
        tracing::warn!(
            "No admin user exists and ADMIN_EMAIL/ADMIN_PASSWORD are unset; \
             the API has no usable account"
        );
        return Ok(());
    };

    let now = chrono::Utc::now();
    let admin = entity::user::ActiveModel {
        park_id: ActiveValue::Set(None),
        name: ActiveValue::Set("Administrator".to_string()),
        email: ActiveValue::Set(email.to_string()),
        password_hash: ActiveValue::Set(password::hash_password(raw_password)?),
        role: ActiveValue::Set(entity::user::UserRole::Admin),
        phone: ActiveValue::Set(None),
        active: ActiveValue::Set(true),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::info!("Seeded bootstrap admin user {} ({})", admin.id, admin.email);

    Ok(())
}
