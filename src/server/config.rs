use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    /// Credentials used to seed the first admin account when the user
    /// table contains no admin. Both must be set together.
    pub bootstrap_admin_email: Option<String>,
    pub bootstrap_admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bootstrap_admin_email = std::env::var("ADMIN_EMAIL").ok();
        let bootstrap_admin_password = std::env::var("ADMIN_PASSWORD").ok();

        if bootstrap_admin_email.is_some() != bootstrap_admin_password.is_some() {
            return Err(ConfigError::InvalidEnvVar(
                "ADMIN_EMAIL and ADMIN_PASSWORD must be set together".to_string(),
            )
            .into());
        }

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            bootstrap_admin_email,
            bootstrap_admin_password,
        })
    }
}
