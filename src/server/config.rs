use crate::server::error::config::ConfigError;

/// Runtime configuration, read once from the environment at startup.
pub struct Config {
    /// Address the HTTP listener binds to.
    pub host: String,
    /// Port the HTTP listener binds to.
    pub port: u16,
    /// Database connection string.
    pub database_url: String,
    /// ID of the user that favorite operations act on behalf of.
    ///
    /// There is no login flow; this stands in for an authenticated session until
    /// one exists.
    pub current_user_id: i32,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// Every variable has a default, so this only fails when a value is present
    /// but cannot be parsed into the expected type.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env_or("HOST", "0.0.0.0"),
            port: parse_env_or("PORT", 5000)?,
            database_url: env_or("DATABASE_URL", "sqlite://starwars_blog.db?mode=rwc"),
            current_user_id: parse_env_or("CURRENT_USER_ID", 1)?,
        })
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(var) {
        Ok(value) => value.parse().map_err(|err: T::Err| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: err.to_string(),
        }),
        Err(_) => Ok(default),
    }
}
