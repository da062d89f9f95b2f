use crate::error::{config::ConfigError, AppError};

pub struct Config {
    pub database_url: String,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// Reads a `.env` file first when one is present so local development does
    /// not require exporting variables by hand.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
        })
    }
}
