use thiserror::Error;

/// Errors raised while loading application configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing environment variable '{0}'")]
    MissingEnvVar(String),
}
