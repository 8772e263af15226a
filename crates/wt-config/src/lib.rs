mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod push_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use push_config::PushConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "worktrack.db";
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_GCM_URL: &str = "https://fcm.googleapis.com/fcm/send";
const MIN_SIGNING_KEY_CHARS: usize = 32;

#[cfg(test)]
mod tests;
