mod config;
mod error;
mod gesture_config;
mod log_level;
mod logging_config;
mod storage_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use gesture_config::GestureConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;
pub use validation_config::ValidationConfig;

pub const CONFIG_DIR_ENV: &str = "BASKET_CONFIG_DIR";
pub const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR_NAME: &str = "my-smart-basket";

const DEFAULT_STORAGE_DIRECTORY: &str = "storage";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 80.0;
pub const MIN_SWIPE_THRESHOLD_PX: f64 = 1.0;
pub const MAX_SWIPE_THRESHOLD_PX: f64 = 1000.0;

pub const DEFAULT_MIN_PHONE_DIGITS: usize = 7;
pub const MIN_MIN_PHONE_DIGITS: usize = 1;
pub const MAX_MIN_PHONE_DIGITS: usize = 20;

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;
pub const MIN_MIN_PASSWORD_LENGTH: usize = 1;
pub const MAX_MIN_PASSWORD_LENGTH: usize = 128;
