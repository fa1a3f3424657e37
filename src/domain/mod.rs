pub mod config_format;
pub mod config_value;
pub mod env_record;
pub mod error;
pub mod paths;

pub use config_format::{ConfigFormat, DataFormat};
pub use config_value::ConfigValue;
pub use env_record::EnvRecord;
pub use error::AppError;
