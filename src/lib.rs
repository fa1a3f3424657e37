//! taku: launch the build script and export `taku.config` as a sourceable env file.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{
    BuildOptions, EnvOptions, EnvOutcome, Settings, launch, launch_at, write_env, write_env_at,
};
pub use domain::{AppError, ConfigValue, EnvRecord};
