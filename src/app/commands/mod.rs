pub mod build;
pub mod env;
