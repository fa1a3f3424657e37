mod config_evaluator;
mod env_file_writer;
mod script_runner;

pub use config_evaluator::ConfigEvaluator;
pub use env_file_writer::EnvFileWriter;
pub use script_runner::ScriptRunner;
