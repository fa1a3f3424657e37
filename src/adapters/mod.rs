pub mod config_filesystem;
pub mod env_file_atomic;
pub mod node_module_evaluator;
pub mod script_process;
pub mod static_config_reader;

pub use config_filesystem::FilesystemConfigEvaluator;
pub use env_file_atomic::AtomicEnvFileWriter;
pub use node_module_evaluator::NodeModuleEvaluator;
pub use script_process::ProcessScriptRunner;
