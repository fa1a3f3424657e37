//! CLI Adapter.

mod build;
mod env;

use std::path::PathBuf;

use crate::domain::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "taku")]
#[command(version)]
#[command(
    about = "Launch the build script and export taku.config as a sourceable env file",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract frontend/backend build settings from taku.config into an env file
    #[clap(visible_alias = "e")]
    Env {
        /// Output file (defaults to taku.config.env)
        output: Option<PathBuf>,
        /// Config file (defaults to taku.config.js, then .mjs, .cjs, .json, .toml, .yaml, .yml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Run the build script, forwarding all arguments
    #[clap(visible_alias = "b")]
    Build {
        /// Build script (defaults to $TAKU_SCRIPT, then main.sh next to the taku binary)
        #[arg(long)]
        script: Option<PathBuf>,
        /// Arguments passed through to the build script
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    super::logging::init();
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Env { output, config } => env::run_env(output, config).map(|_| 0),
        Commands::Build { script, args } => build::run_build(script, args),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
