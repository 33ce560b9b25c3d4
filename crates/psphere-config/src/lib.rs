//! Configuration for planet generation and export.
//!
//! Settings persist to disk as RON and can be overridden from the command
//! line. Every section falls back to its defaults, so partial files load.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE_NAME, Config, DebugConfig, ExportConfig, GenerationConfig, PlanetConfig,
    default_config_dir,
};
pub use error::ConfigError;
