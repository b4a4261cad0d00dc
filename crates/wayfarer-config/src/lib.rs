//! Configuration for the wayfarer explorer.
//!
//! Settings persist to disk as a RON file and can be overridden from the
//! command line via clap.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, WorldConfig};
pub use error::ConfigError;
