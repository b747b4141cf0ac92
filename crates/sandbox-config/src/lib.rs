//! Configuration system for the sandbox.
//!
//! Settings persist to disk as a RON file, can be overridden from the command
//! line via clap, and tolerate missing or unknown fields so older files keep
//! loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CameraConfig, Config, DebugConfig, InputConfig, PhysicsConfig, WindowConfig};
pub use error::ConfigError;
