// file2string - embed textual files into a generated Go source file
//
// This is the library crate containing the generation pipeline and data structures.
// The binary crate (main.rs) provides the command-line entry point.

pub mod config;
pub mod driver;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;

// Re-export commonly used types for convenience
pub use crate::config::{SettingsLoader, SettingsOverrides};
pub use driver::{Outcome, run};
pub use error::{Error, Result};
pub use models::{ContentMap, GenerationRequest, InputFile, Settings, SettingsFile};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
