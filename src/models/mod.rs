//! Data models for file2string.
//!
//! - [`Settings`]: package name, variable name and output path, resolved once at startup
//! - [`SettingsFile`]: the partial on-disk form read from `.file2string.yaml`
//! - [`InputFile`]: a path and its raw bytes as read from disk
//! - [`ContentMap`]: input path to escaped content, for every accepted file
//! - [`GenerationRequest`]: settings plus content map, the single input of the generator

pub mod config;
pub mod request;

pub use config::{DEFAULT_OUTPUT, DEFAULT_PACKAGE, DEFAULT_VARIABLE, Settings, SettingsFile};
pub use request::{ContentMap, GenerationRequest, InputFile};
