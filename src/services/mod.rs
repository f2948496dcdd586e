//! Services module - the generation pipeline, one stage per module.
//!
//! Data flows through the stages in order:
//!
//! 1. [`input`]: read each path, reject missing files and directories
//! 2. [`classifier`]: sniff the first bytes and reject anything not `text/*`
//! 3. [`escape`]: make the content safe inside a Go raw string literal
//! 4. [`generator`]: lay out the Go source from a
//!    [`GenerationRequest`](crate::models::GenerationRequest)
//! 5. [`output`]: confirm overwrites and replace the output file through a temp file
//!
//! Every stage is synchronous and takes its inputs explicitly; nothing here
//! reads global state.

pub mod classifier;
pub mod escape;
pub mod generator;
pub mod input;
pub mod output;

pub use classifier::{detect_content_type, is_textual, is_textual_type};
pub use escape::{escape, unescape};
pub use generator::generate;
pub use input::collect_inputs;
pub use output::{OutputState, confirm_overwrite, inspect_output, write_output};
