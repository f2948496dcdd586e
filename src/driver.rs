//! Orchestrates one generation run.
//!
//! All validation happens before the output path is touched: settings, then
//! every input, then the output path itself. Only after that (and after the
//! user agrees to overwrite, if needed) is anything written.

use crate::config;
use crate::error::{Error, Result};
use crate::models::{GenerationRequest, Settings};
use crate::services::{
    OutputState, collect_inputs, confirm_overwrite, generate, inspect_output, write_output,
};
use camino::Utf8PathBuf;
use std::io::{BufRead, Write};

/// Printed when the user declines to overwrite.
pub const ABORT_MESSAGE: &str = "Abort.";

/// How a run ended, when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The output file was written with `entries` map entries.
    Written { output: Utf8PathBuf, entries: usize },
    /// The output file existed and the user declined to overwrite it.
    Aborted,
}

impl Outcome {
    pub fn summary(&self) -> String {
        match self {
            Outcome::Written { output, entries } => {
                format!("Generated {} with {} file(s).", output, entries)
            }
            Outcome::Aborted => ABORT_MESSAGE.to_string(),
        }
    }
}

/// Run the generator.
///
/// `stdin` and `stdout` are only used for the overwrite confirmation, which
/// happens when `settings.output_path` already exists.
///
/// # Errors
///
/// Any validation error from settings or inputs, [`Error::IsDirectory`]
/// for a directory output path, or an I/O error while prompting or writing.
pub fn run<R: BufRead, W: Write>(
    settings: Settings,
    inputs: &[Utf8PathBuf],
    stdin: &mut R,
    stdout: &mut W,
) -> Result<Outcome> {
    config::validate(&settings)?;

    let contents = collect_inputs(inputs)?;

    let output = settings.output_path.clone();
    if inspect_output(&output)? == OutputState::Exists {
        tracing::info!("Output {} exists, asking before overwriting", output);
        if !confirm_overwrite(stdin, stdout)? {
            writeln!(stdout, "{ABORT_MESSAGE}")
                .map_err(|e| Error::io("Failed to write to stdout", e))?;
            tracing::info!("Overwrite of {} declined", output);
            return Ok(Outcome::Aborted);
        }
    }

    let request = GenerationRequest::new(settings, contents);
    let entries = request.contents.len();
    write_output(&output, &generate(&request))?;

    Ok(Outcome::Written { output, entries })
}

/// Render the generated source without touching the filesystem output.
pub fn render(settings: Settings, inputs: &[Utf8PathBuf]) -> Result<String> {
    config::validate(&settings)?;
    let contents = collect_inputs(inputs)?;
    Ok(generate(&GenerationRequest::new(settings, contents)))
}
