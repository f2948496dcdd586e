//! Output file handling: existence check, overwrite confirmation, replace.

use crate::error::{Error, Result};
use camino::Utf8Path;
use std::fs;
use std::io::{self, BufRead, Write};

/// Prompt shown when the output file already exists.
pub const OVERWRITE_PROMPT: &str = "File has existed, do you want to rewrite the file? (y/n): ";

/// Prompt shown after an unrecognized answer.
pub const REPROMPT: &str = "Please input y or n: ";

/// Prefix of the temporary file created next to the output.
pub const TEMP_PREFIX: &str = ".file2string_tmp_";

/// Mode of a newly created output file, before the umask.
#[cfg(unix)]
pub const NEW_FILE_MODE: u32 = 0o644;

/// Whether the output path is already occupied by a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputState {
    Missing,
    Exists,
}

/// Inspect the output path.
///
/// # Errors
///
/// [`Error::IsDirectory`] if the path is a directory; [`Error::Io`] if it
/// cannot be inspected.
pub fn inspect_output(path: &Utf8Path) -> Result<OutputState> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Err(Error::IsDirectory {
            path: path.to_path_buf(),
        }),
        Ok(_) => Ok(OutputState::Exists),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(OutputState::Missing),
        Err(e) => Err(Error::io(format!("Failed to inspect output {path}"), e)),
    }
}

/// Ask whether an existing output file may be overwritten.
///
/// Reads whitespace-separated answers from `input`. `y`/`Y` accepts and `n`/`N`
/// declines; anything else prints [`REPROMPT`] and waits for another answer.
/// End of input declines.
pub fn confirm_overwrite<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool> {
    let prompt_err = |e: io::Error| Error::io("Failed to prompt for confirmation", e);

    write!(output, "{OVERWRITE_PROMPT}").map_err(prompt_err)?;
    output.flush().map_err(prompt_err)?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line).map_err(prompt_err)? == 0 {
            tracing::debug!("End of input at overwrite prompt, treating as no");
            return Ok(false);
        }

        for answer in line.split_whitespace() {
            match answer {
                "y" | "Y" => return Ok(true),
                "n" | "N" => return Ok(false),
                other => {
                    tracing::debug!("Unrecognized answer {:?}", other);
                    write!(output, "{REPROMPT}").map_err(prompt_err)?;
                    output.flush().map_err(prompt_err)?;
                }
            }
        }
    }
}

/// Write `contents` to `path` through a temporary file in the same directory.
///
/// Missing parent directories are created. The temporary file is persisted over
/// the target only after it is fully written, and is removed on any failure.
/// An existing target keeps its permissions; a new one gets [`NEW_FILE_MODE`]
/// less the umask.
pub fn write_output(path: &Utf8Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };

    let existing_permissions = match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => return Err(Error::io(format!("Failed to inspect output {path}"), e)),
    };

    fs::create_dir_all(dir)
        .map_err(|e| Error::io(format!("Failed to create directory {dir}"), e))?;

    let mut builder = tempfile::Builder::new();
    builder.prefix(TEMP_PREFIX);
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(NEW_FILE_MODE));
    }

    let mut tmp = builder
        .tempfile_in(dir)
        .map_err(|e| Error::io(format!("Failed to create temporary file in {dir}"), e))?;
    tracing::debug!("Writing generated source to {}", tmp.path().display());

    if let Some(permissions) = existing_permissions {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| Error::io(format!("Failed to copy permissions of {path}"), e))?;
    }

    tmp.write_all(contents.as_bytes())
        .and_then(|()| tmp.flush())
        .map_err(|e| Error::io("Failed to write temporary file", e))?;

    tmp.persist(path)
        .map_err(|e| Error::io(format!("Failed to replace {path}"), e.error))?;

    tracing::info!("Wrote {} bytes to {}", contents.len(), path);
    Ok(())
}
