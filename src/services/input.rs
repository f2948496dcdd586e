//! Reading and accepting input files.

use crate::error::{Error, Result};
use crate::models::{ContentMap, InputFile};
use crate::services::{classifier, escape};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::io;

/// Read an input file from disk.
///
/// # Errors
///
/// - [`Error::NotFound`] if the path does not exist
/// - [`Error::IsDirectory`] if the path is a directory
/// - [`Error::Io`] for any other read failure
pub fn read_input(path: &Utf8Path) -> Result<InputFile> {
    let meta = fs::metadata(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::NotFound {
            path: path.to_path_buf(),
        },
        _ => Error::io(format!("Failed to inspect {path}"), e),
    })?;

    if meta.is_dir() {
        return Err(Error::IsDirectory {
            path: path.to_path_buf(),
        });
    }

    let raw_content =
        fs::read(path).map_err(|e| Error::io(format!("Failed to read {path}"), e))?;

    Ok(InputFile {
        path: path.to_path_buf(),
        raw_content,
    })
}

/// Classify an input file and return its escaped content.
///
/// # Errors
///
/// [`Error::NotTextual`] for binary content, [`Error::NotUtf8`] for text that is
/// not valid UTF-8 (generated Go source must be UTF-8).
pub fn accept(file: InputFile) -> Result<String> {
    let content_type = classifier::detect_content_type(&file.raw_content);
    if !classifier::is_textual_type(content_type) {
        tracing::info!("Rejected {}: detected {}", file.path, content_type);
        return Err(Error::NotTextual {
            path: file.path,
            content_type,
        });
    }

    let text = String::from_utf8(file.raw_content)
        .map_err(|_| Error::NotUtf8 { path: file.path.clone() })?;

    tracing::debug!(
        "Accepted {} ({}, {} bytes)",
        file.path,
        content_type,
        text.len()
    );
    Ok(escape::escape(&text))
}

/// Read, classify and escape every input, stopping at the first failure.
///
/// # Errors
///
/// [`Error::Usage`] if `paths` is empty, otherwise the first error from
/// [`read_input`] or [`accept`].
pub fn collect_inputs(paths: &[Utf8PathBuf]) -> Result<ContentMap> {
    if paths.is_empty() {
        return Err(Error::Usage);
    }

    let mut contents = ContentMap::new();
    for path in paths {
        let file = read_input(path)?;
        contents.insert(path.as_str(), accept(file)?);
    }

    tracing::info!("Collected {} input file(s)", contents.len());
    Ok(contents)
}
