use camino::Utf8PathBuf;
use std::io;
use std::process::ExitCode;
use thiserror::Error;

/// Errors that can stop a generation run.
///
/// Validation errors (usage, missing inputs, binary inputs, directories, bad
/// identifiers) are detected before anything is written. I/O errors abort the
/// run wherever they occur and are never retried.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Please specify files.")]
    Usage,

    #[error("File {path} does not exist.")]
    NotFound { path: Utf8PathBuf },

    #[error("File {path} isn't a textual file (detected {content_type}).")]
    NotTextual {
        path: Utf8PathBuf,
        content_type: &'static str,
    },

    #[error("{path} is a directory.")]
    IsDirectory { path: Utf8PathBuf },

    #[error("File {path} isn't valid UTF-8.")]
    NotUtf8 { path: Utf8PathBuf },

    #[error("Invalid {kind} name: {name:?}")]
    InvalidIdentifier { kind: &'static str, name: String },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Wrap an I/O error with a short description of what was being done.
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// True for errors caught by up-front validation, before any output exists.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Io { .. } | Self::Config(_))
    }

    /// Process exit code for this error: 1 for validation, 2 for I/O and configuration.
    pub fn exit_code(&self) -> ExitCode {
        if self.is_validation() {
            ExitCode::from(1)
        } else {
            ExitCode::from(2)
        }
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
