use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Default package clause of the generated file.
pub const DEFAULT_PACKAGE: &str = "main";

/// Default name of the generated map variable.
pub const DEFAULT_VARIABLE: &str = "text";

/// Default path of the generated file.
pub const DEFAULT_OUTPUT: &str = "text.go";

/// Resolved generation settings.
///
/// Supplied once at startup and never modified afterwards. Field names on the
/// wire match the CLI flags (`pkg`, `var`, `output`) so that settings files and
/// `FILE2STRING_*` environment variables use the same keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "pkg")]
    pub package_name: String,

    #[serde(rename = "var")]
    pub variable_name: String,

    #[serde(rename = "output")]
    pub output_path: Utf8PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            package_name: DEFAULT_PACKAGE.to_string(),
            variable_name: DEFAULT_VARIABLE.to_string(),
            output_path: Utf8PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// Settings file structure (`.file2string.yaml`)
///
/// Every key is optional; absent keys fall through to the next layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pkg: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub var: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Utf8PathBuf>,
}
