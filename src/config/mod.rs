use crate::error::{Error, Result};
use crate::models::{DEFAULT_OUTPUT, DEFAULT_PACKAGE, DEFAULT_VARIABLE, Settings, SettingsFile};
use camino::{Utf8Path, Utf8PathBuf};
use config::{Config, Environment};
use regex::Regex;
use std::fs;
use std::sync::LazyLock;

/// Settings file picked up from the search directory when no `--config` is given.
pub const SETTINGS_FILE_NAME: &str = ".file2string.yaml";

/// Prefix of environment variables (`FILE2STRING_PKG`, `FILE2STRING_VAR`, `FILE2STRING_OUTPUT`).
pub const ENV_PREFIX: &str = "FILE2STRING";

static GO_IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid")
});

const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Universe-block names. A package-level variable named `string` breaks the
/// `map[string]string` type of the declaration itself.
const GO_PREDECLARED: &[&str] = &[
    "any", "append", "bool", "byte", "cap", "clear", "close", "comparable", "complex",
    "complex128", "complex64", "copy", "delete", "error", "false", "float32", "float64", "imag",
    "int", "int16", "int32", "int64", "int8", "iota", "len", "make", "max", "min", "new", "nil",
    "panic", "print", "println", "real", "recover", "rune", "string", "true", "uint", "uint16",
    "uint32", "uint64", "uint8", "uintptr",
];

/// Values given explicitly on the command line; they win over every other layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub pkg: Option<String>,
    pub var: Option<String>,
    pub output: Option<Utf8PathBuf>,
}

/// Resolves [`Settings`] from defaults, a YAML settings file, the environment
/// and command-line overrides, in increasing priority.
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    search_dir: Utf8PathBuf,
    settings_file: Option<Utf8PathBuf>,
    environment: Option<config::Map<String, String>>,
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new(".")
    }
}

impl SettingsLoader {
    /// Create a loader that looks for [`SETTINGS_FILE_NAME`] in `search_dir`.
    pub fn new<P: AsRef<Utf8Path>>(search_dir: P) -> Self {
        Self {
            search_dir: search_dir.as_ref().to_path_buf(),
            settings_file: None,
            environment: None,
        }
    }

    /// Use an explicit settings file instead of searching. The file must exist.
    pub fn with_settings_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.settings_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Read environment variables from `vars` instead of the process environment.
    pub fn with_environment(mut self, vars: config::Map<String, String>) -> Self {
        self.environment = Some(vars);
        self
    }

    /// Load the settings file layer.
    ///
    /// # Returns
    /// The parsed file, or an empty [`SettingsFile`] if no file is configured and
    /// none exists in the search directory.
    pub fn load_settings_file(&self) -> Result<SettingsFile> {
        let path = match &self.settings_file {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::Config(format!("settings file {path} does not exist")));
                }
                path.clone()
            }
            None => {
                let path = self.search_dir.join(SETTINGS_FILE_NAME);
                if !path.exists() {
                    tracing::debug!("No settings file at {}, using defaults", path);
                    return Ok(SettingsFile::default());
                }
                path
            }
        };

        let file_contents = fs::read_to_string(&path)
            .map_err(|e| Error::io(format!("Failed to read settings file {path}"), e))?;

        // An empty document deserializes as unit, not as a map.
        if file_contents.trim().is_empty() {
            return Ok(SettingsFile::default());
        }

        let file: SettingsFile = serde_yaml_ng::from_str(&file_contents)
            .map_err(|e| Error::Config(format!("Failed to parse settings file {path}: {e}")))?;

        tracing::info!("Loaded settings from {}", path);
        Ok(file)
    }

    /// Resolve and validate the final settings.
    pub fn resolve(&self, overrides: &SettingsOverrides) -> Result<Settings> {
        let file = self.load_settings_file()?;

        let environment = Environment::with_prefix(ENV_PREFIX).source(self.environment.clone());

        let settings: Settings = Config::builder()
            .set_default("pkg", DEFAULT_PACKAGE)?
            .set_default("var", DEFAULT_VARIABLE)?
            .set_default("output", DEFAULT_OUTPUT)?
            .add_source(Config::try_from(&file)?)
            .add_source(environment)
            .set_override_option("pkg", overrides.pkg.clone())?
            .set_override_option("var", overrides.var.clone())?
            .set_override_option(
                "output",
                overrides.output.as_ref().map(|p| p.as_str().to_string()),
            )?
            .build()?
            .try_deserialize()?;

        validate(&settings)?;

        tracing::debug!(
            "Resolved settings: pkg={}, var={}, output={}",
            settings.package_name,
            settings.variable_name,
            settings.output_path
        );
        Ok(settings)
    }
}

/// Check that the package and variable names are usable Go identifiers.
pub fn validate(settings: &Settings) -> Result<()> {
    check_identifier("package", &settings.package_name)?;
    if settings.package_name == "_" {
        return Err(Error::InvalidIdentifier {
            kind: "package",
            name: settings.package_name.clone(),
        });
    }
    check_identifier("variable", &settings.variable_name)?;
    if GO_PREDECLARED.contains(&settings.variable_name.as_str()) {
        return Err(Error::InvalidIdentifier {
            kind: "variable",
            name: settings.variable_name.clone(),
        });
    }
    if settings.output_path.as_str().is_empty() {
        return Err(Error::Config("output path is empty".to_string()));
    }
    Ok(())
}

fn check_identifier(kind: &'static str, name: &str) -> Result<()> {
    if GO_IDENTIFIER.is_match(name) && !GO_KEYWORDS.contains(&name) {
        Ok(())
    } else {
        Err(Error::InvalidIdentifier {
            kind,
            name: name.to_string(),
        })
    }
}
