//! file2string - embed textual files into a generated Go source file
//!
//! Reads each input file, rejects anything that is not text, and writes a Go
//! file declaring `var <name> = map[string]string{...}` keyed by the input paths
//! exactly as given.
//!
//! # Execution Flow
//!
//! 1. Parse flags and initialize logging (stderr, optional rotating file)
//! 2. Resolve settings: defaults < `.file2string.yaml` < `FILE2STRING_*` < flags
//! 3. Validate every input, then the output path
//! 4. Ask before overwriting an existing output file
//! 5. Write through a temporary file next to the output
//!
//! Validation failures exit with status 1, I/O and configuration failures with
//! status 2. An output path that is a directory is a validation failure and
//! also exits with status 1. Declining the overwrite prints `Abort.` and exits 0.

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::{ArgAction, Parser};
use file2string::{Outcome, SettingsLoader, SettingsOverrides, logging};
use std::io::{self, Write};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "file2string")]
#[command(
    author,
    version,
    about = "Embed textual files into a generated Go source file"
)]
#[command(long_about = "
file2string reads text files and writes a Go source file holding a
map from each file path to its content, for embedding static assets.

Settings are resolved from built-in defaults, then .file2string.yaml in the
working directory (or --config), then FILE2STRING_PKG / FILE2STRING_VAR /
FILE2STRING_OUTPUT, then the flags below.

EXAMPLES:
    file2string templates/index.html                  # writes text.go, package main
    file2string --pkg assets --var files -o gen/a.go a.txt b.txt
    file2string --print-config                        # show resolved settings
")]
struct Cli {
    /// Text files to embed, keyed by the path as given
    files: Vec<Utf8PathBuf>,

    /// Package of the generated file [default: main]
    #[arg(long, value_name = "NAME")]
    pkg: Option<String>,

    /// Path of the generated file [default: text.go]
    #[arg(short = 'o', long = "o", visible_alias = "output", value_name = "PATH")]
    output: Option<Utf8PathBuf>,

    /// Name of the generated map variable [default: text]
    #[arg(long, value_name = "NAME")]
    var: Option<String>,

    /// YAML settings file (must exist when given)
    #[arg(long, value_name = "PATH")]
    config: Option<Utf8PathBuf>,

    /// Print the resolved settings as YAML and exit
    #[arg(long)]
    print_config: bool,

    /// Don't print the summary line after writing
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Also write a daily-rotated log file into this directory
    #[arg(long, value_name = "DIR")]
    log_dir: Option<Utf8PathBuf>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let _log_guard = logging::setup_logging(cli.verbose, cli.log_dir.as_deref())?;

    tracing::debug!("Starting {} v{}", file2string::APP_NAME, file2string::VERSION);

    let mut loader = SettingsLoader::default();
    if let Some(path) = &cli.config {
        loader = loader.with_settings_file(path);
    }

    let overrides = SettingsOverrides {
        pkg: cli.pkg,
        var: cli.var,
        output: cli.output,
    };

    let settings = match loader.resolve(&overrides) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            return Ok(e.exit_code());
        }
    };

    if cli.print_config {
        let yaml =
            serde_yaml_ng::to_string(&settings).context("Failed to serialize settings to YAML")?;
        print!("{yaml}");
        return Ok(ExitCode::SUCCESS);
    }

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    match file2string::run(settings, &cli.files, &mut stdin, &mut stdout) {
        Ok(Outcome::Aborted) => Ok(ExitCode::SUCCESS),
        Ok(outcome) => {
            if !cli.quiet {
                writeln!(stdout, "{}", outcome.summary()).context("Failed to write to stdout")?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::debug!("Run failed: {:?}", e);
            eprintln!("{e}");
            Ok(e.exit_code())
        }
    }
}
