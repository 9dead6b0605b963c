//! Command line argument parsing.

use std::path::PathBuf;

use plotstack_foundation::Error as PlotstackError;
use plotstack_language::Features;
use thiserror::Error;

use crate::config::RuntimeConfig;

/// Errors produced while parsing arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// An option that takes a value was last on the command line.
    #[error("{0} requires a value")]
    MissingValue(String),

    /// An option we do not recognize.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// A `--set` argument without `=`.
    #[error("invalid assignment '{0}', expected key=value")]
    InvalidAssignment(String),

    /// A `--features` value that names no feature level.
    #[error("{0}")]
    InvalidFeatures(String),
}

/// Options parsed from the command line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliOptions {
    /// Program files to run, in order.
    pub files: Vec<PathBuf>,
    /// Programs given with `-e`, run after the files.
    pub programs: Vec<String>,
    /// Exit after running files and programs.
    pub batch: bool,
    /// Print usage and exit.
    pub show_help: bool,
    /// Print the version and exit.
    pub show_version: bool,
    /// Which words may be invoked.
    pub features: Features,
    /// Print intermediate steps.
    pub debug: bool,
    /// Print type summaries.
    pub show_types: bool,
    /// Initial variables from `--set key=value`.
    pub variables: Vec<(String, String)>,
}

impl CliOptions {
    /// Parses arguments, not including the binary name.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown options, options missing their value, and
    /// malformed `--set` assignments.
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, CliError> {
        let mut options = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => options.show_help = true,
                "-V" | "--version" => options.show_version = true,
                "-b" | "--batch" => options.batch = true,
                "--unstable" => options.features = Features::Unstable,
                "--features" => {
                    let level = args.next().ok_or_else(|| CliError::MissingValue(arg.clone()))?;
                    options.features = level
                        .parse()
                        .map_err(|e: PlotstackError| CliError::InvalidFeatures(e.message()))?;
                }
                "--debug" => options.debug = true,
                "--show-types" => options.show_types = true,
                "-e" | "--eval" => {
                    let program = args.next().ok_or_else(|| CliError::MissingValue(arg.clone()))?;
                    options.programs.push(program);
                }
                "--set" => {
                    let assignment = args.next().ok_or_else(|| CliError::MissingValue(arg.clone()))?;
                    let (key, value) = assignment
                        .split_once('=')
                        .ok_or_else(|| CliError::InvalidAssignment(assignment.clone()))?;
                    options.variables.push((key.to_string(), value.to_string()));
                }
                other if other.starts_with('-') && other.len() > 1 => {
                    return Err(CliError::UnknownOption(other.to_string()));
                }
                path => options.files.push(PathBuf::from(path)),
            }
        }

        Ok(options)
    }

    /// True if the REPL should not start.
    #[must_use]
    pub fn is_batch(&self) -> bool {
        self.batch || !self.programs.is_empty()
    }

    /// The runtime configuration these options describe.
    #[must_use]
    pub fn config(&self) -> RuntimeConfig {
        let config = RuntimeConfig::default()
            .with_features(self.features)
            .with_debug(self.debug)
            .with_show_types(self.show_types)
            .with_banner(self.files.is_empty());
        self.variables
            .iter()
            .fold(config, |config, (key, value)| {
                config.with_variable(key.as_str(), value.as_str())
            })
    }
}
