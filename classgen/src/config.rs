//! Batch settings: built-in defaults, an optional `classgen.toml`, and
//! command-line overrides.

use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::Deserialize;
use thiserror::Error;

/// Inputs processed when none are given.
pub const DEFAULT_INPUTS: &[&str] = &["exampleInput"];

/// Output directory used when none is given.
pub const DEFAULT_OUTPUT: &str = "generated";

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse batch file")]
    #[diagnostic(
        code(classgen::config_parse_error),
        help("expected `inputs = [\"...\"]` and an optional `output = \"...\"`")
    )]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of a `classgen.toml` batch file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchFile {
    /// Class descriptions, processed in order
    #[serde(default)]
    pub inputs: Vec<PathBuf>,
    /// Output directory
    pub output: Option<PathBuf>,
}

impl BatchFile {
    pub fn open(path: &Path) -> Result<Self, Box<ConfigError>> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    pub fn parse(content: &str, filename: &str) -> Result<Self, Box<ConfigError>> {
        toml::from_str(content).map_err(|e: toml::de::Error| {
            Box::new(ConfigError::Parse {
                src: NamedSource::new(filename, content.to_string()),
                span: e.span().map(SourceSpan::from),
                source: e,
            })
        })
    }
}

/// Resolved inputs and output directory for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
}

impl Settings {
    /// Command-line values win over the batch file, which wins over defaults.
    pub fn resolve(inputs: &[PathBuf], output: Option<&Path>, file: Option<BatchFile>) -> Self {
        let file = file.unwrap_or_default();

        let inputs = if !inputs.is_empty() {
            inputs.to_vec()
        } else if !file.inputs.is_empty() {
            file.inputs
        } else {
            DEFAULT_INPUTS.iter().map(PathBuf::from).collect()
        };

        let output = output
            .map(Path::to_path_buf)
            .or(file.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        Self { inputs, output }
    }
}
