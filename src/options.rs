//! Run configuration.

use std::path::PathBuf;

use crate::OutputFormat;

/// Everything a run needs. Built once by the caller and passed to
/// [`crate::run`].
#[derive(Debug, Clone)]
pub struct Options {
    /// Input file of `address[:suffix]` lines
    pub input: PathBuf,
    /// What to emit per address
    pub format: OutputFormat,
    /// Optional file of addresses to drop, same line format as input
    pub exclude: Option<PathBuf>,
    /// Output file, overwritten
    pub output: PathBuf,
    /// Print each address to stdout as it is written
    pub progress: bool,
}

impl Options {
    /// Create options with no exclusion file and progress output enabled.
    pub fn new(
        input: impl Into<PathBuf>,
        format: OutputFormat,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input: input.into(),
            format,
            exclude: None,
            output: output.into(),
            progress: true,
        }
    }

    /// Set the exclusion file.
    pub fn with_exclude(mut self, path: impl Into<PathBuf>) -> Self {
        self.exclude = Some(path.into());
        self
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }
}
