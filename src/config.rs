//! Extraction configuration
//!
//! Input and output locations are explicit parameters of the pipeline.
//! The defaults reproduce the fixed layout the tool was first written for:
//! a workbook in the working directory and the JSON under `src/`.

use std::path::PathBuf;

/// Workbook read when no input is given
pub const DEFAULT_INPUT: &str = "GAIA_Complete_Tool.xlsx";

/// JSON document written when no output is given
pub const DEFAULT_OUTPUT: &str = "src/workbook-data.json";

/// Where to read the workbook from and where to write the JSON document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ExtractConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT, DEFAULT_OUTPUT)
    }
}
