//! Workbook Extract - flatten a spreadsheet workbook into one JSON document
//!
//! Every sheet of the workbook is read with formulas resolved to their
//! cached values, each cell is normalized to an empty string, a number or a
//! string, and the result is written together with a per-sheet summary.
//!
//! # Features
//!
//! - xlsx, xlsm, xlsb, xls and ods input
//! - Sheets in workbook order, hidden and empty ones included
//! - Dense rows: every row has one entry per column of the used range
//! - Integers stay integers, non-ASCII text is written literally
//!
//! # Example
//!
//! ```no_run
//! use workbook_extract::excel::Workbook;
//! use workbook_extract::{extract, write_document};
//! use std::path::Path;
//!
//! let mut workbook = Workbook::open("GAIA_Complete_Tool.xlsx")?;
//! let document = extract(&mut workbook)?;
//!
//! println!("Sheets: {}", document.summary.total_sheets);
//! write_document(&document, Path::new("src/workbook-data.json"))?;
//! # Ok::<(), workbook_extract::error::ExtractError>(())
//! ```

pub mod assembler;
pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod logging;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use assembler::{extract, extract_with_progress, DocumentAssembler, ExtractEvent};
pub use config::ExtractConfig;
pub use error::{ExtractError, ExtractResult};
pub use types::{CellValue, ExtractionResult, SheetData, SheetInfo, Summary};
pub use writer::write_document;

/// Run the whole pipeline for `config` without printing anything
pub fn run(config: &ExtractConfig) -> ExtractResult<ExtractionResult> {
    let mut workbook = excel::Workbook::open(&config.input)?;
    let document = extract(&mut workbook)?;
    write_document(&document, &config.output)?;
    Ok(document)
}
