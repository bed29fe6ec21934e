//! Workbook reading: loading, cell normalization and sheet flattening
//!
//! - Loader: opens the workbook and exposes sheets in native order
//! - Normalizer: maps each raw cell to Empty, Number or Text
//! - Flattener: turns a sheet's used range into dense rows

mod flattener;
mod loader;
mod normalizer;

pub use flattener::{flatten, FlatSheet};
pub use loader::{SheetBounds, SheetSource, Workbook};
pub use normalizer::normalize;
