//! Workbook loader - opens a spreadsheet and hands out cached cell values

use crate::error::{ExtractError, ExtractResult};
use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Anything that can list sheets in workbook order and read one of them.
pub trait SheetSource {
    /// Sheet names in the workbook's native order
    fn sheet_names(&self) -> Vec<String>;

    /// Cell values of one sheet. Formula cells carry their last computed value.
    fn read_sheet(&mut self, name: &str) -> ExtractResult<Range<Data>>;
}

/// Used extent of a sheet, anchored at (1,1).
///
/// `max_row` and `max_col` are 1-based and come straight from the range
/// the reader reports; nothing is re-derived by scanning cell contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SheetBounds {
    pub max_row: usize,
    pub max_col: usize,
}

impl SheetBounds {
    pub fn of(range: &Range<Data>) -> Self {
        match range.end() {
            Some((row, col)) if !range.is_empty() => Self {
                max_row: row as usize + 1,
                max_col: col as usize + 1,
            },
            _ => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.max_row == 0 || self.max_col == 0
    }
}

/// A workbook file opened read-only (xlsx, xlsm, xlsb, xls or ods)
pub struct Workbook {
    path: PathBuf,
    inner: Sheets<BufReader<File>>,
}

impl Workbook {
    /// Open the workbook at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> ExtractResult<Self> {
        let path = path.as_ref().to_path_buf();
        let inner = open_workbook_auto(&path).map_err(|source| ExtractError::Load {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "opened workbook");
        Ok(Self { path, inner })
    }
}

impl SheetSource for Workbook {
    fn sheet_names(&self) -> Vec<String> {
        self.inner.sheet_names().to_vec()
    }

    fn read_sheet(&mut self, name: &str) -> ExtractResult<Range<Data>> {
        self.inner
            .worksheet_range(name)
            .map_err(|source| ExtractError::Sheet {
                path: self.path.clone(),
                sheet: name.to_string(),
                source,
            })
    }
}
