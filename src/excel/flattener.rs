//! Sheet flattener - turns a cell range into rows of normalized values

use crate::excel::loader::SheetBounds;
use crate::excel::normalizer::normalize;
use crate::types::{CellValue, Row};
use calamine::{Data, Range};

/// A sheet as a dense grid: `row_count` rows of exactly `col_count` cells
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlatSheet {
    pub rows: Vec<Row>,
    pub row_count: usize,
    pub col_count: usize,
}

/// Walk `[1..max_row] x [1..max_col]` row-major.
///
/// Positions the range holds no value for become [`CellValue::Empty`],
/// including any rows or columns before the first used cell.
pub fn flatten(range: &Range<Data>) -> FlatSheet {
    let bounds = SheetBounds::of(range);
    if bounds.is_empty() {
        return FlatSheet::default();
    }

    let rows: Vec<Row> = (0..bounds.max_row)
        .map(|row| {
            (0..bounds.max_col)
                .map(|col| {
                    range
                        .get_value((row as u32, col as u32))
                        .map_or(CellValue::Empty, normalize)
                })
                .collect()
        })
        .collect();

    FlatSheet {
        rows,
        row_count: bounds.max_row,
        col_count: bounds.max_col,
    }
}
