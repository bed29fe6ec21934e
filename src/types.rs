use serde::{Serialize, Serializer};

//==============================================================================
// Cell values
//==============================================================================

/// A normalized cell value. Every variant maps onto a JSON scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Blank or missing cell, written as `""`
    Empty,
    /// Integer or floating-point number, written as a native JSON number
    Number(serde_json::Number),
    /// Anything else, written as its string form
    Text(String),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Integer value, if this cell holds an integral number
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CellValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => n.as_f64(),
            _ => None,
        }
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value.into())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Empty => serializer.serialize_str(""),
            CellValue::Number(n) => n.serialize(serializer),
            CellValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

/// One row of a sheet, one entry per column
pub type Row = Vec<CellValue>;

//==============================================================================
// Output document
//==============================================================================

/// A fully extracted sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetData {
    pub name: String,
    pub data: Vec<Row>,
    pub rows: usize,
    pub columns: usize,
}

/// Lightweight index entry for a sheet, mirrors the counts in [`SheetData`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetInfo {
    pub name: String,
    pub rows: usize,
    pub columns: usize,
}

impl From<&SheetData> for SheetInfo {
    fn from(sheet: &SheetData) -> Self {
        Self {
            name: sheet.name.clone(),
            rows: sheet.rows,
            columns: sheet.columns,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_sheets: usize,
    pub sheet_info: Vec<SheetInfo>,
}

/// Root JSON document: every sheet in workbook order plus a summary index
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractionResult {
    pub sheets: Vec<SheetData>,
    pub summary: Summary,
}
