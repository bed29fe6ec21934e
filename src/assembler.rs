//! Document assembly - drives the loader and flattener over every sheet

use crate::error::ExtractResult;
use crate::excel::{flatten, FlatSheet, SheetSource};
use crate::types::{ExtractionResult, SheetData, SheetInfo};

/// Progress notifications emitted while a workbook is being extracted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractEvent<'a> {
    WorkbookOpened { sheet_count: usize },
    SheetStarted { name: &'a str },
    SheetExtracted { name: &'a str, rows: usize, columns: usize },
}

/// Accumulates sheets into an [`ExtractionResult`].
///
/// Each push writes the sheet entry and its summary entry from the same
/// counts, so `sheets` and `summary.sheet_info` never disagree.
#[derive(Debug, Default)]
pub struct DocumentAssembler {
    result: ExtractionResult,
}

impl DocumentAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, sheet: FlatSheet) {
        let data = SheetData {
            name: name.into(),
            data: sheet.rows,
            rows: sheet.row_count,
            columns: sheet.col_count,
        };
        self.result.summary.sheet_info.push(SheetInfo::from(&data));
        self.result.sheets.push(data);
    }

    pub fn finish(mut self) -> ExtractionResult {
        self.result.summary.total_sheets = self.result.sheets.len();
        self.result
    }
}

/// Extract every sheet of `source`, in workbook order
pub fn extract<S: SheetSource + ?Sized>(source: &mut S) -> ExtractResult<ExtractionResult> {
    extract_with_progress(source, |_| {})
}

/// Same as [`extract`], reporting progress to `on_event`
pub fn extract_with_progress<S, F>(source: &mut S, mut on_event: F) -> ExtractResult<ExtractionResult>
where
    S: SheetSource + ?Sized,
    F: FnMut(ExtractEvent<'_>),
{
    let names = source.sheet_names();
    on_event(ExtractEvent::WorkbookOpened {
        sheet_count: names.len(),
    });

    let mut assembler = DocumentAssembler::new();
    for name in &names {
        on_event(ExtractEvent::SheetStarted { name });

        let range = source.read_sheet(name)?;
        let sheet = flatten(&range);
        tracing::debug!(
            sheet = %name,
            rows = sheet.row_count,
            columns = sheet.col_count,
            "flattened sheet"
        );

        on_event(ExtractEvent::SheetExtracted {
            name,
            rows: sheet.row_count,
            columns: sheet.col_count,
        });
        assembler.push(name.as_str(), sheet);
    }

    Ok(assembler.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;
    use calamine::{Data, Range};
    use std::path::PathBuf;

    struct MemoryBook {
        sheets: Vec<(String, Range<Data>)>,
        fail_on: Option<String>,
    }

    impl MemoryBook {
        fn new(sheets: Vec<(&str, Range<Data>)>) -> Self {
            Self {
                sheets: sheets
                    .into_iter()
                    .map(|(n, r)| (n.to_string(), r))
                    .collect(),
                fail_on: None,
            }
        }
    }

    impl SheetSource for MemoryBook {
        fn sheet_names(&self) -> Vec<String> {
            self.sheets.iter().map(|(n, _)| n.clone()).collect()
        }

        fn read_sheet(&mut self, name: &str) -> ExtractResult<Range<Data>> {
            if self.fail_on.as_deref() == Some(name) {
                return Err(ExtractError::Sheet {
                    path: PathBuf::from("memory.xlsx"),
                    sheet: name.to_string(),
                    source: calamine::Error::Msg("corrupt sheet"),
                });
            }
            Ok(self
                .sheets
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, r)| r.clone())
                .unwrap_or_else(Range::empty))
        }
    }

    fn summary_sheet() -> Range<Data> {
        let mut range = Range::new((0, 0), (1, 2));
        range.set_value((0, 0), Data::Float(1.0));
        range.set_value((0, 1), Data::String("a".to_string()));
        range.set_value((0, 2), Data::String(String::new()));
        range.set_value((1, 0), Data::Float(2.0));
        range.set_value((1, 1), Data::String("b".to_string()));
        range
    }

    #[test]
    fn test_two_sheet_document() {
        let mut book = MemoryBook::new(vec![
            ("Summary", summary_sheet()),
            ("Empty", Range::empty()),
        ]);

        let result = extract(&mut book).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"sheets":[{"name":"Summary","data":[[1,"a",""],[2,"b",""]],"rows":2,"columns":3},{"name":"Empty","data":[],"rows":0,"columns":0}],"summary":{"total_sheets":2,"sheet_info":[{"name":"Summary","rows":2,"columns":3},{"name":"Empty","rows":0,"columns":0}]}}"#
        );
    }

    #[test]
    fn test_native_order_is_kept() {
        let mut book = MemoryBook::new(vec![
            ("Zeta", Range::empty()),
            ("Alpha", Range::empty()),
            ("Mid", Range::empty()),
        ]);

        let result = extract(&mut book).unwrap();
        let names: Vec<&str> = result.sheets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
        let info_names: Vec<&str> = result
            .summary
            .sheet_info
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(info_names, names);
        assert_eq!(result.summary.total_sheets, 3);
    }

    #[test]
    fn test_summary_matches_sheets() {
        let mut book = MemoryBook::new(vec![
            ("Summary", summary_sheet()),
            ("Empty", Range::empty()),
        ]);

        let result = extract(&mut book).unwrap();
        assert_eq!(result.summary.total_sheets, result.sheets.len());
        for (sheet, info) in result.sheets.iter().zip(&result.summary.sheet_info) {
            assert_eq!(sheet.name, info.name);
            assert_eq!(sheet.data.len(), sheet.rows);
            assert_eq!(sheet.rows, info.rows);
            assert_eq!(sheet.columns, info.columns);
        }
    }

    #[test]
    fn test_progress_events() {
        let mut book = MemoryBook::new(vec![("Summary", summary_sheet())]);
        let mut events = Vec::new();

        extract_with_progress(&mut book, |event| events.push(format!("{:?}", event))).unwrap();

        assert_eq!(
            events,
            vec![
                "WorkbookOpened { sheet_count: 1 }".to_string(),
                r#"SheetStarted { name: "Summary" }"#.to_string(),
                r#"SheetExtracted { name: "Summary", rows: 2, columns: 3 }"#.to_string(),
            ]
        );
    }

    #[test]
    fn test_sheet_read_failure_aborts() {
        let mut book = MemoryBook::new(vec![
            ("Good", summary_sheet()),
            ("Bad", Range::empty()),
        ]);
        book.fail_on = Some("Bad".to_string());

        let err = extract(&mut book).unwrap_err();
        assert!(err.to_string().contains("'Bad'"));
    }

    #[test]
    fn test_empty_workbook() {
        let mut book = MemoryBook::new(vec![]);
        let result = extract(&mut book).unwrap();
        assert!(result.sheets.is_empty());
        assert_eq!(result.summary.total_sheets, 0);
    }
}
