//! Cell normalizer - maps raw cell data onto JSON-safe values

use crate::types::CellValue;
use calamine::{Data, ExcelDateTime};
use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Largest magnitude at which every integer is exactly representable as f64
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Classify a raw cell. Total: every input maps to exactly one [`CellValue`].
pub fn normalize(raw: &Data) -> CellValue {
    match raw {
        Data::Empty => CellValue::Empty,
        Data::Int(i) => CellValue::Number((*i).into()),
        Data::Float(f) => normalize_float(*f),
        Data::Bool(b) => CellValue::Text(if *b { "True" } else { "False" }.to_string()),
        Data::DateTime(dt) => CellValue::Text(format_excel_datetime(dt)),
        Data::DateTimeIso(s) => CellValue::Text(format_iso_datetime(s)),
        other => CellValue::Text(other.to_string()),
    }
}

fn normalize_float(f: f64) -> CellValue {
    // Spreadsheet formats store every number as a double; whole values are integers
    if f.fract() == 0.0 && f.abs() < MAX_EXACT_INTEGER {
        return CellValue::Number((f as i64).into());
    }
    match serde_json::Number::from_f64(f) {
        Some(n) => CellValue::Number(n),
        None => CellValue::Text(f.to_string()),
    }
}

fn format_excel_datetime(dt: &ExcelDateTime) -> String {
    if dt.is_duration() {
        return match dt.as_duration() {
            Some(d) => format_duration(d.num_seconds()),
            None => dt.as_f64().to_string(),
        };
    }

    match dt.as_datetime() {
        // A serial below one day carries no date part
        Some(ndt) if dt.as_f64() < 1.0 => format_datetime(&ndt, TIME_FORMAT),
        Some(ndt) => format_datetime(&ndt, DATETIME_FORMAT),
        None => dt.as_f64().to_string(),
    }
}

fn format_iso_datetime(s: &str) -> String {
    let raw = s.trim_end_matches('Z');
    if let Ok(ndt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return format_datetime(&ndt, DATETIME_FORMAT);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d 00:00:00").to_string();
    }
    s.to_string()
}

/// Render with `base`, appending microseconds when the value has a sub-second part
fn format_datetime(ndt: &NaiveDateTime, base: &str) -> String {
    let text = ndt.format(base).to_string();
    match ndt.nanosecond() / 1_000 {
        0 => text,
        micros => format!("{text}.{micros:06}"),
    }
}

/// `H:MM:SS`, with a leading day count for spans of a day or more
fn format_duration(total_seconds: i64) -> String {
    let sign = if total_seconds < 0 { "-" } else { "" };
    let secs = total_seconds.unsigned_abs();
    let days = secs / 86_400;
    let rem = secs % 86_400;
    let clock = format!("{}:{:02}:{:02}", rem / 3600, (rem % 3600) / 60, rem % 60);

    match days {
        0 => format!("{sign}{clock}"),
        1 => format!("{sign}1 day, {clock}"),
        n => format!("{sign}{n} days, {clock}"),
    }
}
