use chrono::{Datelike, NaiveDate};
use thiserror::Error;

pub mod csv;
pub mod json;
pub mod text;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

/// `Jun 13` style label.
pub fn format_day(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

pub fn format_year(date: NaiveDate) -> i32 {
    date.year()
}

/// Wraps a CSV field in double quotes, doubling embedded quotes.
pub fn quote_csv(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
