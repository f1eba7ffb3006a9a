//! In-memory workbook
//!
//! Honours the row / column bounds of A1 ranges the way the Sheets API
//! does, so loaders behave the same against it as against a real sheet.

use std::collections::HashMap;

use async_trait::async_trait;
use mise_errors::{AppError, AppResult};
use mise_ports::{Row, SheetGateway, SheetRange};
use parking_lot::RwLock;
use serde_json::Value;
use tracing::debug;

/// Row/column window of an A1 range (0-based, inclusive, open-ended when None)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bounds {
    first_row: usize,
    last_row: Option<usize>,
    first_col: usize,
    last_col: Option<usize>,
}

/// Split `B12` into (column, row); either part may be absent
fn parse_cell_ref(reference: &str) -> AppResult<(Option<usize>, Option<usize>)> {
    let letters: String = reference.chars().take_while(|c| c.is_ascii_alphabetic()).collect();
    let digits = &reference[letters.len()..];

    let col = if letters.is_empty() {
        None
    } else {
        let index = letters
            .to_ascii_uppercase()
            .bytes()
            .fold(0usize, |acc, b| acc * 26 + (b - b'A' + 1) as usize);
        Some(index - 1)
    };

    let row = if digits.is_empty() {
        None
    } else {
        let n: usize = digits
            .parse()
            .map_err(|_| AppError::validation(format!("Invalid cell reference '{}'", reference)))?;
        if n == 0 {
            return Err(AppError::validation(format!("Invalid cell reference '{}'", reference)));
        }
        Some(n - 1)
    };

    Ok((col, row))
}

fn parse_bounds(cells: &str) -> AppResult<Bounds> {
    let (start, end) = match cells.split_once(':') {
        Some((start, end)) => (start, Some(end)),
        None => (cells, None),
    };

    let (start_col, start_row) = parse_cell_ref(start.trim())?;
    let (end_col, end_row) = match end {
        Some(end) => parse_cell_ref(end.trim())?,
        // 单个单元格
        None => (start_col, start_row),
    };

    Ok(Bounds {
        first_row: start_row.unwrap_or(0),
        last_row: end_row,
        first_col: start_col.unwrap_or(0),
        last_col: end_col,
    })
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// In-memory `SheetGateway`
#[derive(Default)]
pub struct InMemorySheetGateway {
    sheets: RwLock<HashMap<String, Vec<Row>>>,
}

impl InMemorySheetGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a sheet; row 1 of the sheet is `rows[0]`
    pub fn with_sheet<R, C>(self, name: &str, rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        self.sheets.write().insert(name.to_string(), rows);
        self
    }

    /// Snapshot of a sheet's rows (test inspection)
    pub fn rows(&self, name: &str) -> Vec<Row> {
        self.sheets.read().get(name).cloned().unwrap_or_default()
    }
}

#[async_trait]
impl SheetGateway for InMemorySheetGateway {
    async fn read_range(&self, range: &SheetRange) -> AppResult<Vec<Row>> {
        let bounds = parse_bounds(&range.cells)?;
        let sheets = self.sheets.read();
        let sheet = sheets.get(&range.sheet).ok_or_else(|| {
            AppError::upstream_unavailable(format!("Reading {}: Unable to parse range", range))
        })?;

        let last_row = bounds
            .last_row
            .map(|r| r.min(sheet.len().saturating_sub(1)))
            .unwrap_or(sheet.len().saturating_sub(1));

        let mut rows: Vec<Row> = sheet
            .iter()
            .enumerate()
            .filter(|(i, _)| *i >= bounds.first_row && *i <= last_row)
            .map(|(_, row)| {
                let mut cells: Row = row
                    .iter()
                    .enumerate()
                    .filter(|(c, _)| {
                        *c >= bounds.first_col && bounds.last_col.is_none_or(|last| *c <= last)
                    })
                    .map(|(_, v)| v.clone())
                    .collect();
                while cells.last().is_some_and(|v| v.is_empty()) {
                    cells.pop();
                }
                cells
            })
            .collect();

        // 与 API 一致：末尾空行不返回
        while rows.last().is_some_and(|r| r.is_empty()) {
            rows.pop();
        }

        debug!(range = %range, rows = rows.len(), "Read in-memory range");
        Ok(rows)
    }

    async fn append_rows(&self, sheet_name: &str, rows: Vec<Vec<Value>>) -> AppResult<()> {
        let mut sheets = self.sheets.write();
        let sheet = sheets.get_mut(sheet_name).ok_or_else(|| {
            AppError::upstream_unavailable(format!(
                "Appending to {}!A:D: Unable to parse range",
                sheet_name
            ))
        })?;

        let count = rows.len();
        sheet.extend(
            rows.into_iter()
                .map(|row| row.iter().map(value_text).collect::<Row>()),
        );

        debug!(sheet = %sheet_name, rows = count, "Appended in-memory rows");
        Ok(())
    }
}
