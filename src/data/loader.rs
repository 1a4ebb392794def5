use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Data, Reader};
use serde_json::Value as JsonValue;

use super::model::{BionicRecord, BionicTable, DisplayColumn};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("workbook has no worksheets")]
    NoWorksheet,
    #[error("sheet has no header row")]
    EmptySheet,
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load and normalize the bionic dataset.  Dispatch by extension.
///
/// Supported formats:
/// * `.xlsx` / `.xlsm` / `.xlsb` / `.xls` / `.ods` – first worksheet, header in row 1
/// * `.csv`  – header row required
/// * `.json` – `[{ "Bionic prototype": "...", "Method": "...", ... }, ...]`
pub fn load_file(path: &Path) -> Result<BionicTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => load_workbook(path),
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(LoadError::UnsupportedExtension(other.to_string()).into()),
    }?;

    log::info!("Loaded {} rows from {}", table.len(), path.display());
    Ok(table)
}

// ---------------------------------------------------------------------------
// Column resolution shared by all formats
// ---------------------------------------------------------------------------

/// Positions of the required columns within a header row.
struct ColumnIndex {
    prototype: usize,
    materials: usize,
    method: usize,
    multifunction: usize,
    res_link: usize,
}

impl ColumnIndex {
    fn resolve(headers: &[String]) -> Result<Self, LoadError> {
        let find = |col: DisplayColumn| {
            headers
                .iter()
                .position(|h| DisplayColumn::from_header(h) == Some(col))
                .ok_or(LoadError::MissingColumn(col.header()))
        };
        Ok(Self {
            prototype: find(DisplayColumn::Prototype)?,
            materials: find(DisplayColumn::Materials)?,
            method: find(DisplayColumn::Method)?,
            multifunction: find(DisplayColumn::Multifunction)?,
            res_link: find(DisplayColumn::ResLink)?,
        })
    }

    fn record(&self, row: &[String]) -> BionicRecord {
        let cell = |i: usize| row.get(i).map(String::as_str).unwrap_or("");
        BionicRecord::from_raw(
            cell(self.prototype),
            cell(self.materials),
            cell(self.method),
            cell(self.multifunction),
            cell(self.res_link),
        )
    }
}

/// Turn textual rows into a table, skipping rows that are entirely blank.
fn table_from_rows<I>(headers: &[String], rows: I) -> Result<BionicTable>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let index = ColumnIndex::resolve(headers)?;
    let mut records = Vec::new();

    for (row_no, row) in rows.into_iter().enumerate() {
        if row.iter().all(|c| c.trim().is_empty()) {
            log::debug!("Skipping blank row {row_no}");
            continue;
        }
        let rec = index.record(&row);
        if rec.prototype.is_empty() {
            log::warn!("Row {row_no} has no bionic prototype");
        }
        records.push(rec);
    }

    Ok(BionicTable::new(records))
}

// ---------------------------------------------------------------------------
// Spreadsheet loader
// ---------------------------------------------------------------------------

fn load_workbook(path: &Path) -> Result<BionicTable> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("opening workbook {}", path.display()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(LoadError::NoWorksheet)?
        .context("reading first worksheet")?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .ok_or(LoadError::EmptySheet)?
        .iter()
        .map(cell_text)
        .collect();

    table_from_rows(&headers, rows.map(|r| r.iter().map(cell_text).collect()))
}

/// Largest magnitude for which an `f64` holds every integer exactly (2^53).
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Render a spreadsheet cell as text.  Integral floats lose their `.0`.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() <= MAX_EXACT_INT => {
            format!("{}", *f as i64)
        }
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<BionicTable> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    table_from_rows(&headers, rows)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, as written by `df.to_json(orient='records')`.
/// Columns are taken from the first record.
fn load_json(path: &Path) -> Result<BionicTable> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root
        .as_array()
        .context("Expected top-level JSON array")?;

    let headers: Vec<String> = match records.first() {
        Some(first) => first
            .as_object()
            .context("Row 0 is not a JSON object")?
            .keys()
            .cloned()
            .collect(),
        None => DisplayColumn::ALL.iter().map(|c| c.header().to_string()).collect(),
    };

    let mut rows = Vec::with_capacity(records.len());
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;
        rows.push(
            headers
                .iter()
                .map(|h| obj.get(h).map(json_text).unwrap_or_default())
                .collect(),
        );
    }

    table_from_rows(&headers, rows)
}

fn json_text(val: &JsonValue) -> String {
    match val {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}
