use crate::classifier::classify;
use crate::model::{CellValue, RawGrid, RosterSnapshot};
use crate::parser::{EmployeeAnalysis, RosterError};
use crate::report::label;
use anyhow::Context;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Charge la feuille `sheet` (ou la première) d'un classeur ou d'un CSV.
pub fn load_grid<P: AsRef<Path>>(path: P, sheet: Option<&str>) -> Result<RawGrid, RosterError> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let result = match ext.as_str() {
        "csv" => load_csv(path, sheet),
        e if WORKBOOK_EXTENSIONS.contains(&e) => load_workbook(path, sheet),
        _ => Err(RosterError::unreadable(
            path.display().to_string(),
            format!("unsupported file extension {ext:?}"),
        )),
    };
    if let Err(err) = &result {
        tracing::warn!(path = %path.display(), error = %err, "roster source not loaded");
    }
    result
}

/// Un CSV n'expose qu'une feuille, nommée d'après le fichier.
fn load_csv(path: &Path, sheet: Option<&str>) -> Result<RawGrid, RosterError> {
    let display = path.display().to_string();
    if let Some(wanted) = sheet {
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
        if wanted != stem {
            return Err(RosterError::unreadable(display, format!("no sheet named {wanted:?}")));
        }
    }

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| RosterError::unreadable(display.clone(), e))?;
    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec.map_err(|e| RosterError::unreadable(display.clone(), e))?;
        rows.push(rec.iter().map(csv_cell).collect::<Vec<_>>());
    }
    Ok(RawGrid::from_rows(rows))
}

fn csv_cell(raw: &str) -> CellValue {
    if raw.is_empty() {
        return CellValue::Empty;
    }
    if let Ok(i) = raw.parse::<i64>() {
        return CellValue::Int(i);
    }
    let looks_numeric = raw
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'));
    if looks_numeric {
        if let Ok(x) = raw.parse::<f64>() {
            return CellValue::Float(x);
        }
    }
    CellValue::Text(raw.to_string())
}

#[cfg(feature = "xlsx")]
fn load_workbook(path: &Path, sheet: Option<&str>) -> Result<RawGrid, RosterError> {
    use calamine::{open_workbook_auto, Reader};

    let display = path.display().to_string();
    let mut workbook =
        open_workbook_auto(path).map_err(|e| RosterError::unreadable(display.clone(), e))?;

    let name = match sheet {
        Some(name) => {
            if !workbook.sheet_names().iter().any(|n| n == name) {
                return Err(RosterError::unreadable(display, format!("no sheet named {name:?}")));
            }
            name.to_string()
        }
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| RosterError::unreadable(display.clone(), "workbook has no sheet"))?,
    };

    let range = workbook
        .worksheet_range(&name)
        .map_err(|e| RosterError::unreadable(display, e))?;

    // Positions absolues : une plage qui commence en C3 garde les lignes 1-2.
    let (row_off, col_off) = range
        .start()
        .map(|(r, c)| (r as usize, c as usize))
        .unwrap_or((0, 0));
    let mut rows: Vec<Vec<CellValue>> = vec![Vec::new(); row_off];
    for row in range.rows() {
        let mut cells = vec![CellValue::Empty; col_off];
        cells.extend(row.iter().map(workbook_cell));
        rows.push(cells);
    }
    tracing::debug!(sheet = %name, rows = rows.len(), "worksheet loaded");
    Ok(RawGrid::from_rows(rows))
}

#[cfg(not(feature = "xlsx"))]
fn load_workbook(path: &Path, _sheet: Option<&str>) -> Result<RawGrid, RosterError> {
    Err(RosterError::unreadable(
        path.display().to_string(),
        "workbook support disabled (enable the `xlsx` feature)",
    ))
}

#[cfg(feature = "xlsx")]
fn workbook_cell(data: &calamine::Data) -> CellValue {
    use calamine::Data;
    use chrono::{NaiveDateTime, Timelike};

    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::from(s.as_str()),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(x) => CellValue::Float(*x),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) if ndt.num_seconds_from_midnight() == 0 => CellValue::Date(ndt.date()),
            Some(ndt) => CellValue::DateTime(ndt),
            None => CellValue::Float(dt.as_f64()),
        },
        Data::DateTimeIso(s) => s
            .parse::<NaiveDateTime>()
            .map(CellValue::DateTime)
            .unwrap_or_else(|_| CellValue::Text(s.clone())),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(e.to_string()),
    }
}

/// Export JSON du tableau parsé (jolie mise en forme)
pub fn export_snapshot_json<P: AsRef<Path>>(path: P, snapshot: &RosterSnapshot) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(snapshot)?;
    fs::write(path.as_ref(), s)
        .with_context(|| format!("writing {}", path.as_ref().display()))?;
    Ok(())
}

/// Export CSV du détail d'un employé: header `date,code,category`
pub fn export_analysis_csv<P: AsRef<Path>>(path: P, analysis: &EmployeeAnalysis) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["date", "code", "category"])?;
    for detail in &analysis.shift_details {
        let date = detail.date.to_string();
        let category = if detail.code.is_empty() {
            ""
        } else {
            label(classify(detail.code.as_str()))
        };
        w.write_record([date.as_str(), detail.code.as_str(), category])?;
    }
    w.flush()?;
    Ok(())
}
