mod analysis;
mod rows;
mod types;

pub use types::{EmployeeAnalysis, ParseOptions, RosterError, ShiftDetail};

use crate::io;
use crate::model::{EmployeeRecord, RawGrid, RosterSnapshot};
use std::path::Path;

/// Parser : encapsule la feuille choisie d'un classeur.
#[derive(Debug, Clone)]
pub struct RosterParser {
    grid: RawGrid,
}

impl RosterParser {
    /// Ouvre `path` et sélectionne `sheet` (ou la première feuille).
    pub fn open<P: AsRef<Path>>(path: P, sheet: Option<&str>) -> Result<Self, RosterError> {
        let grid = io::load_grid(path, sheet)?;
        Ok(Self { grid })
    }

    pub fn from_grid(grid: RawGrid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &RawGrid {
        &self.grid
    }

    pub fn parse(&self, opts: ParseOptions) -> Result<RosterSnapshot, RosterError> {
        parse_roster(&self.grid, opts)
    }
}

/// Lit la grille en tableau par employé.
///
/// Aucune validation structurelle : un mauvais `name_col` produit un tableau
/// plausible mais faux.
pub fn parse_roster(grid: &RawGrid, opts: ParseOptions) -> Result<RosterSnapshot, RosterError> {
    opts.validate()?;

    let dates = rows::header_dates(grid, opts.name_col);
    let width = dates
        .len()
        .min(grid.max_column().saturating_sub(opts.name_col));

    let mut snapshot = RosterSnapshot::default();
    let mut skipped = 0usize;

    for row in opts.start_row..=grid.max_row() {
        let Some(name) = rows::employee_name(grid.cell(row, opts.name_col)) else {
            skipped += 1;
            continue;
        };
        let shifts = rows::shift_codes(grid, row, opts.name_col, width);
        let row_dates = dates[..shifts.len()].to_vec();
        if snapshot.get(&name).is_some() {
            tracing::debug!(row, name = %name, "duplicate employee row overwrites earlier one");
        }
        snapshot.upsert(EmployeeRecord {
            name,
            shifts,
            dates: row_dates,
        });
    }

    tracing::debug!(
        employees = snapshot.len(),
        dates = dates.len(),
        skipped,
        "roster parsed"
    );
    Ok(snapshot)
}

/// Statistiques d'un employé (correspondance exacte du nom).
pub fn analyze_employee(
    name: &str,
    snapshot: &RosterSnapshot,
) -> Result<EmployeeAnalysis, RosterError> {
    analysis::analyze_employee(name, snapshot)
}

/// Noms dans l'ordre du tableau.
pub fn list_employees(snapshot: &RosterSnapshot) -> Vec<String> {
    snapshot.names().map(str::to_string).collect()
}
