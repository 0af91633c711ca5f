use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Valeur scalaire d'une cellule de tableur.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    #[default]
    Empty,
    Bool(bool),
    Int(i64),
    Float(f64),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Text(String),
}

impl CellValue {
    /// Vrai si la cellule porte une valeur "significative" (`0`, `""`, `false` ne comptent pas).
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Empty => false,
            CellValue::Bool(b) => *b,
            CellValue::Int(i) => *i != 0,
            CellValue::Float(f) => *f != 0.0,
            CellValue::Date(_) | CellValue::DateTime(_) => true,
            CellValue::Text(s) => !s.is_empty(),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Bool(_) | CellValue::Int(_) | CellValue::Float(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(x) => write!(f, "{x}"),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(s.to_owned())
        }
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        if s.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(s)
        }
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<f64> for CellValue {
    fn from(x: f64) -> Self {
        CellValue::Float(x)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

/// Grille brute d'une feuille, indexée à partir de 1 (ligne, colonne).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawGrid {
    rows: Vec<Vec<CellValue>>,
    max_column: usize,
}

impl RawGrid {
    /// Construit une grille à partir de lignes éventuellement irrégulières.
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<CellValue>,
    {
        let rows: Vec<Vec<CellValue>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        let max_column = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self { rows, max_column }
    }

    pub fn max_row(&self) -> usize {
        self.rows.len()
    }

    pub fn max_column(&self) -> usize {
        self.max_column
    }

    /// Cellule (1-based) ; hors bornes => `Empty`.
    pub fn cell(&self, row: usize, column: usize) -> &CellValue {
        const EMPTY: &CellValue = &CellValue::Empty;
        if row == 0 || column == 0 {
            return EMPTY;
        }
        self.rows
            .get(row - 1)
            .and_then(|r| r.get(column - 1))
            .unwrap_or(EMPTY)
    }
}

/// Ligne d'un employé : codes bruts alignés sur les dates d'en-tête.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub name: String,
    pub shifts: Vec<String>,
    pub dates: Vec<CellValue>,
}

/// Résultat d'un parsing : employés dans l'ordre du tableau.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<EmployeeRecord>", into = "Vec<EmployeeRecord>")]
pub struct RosterSnapshot {
    employees: Vec<EmployeeRecord>,
    index: HashMap<String, usize>,
}

impl From<Vec<EmployeeRecord>> for RosterSnapshot {
    fn from(records: Vec<EmployeeRecord>) -> Self {
        let mut snap = Self::default();
        for record in records {
            snap.upsert(record);
        }
        snap
    }
}

impl From<RosterSnapshot> for Vec<EmployeeRecord> {
    fn from(snap: RosterSnapshot) -> Self {
        snap.employees
    }
}

impl RosterSnapshot {
    /// Insère ou remplace (dernier gagnant, position d'origine conservée).
    pub(crate) fn upsert(&mut self, record: EmployeeRecord) {
        match self.index.get(&record.name) {
            Some(&pos) => self.employees[pos] = record,
            None => {
                self.index.insert(record.name.clone(), self.employees.len());
                self.employees.push(record);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&EmployeeRecord> {
        self.index.get(name).map(|&pos| &self.employees[pos])
    }

    pub fn employees(&self) -> &[EmployeeRecord] {
        &self.employees
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.employees.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}
