#![forbid(unsafe_code)]
//! Shiftroster — interrogation d'un tableau de service (Excel/CSV), sans BD.
//!
//! - Lecture d'une feuille en grille 1-based (CSV, xlsx/xls/ods).
//! - Parsing par employé : codes bruts alignés sur la ligne des dates.
//! - Classement des codes (N*, M*, A*, O, congés…) et statistiques.
//! - Rendu texte et aiguillage des commandes du bot hors de la logique cœur.

pub mod classifier;
pub mod io;
pub mod model;
pub mod parser;
pub mod query;
pub mod report;
pub mod source;

pub use classifier::{aggregate, classify, classify_cell, CategoryCounts, ShiftCategory};
pub use model::{CellValue, EmployeeRecord, RawGrid, RosterSnapshot};
pub use parser::{
    analyze_employee, list_employees, parse_roster, EmployeeAnalysis, ParseOptions, RosterError,
    RosterParser, ShiftDetail,
};
pub use query::{respond, Command};
pub use report::{ConsoleSummary, SummaryRenderer, TextSummary};
pub use source::{FileSource, GridSource, RosterSource};
