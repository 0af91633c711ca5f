use crate::classifier::CategoryCounts;
use crate::model::CellValue;
use thiserror::Error;

/// Repères structurels fournis par l'appelant (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Première ligne de données employé (la ligne 1 reste l'en-tête des dates).
    pub start_row: usize,
    /// Colonne des noms ; les équipes suivent à droite.
    pub name_col: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            start_row: 3,
            name_col: 2,
        }
    }
}

impl ParseOptions {
    pub fn new(start_row: usize, name_col: usize) -> Result<Self, RosterError> {
        let opts = Self {
            start_row,
            name_col,
        };
        opts.validate()?;
        Ok(opts)
    }

    pub(super) fn validate(&self) -> Result<(), RosterError> {
        if self.start_row == 0 {
            return Err(RosterError::InvalidOptions("start_row must be >= 1"));
        }
        if self.name_col == 0 {
            return Err(RosterError::InvalidOptions("name_col must be >= 1"));
        }
        Ok(())
    }
}

/// Une journée du détail : date d'en-tête + code brut (éventuellement vide).
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftDetail {
    pub date: CellValue,
    pub code: String,
}

/// Statistiques d'un employé.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeAnalysis {
    pub name: String,
    /// Jours avec un code non vide.
    pub total_days: usize,
    /// Calculé sur les codes non vides uniquement.
    pub stats: CategoryCounts,
    /// Toutes les dates, blancs compris.
    pub shift_details: Vec<ShiftDetail>,
}

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("cannot read roster source {path}: {reason}")]
    SourceUnreadable { path: String, reason: String },
    #[error("employee not found: {0}")]
    EmployeeNotFound(String),
    #[error("invalid parse options: {0}")]
    InvalidOptions(&'static str),
}

impl RosterError {
    pub(crate) fn unreadable(path: impl Into<String>, reason: impl ToString) -> Self {
        RosterError::SourceUnreadable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RosterError::EmployeeNotFound(_))
    }
}
