use super::types::{EmployeeAnalysis, RosterError, ShiftDetail};
use crate::classifier::aggregate;
use crate::model::RosterSnapshot;

pub(super) fn analyze_employee(
    name: &str,
    snapshot: &RosterSnapshot,
) -> Result<EmployeeAnalysis, RosterError> {
    let Some(record) = snapshot.get(name) else {
        tracing::debug!(name, "employee not in roster");
        return Err(RosterError::EmployeeNotFound(name.to_string()));
    };

    let valid: Vec<&str> = record
        .shifts
        .iter()
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .collect();

    let shift_details = record
        .dates
        .iter()
        .zip(&record.shifts)
        .map(|(date, code)| ShiftDetail {
            date: date.clone(),
            code: code.clone(),
        })
        .collect();

    Ok(EmployeeAnalysis {
        name: record.name.clone(),
        total_days: valid.len(),
        stats: aggregate(&valid),
        shift_details,
    })
}
