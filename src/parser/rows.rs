use crate::model::{CellValue, RawGrid};

/// Libellés des lignes de synthèse (quota restant / quota pris).
const SUMMARY_MARKERS: [&str; 2] = ["限休人数", "已休数目"];

/// Dates de la ligne 1, à droite de la colonne des noms ; les trous sont ignorés.
pub(super) fn header_dates(grid: &RawGrid, name_col: usize) -> Vec<CellValue> {
    (name_col + 1..=grid.max_column())
        .map(|col| grid.cell(1, col))
        .filter(|v| v.is_truthy())
        .cloned()
        .collect()
}

/// Nom d'employé de la cellule, ou `None` si la ligne doit être ignorée.
pub(super) fn employee_name(cell: &CellValue) -> Option<String> {
    if !cell.is_truthy() || cell.is_numeric() {
        return None;
    }
    let raw = cell.to_string();
    if SUMMARY_MARKERS.iter().any(|m| raw.contains(m)) {
        return None;
    }
    let name = raw.trim();
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}

/// Codes de la ligne `row`, `width` colonnes après `name_col` ; blanc => `""`.
pub(super) fn shift_codes(grid: &RawGrid, row: usize, name_col: usize, width: usize) -> Vec<String> {
    (name_col + 1..name_col + 1 + width)
        .map(|col| {
            let cell = grid.cell(row, col);
            if cell.is_truthy() {
                cell.to_string().trim().to_string()
            } else {
                String::new()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_numeric_empty_and_summary_names() {
        assert_eq!(employee_name(&CellValue::Empty), None);
        assert_eq!(employee_name(&CellValue::Int(12)), None);
        assert_eq!(employee_name(&CellValue::Float(1.5)), None);
        assert_eq!(employee_name(&CellValue::Text("   ".into())), None);
        assert_eq!(employee_name(&CellValue::Text("夜班限休人数".into())), None);
        assert_eq!(employee_name(&CellValue::Text(" 已休数目 ".into())), None);
        assert_eq!(
            employee_name(&CellValue::Text("  Jessica ".into())),
            Some("Jessica".to_string())
        );
    }

    #[test]
    fn header_skips_gaps() {
        let grid = RawGrid::from_rows(vec![vec!["", "Name", "1/1", "", "1/3"]]);
        let dates = header_dates(&grid, 2);
        assert_eq!(
            dates,
            vec![CellValue::Text("1/1".into()), CellValue::Text("1/3".into())]
        );
    }

    #[test]
    fn shift_codes_trim_and_blank() {
        let grid = RawGrid::from_rows(vec![vec!["", "Ann", " n1 ", "", "O"]]);
        assert_eq!(shift_codes(&grid, 1, 2, 3), vec!["n1", "", "O"]);
        assert_eq!(shift_codes(&grid, 1, 2, 0), Vec::<String>::new());
    }
}
