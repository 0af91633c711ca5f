#![forbid(unsafe_code)]
use shiftroster::{
    analyze_employee, list_employees, parse_roster, CellValue, ParseOptions, RawGrid,
    RosterError, ShiftCategory,
};

fn header() -> Vec<&'static str> {
    vec!["", "Name", "1/1", "1/2", "1/3"]
}

fn weekdays() -> Vec<&'static str> {
    vec!["", "", "Mon", "Tue", "Wed"]
}

fn opts() -> ParseOptions {
    ParseOptions::new(3, 2).unwrap()
}

#[test]
fn single_employee_stats() {
    let grid = RawGrid::from_rows(vec![header(), weekdays(), vec!["", "Ann", "N1", "O", "M2"]]);
    let snapshot = parse_roster(&grid, opts()).unwrap();
    let analysis = analyze_employee("Ann", &snapshot).unwrap();

    assert_eq!(analysis.total_days, 3);
    assert_eq!(analysis.stats[ShiftCategory::NightShift], 1);
    assert_eq!(analysis.stats[ShiftCategory::RestDay], 1);
    assert_eq!(analysis.stats[ShiftCategory::MorningShift], 1);
    for c in [
        ShiftCategory::AfternoonShift,
        ShiftCategory::Leave,
        ShiftCategory::BusinessTrip,
        ShiftCategory::SickLeave,
        ShiftCategory::Other,
        ShiftCategory::Unknown,
    ] {
        assert_eq!(analysis.stats[c], 0, "{c:?}");
    }
}

#[test]
fn blank_cells_kept_in_details_but_not_counted() {
    let grid = RawGrid::from_rows(vec![header(), weekdays(), vec!["", "Bob", "N1", "", "O"]]);
    let snapshot = parse_roster(&grid, opts()).unwrap();
    let analysis = analyze_employee("Bob", &snapshot).unwrap();

    assert_eq!(analysis.total_days, 2);
    assert_eq!(analysis.stats.total(), 2);
    assert_eq!(analysis.shift_details.len(), 3);
    assert_eq!(analysis.shift_details[1].date, CellValue::Text("1/2".into()));
    assert_eq!(analysis.shift_details[1].code, "");
}

#[test]
fn duplicate_name_last_row_wins() {
    let mut rows = vec![header(), weekdays(), vec!["", "Ann", "N1", "N2", "N3"]];
    for name in ["Bob", "Cid", "Dee", "Eve", "Fay", "Gus"] {
        rows.push(vec!["", name, "O", "O", "O"]);
    }
    rows.push(vec!["", "Ann", "M1", "A1", "SL"]);
    assert_eq!(rows.len(), 10);

    let snapshot = parse_roster(&RawGrid::from_rows(rows), opts()).unwrap();
    let names = list_employees(&snapshot);
    assert_eq!(names.iter().filter(|n| *n == "Ann").count(), 1);
    assert_eq!(names[0], "Ann");
    assert_eq!(snapshot.get("Ann").unwrap().shifts, ["M1", "A1", "SL"]);
}

#[test]
fn unknown_employee_is_not_found() {
    let grid = RawGrid::from_rows(vec![header(), weekdays(), vec!["", "Ann", "N1", "O", "M2"]]);
    let snapshot = parse_roster(&grid, opts()).unwrap();
    let err = analyze_employee("Nonexistent", &snapshot).unwrap_err();
    assert!(matches!(err, RosterError::EmployeeNotFound(ref n) if n == "Nonexistent"));
    // pas de normalisation côté recherche
    assert!(analyze_employee(" Ann", &snapshot).unwrap_err().is_not_found());
}

#[test]
fn list_skips_empty_numeric_and_summary_rows() {
    let grid = RawGrid::from_rows(vec![
        vec![CellValue::Empty, "Name".into(), "1/1".into(), "1/2".into()],
        vec![CellValue::Empty, CellValue::Empty, "Mon".into(), "Tue".into()],
        vec![CellValue::Empty, "  Ann  ".into(), "N1".into(), "O".into()],
        vec![CellValue::Empty, CellValue::Empty, "N1".into(), "O".into()],
        vec![CellValue::Empty, CellValue::Int(42), "N1".into(), "O".into()],
        vec![CellValue::Empty, "Bob".into(), "A".into(), "P".into()],
        vec![CellValue::Empty, "夜班限休人数".into(), CellValue::Int(2), CellValue::Int(1)],
        vec![CellValue::Empty, "已休数目".into(), CellValue::Int(0), CellValue::Int(3)],
    ]);
    let snapshot = parse_roster(&grid, opts()).unwrap();
    assert_eq!(list_employees(&snapshot), ["Ann", "Bob"]);
}

#[test]
fn record_lengths_always_match() {
    // trou dans l'en-tête : 2 dates pour 3 colonnes de codes
    let grid = RawGrid::from_rows(vec![
        vec!["", "Name", "1/1", "", "1/3"],
        vec!["", "", "", "", ""],
        vec!["", "Ann", "N1", "O", "M2"],
        vec!["", "Bob", "N1"],
    ]);
    let snapshot = parse_roster(&grid, opts()).unwrap();
    for record in snapshot.employees() {
        assert_eq!(record.shifts.len(), record.dates.len(), "{}", record.name);
        assert_eq!(record.shifts.len(), 2);
    }
    assert_eq!(snapshot.get("Bob").unwrap().shifts, ["N1", ""]);
}

#[test]
fn numeric_shift_cells_are_stringified() {
    let grid = RawGrid::from_rows(vec![
        vec![CellValue::Empty, "Name".into(), "1/1".into(), "1/2".into()],
        vec![CellValue::Empty, "Ann".into(), CellValue::Int(8), CellValue::Int(0)],
    ]);
    let snapshot = parse_roster(&grid, ParseOptions::new(2, 2).unwrap()).unwrap();
    let analysis = analyze_employee("Ann", &snapshot).unwrap();
    assert_eq!(snapshot.get("Ann").unwrap().shifts, ["8", ""]);
    assert_eq!(analysis.total_days, 1);
    assert_eq!(analysis.stats[ShiftCategory::Other], 1);
}

#[test]
fn zero_options_are_rejected() {
    assert!(matches!(
        ParseOptions::new(0, 2),
        Err(RosterError::InvalidOptions(_))
    ));
    assert!(matches!(
        ParseOptions::new(3, 0),
        Err(RosterError::InvalidOptions(_))
    ));
}
