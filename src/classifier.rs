//! Classement des codes d'équipe (N1, M2, A, O, SL…) en catégories fermées.

use crate::model::CellValue;
use std::ops::Index;

/// Catégorie d'une journée de tableau de service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftCategory {
    NightShift,
    MorningShift,
    AfternoonShift,
    RestDay,
    Leave,
    BusinessTrip,
    SickLeave,
    Other,
    Unknown,
}

impl ShiftCategory {
    /// Toutes les catégories, dans l'ordre d'affichage.
    pub const ALL: [ShiftCategory; 9] = [
        ShiftCategory::NightShift,
        ShiftCategory::MorningShift,
        ShiftCategory::AfternoonShift,
        ShiftCategory::RestDay,
        ShiftCategory::Leave,
        ShiftCategory::BusinessTrip,
        ShiftCategory::SickLeave,
        ShiftCategory::Other,
        ShiftCategory::Unknown,
    ];

    fn slot(self) -> usize {
        self as usize
    }
}

/// Classe un code brut. `None` ou `""` => `Unknown`.
///
/// Les codes de congé exacts passent avant les préfixes (`AL` n'est pas un
/// après-midi).
pub fn classify<'a>(code: impl Into<Option<&'a str>>) -> ShiftCategory {
    let Some(raw) = code.into() else {
        return ShiftCategory::Unknown;
    };
    if raw.is_empty() {
        return ShiftCategory::Unknown;
    }

    let code = raw.trim().to_uppercase();
    match code.as_str() {
        "ML" | "AL" | "PL" => ShiftCategory::Leave,
        "SL" => ShiftCategory::SickLeave,
        "O" => ShiftCategory::RestDay,
        "P" => ShiftCategory::Leave,
        "BTD" => ShiftCategory::BusinessTrip,
        c if c.starts_with('N') => ShiftCategory::NightShift,
        c if c.starts_with('M') => ShiftCategory::MorningShift,
        c if c.starts_with('A') => ShiftCategory::AfternoonShift,
        _ => ShiftCategory::Other,
    }
}

/// Classe une cellule : seules les valeurs texte ont un code.
pub fn classify_cell(cell: &CellValue) -> ShiftCategory {
    classify(cell.as_text())
}

/// Compteurs par catégorie (toutes présentes, initialisées à zéro).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    counts: [usize; ShiftCategory::ALL.len()],
}

impl CategoryCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, category: ShiftCategory) {
        self.counts[category.slot()] += 1;
    }

    pub fn get(&self, category: ShiftCategory) -> usize {
        self.counts[category.slot()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Paires (catégorie, nombre) dans l'ordre d'affichage, zéros inclus.
    pub fn iter(&self) -> impl Iterator<Item = (ShiftCategory, usize)> + '_ {
        ShiftCategory::ALL.iter().map(|&c| (c, self.get(c)))
    }

    /// Comme [`iter`](Self::iter) mais sans les catégories vides.
    pub fn non_zero(&self) -> impl Iterator<Item = (ShiftCategory, usize)> + '_ {
        self.iter().filter(|(_, n)| *n > 0)
    }
}

impl Index<ShiftCategory> for CategoryCounts {
    type Output = usize;

    fn index(&self, category: ShiftCategory) -> &usize {
        &self.counts[category.slot()]
    }
}

/// Compte chaque code selon sa catégorie ; `total() == codes.len()`.
pub fn aggregate<I, S>(codes: I) -> CategoryCounts
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = CategoryCounts::new();
    for code in codes {
        counts.record(classify(code.as_ref()));
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn night_morning_afternoon_prefixes() {
        for c in ["N", "N1", "N2", "N3"] {
            assert_eq!(classify(c), ShiftCategory::NightShift, "{c}");
        }
        for c in ["M", "M1", "M2", "M3"] {
            assert_eq!(classify(c), ShiftCategory::MorningShift, "{c}");
        }
        for c in ["A", "A1", "A2"] {
            assert_eq!(classify(c), ShiftCategory::AfternoonShift, "{c}");
        }
    }

    #[test]
    fn leave_codes_win_over_prefix_rules() {
        assert_eq!(classify("AL"), ShiftCategory::Leave);
        assert_eq!(classify("ML"), ShiftCategory::Leave);
        assert_eq!(classify("PL"), ShiftCategory::Leave);
        assert_eq!(classify("P"), ShiftCategory::Leave);
        assert_eq!(classify("SL"), ShiftCategory::SickLeave);
        assert_eq!(classify("BTD"), ShiftCategory::BusinessTrip);
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(classify("o"), ShiftCategory::RestDay);
        assert_eq!(classify(" O "), ShiftCategory::RestDay);
        assert_eq!(classify("O"), ShiftCategory::RestDay);
        assert_eq!(classify(" al"), ShiftCategory::Leave);
        assert_eq!(classify("n2 "), ShiftCategory::NightShift);
    }

    #[test]
    fn unknown_only_for_missing_or_empty() {
        assert_eq!(classify(None), ShiftCategory::Unknown);
        assert_eq!(classify(""), ShiftCategory::Unknown);
        assert_eq!(classify("XYZ"), ShiftCategory::Other);
        assert_eq!(classify("  "), ShiftCategory::Other);
        assert_eq!(classify_cell(&CellValue::Int(3)), ShiftCategory::Unknown);
        assert_eq!(
            classify_cell(&CellValue::Text("m1".into())),
            ShiftCategory::MorningShift
        );
    }

    #[test]
    fn aggregate_counts_every_element() {
        let codes = ["N1", "N2", "O", "", "XYZ", "SL", "A2", "AL"];
        let counts = aggregate(codes);
        assert_eq!(counts.total(), codes.len());
        assert_eq!(counts[ShiftCategory::NightShift], 2);
        assert_eq!(counts[ShiftCategory::Unknown], 1);
        assert_eq!(counts[ShiftCategory::Leave], 1);
        assert_eq!(counts[ShiftCategory::AfternoonShift], 1);
        assert_eq!(counts.iter().count(), ShiftCategory::ALL.len());
    }

    #[test]
    fn aggregate_empty_is_all_zero() {
        let counts = aggregate(Vec::<String>::new());
        assert_eq!(counts.total(), 0);
        assert!(counts.non_zero().next().is_none());
    }
}
