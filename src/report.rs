use crate::classifier::ShiftCategory;
use crate::parser::EmployeeAnalysis;
use std::fmt::Write;

/// Nombre maximal de noms dans une réponse "liste".
pub const LIST_LIMIT: usize = 50;

/// Libellé affiché d'une catégorie.
pub fn label(category: ShiftCategory) -> &'static str {
    match category {
        ShiftCategory::NightShift => "夜班",
        ShiftCategory::MorningShift => "早班",
        ShiftCategory::AfternoonShift => "中班",
        ShiftCategory::RestDay => "休息",
        ShiftCategory::Leave => "休假",
        ShiftCategory::BusinessTrip => "出差",
        ShiftCategory::SickLeave => "病假",
        ShiftCategory::Other => "其他",
        ShiftCategory::Unknown => "未知",
    }
}

pub fn emoji(category: ShiftCategory) -> &'static str {
    match category {
        ShiftCategory::NightShift => "🌙",
        ShiftCategory::MorningShift => "🌅",
        ShiftCategory::AfternoonShift => "🌤️",
        ShiftCategory::RestDay => "😴",
        ShiftCategory::Leave => "🏖️",
        ShiftCategory::BusinessTrip => "✈️",
        ShiftCategory::SickLeave => "🤒",
        ShiftCategory::Other | ShiftCategory::Unknown => "📌",
    }
}

/// Permet de customiser le rendu d'une analyse (message chat, terminal…).
pub trait SummaryRenderer {
    fn render(&self, analysis: &EmployeeAnalysis) -> String;
}

/// Réponse destinée à la messagerie.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextSummary;

impl SummaryRenderer for TextSummary {
    fn render(&self, analysis: &EmployeeAnalysis) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "📋 {} 的班表", analysis.name);
        let _ = writeln!(out, "{}", "=".repeat(30));
        let _ = writeln!(out, "📅 总天数: {} 天", analysis.total_days);
        out.push('\n');
        out.push_str("📊 班别统计:\n");
        for (category, count) in analysis.stats.non_zero() {
            let _ = writeln!(out, "  {} {}: {} 天", emoji(category), label(category), count);
        }
        out
    }
}

/// Bloc texte pour le terminal, avec le détail jour par jour en option.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSummary {
    pub with_details: bool,
}

impl SummaryRenderer for ConsoleSummary {
    fn render(&self, analysis: &EmployeeAnalysis) -> String {
        let rule = "=".repeat(60);
        let mut out = String::new();
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "员工: {}", analysis.name);
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "总天数: {} 天", analysis.total_days);
        out.push('\n');
        out.push_str("班别统计:\n");
        let _ = writeln!(out, "{}", "-".repeat(60));
        for (category, count) in analysis.stats.non_zero() {
            let _ = writeln!(out, "  {}: {} 天", label(category), count);
        }
        if self.with_details {
            out.push('\n');
            out.push_str("每日明细:\n");
            for detail in &analysis.shift_details {
                let code = if detail.code.is_empty() { "-" } else { detail.code.as_str() };
                let _ = writeln!(out, "  {:<12} {}", detail.date.to_string(), code);
            }
        }
        out
    }
}

pub fn not_found_message(name: &str) -> String {
    format!("找不到员工: {name}")
}

/// Liste numérotée par puces, tronquée à [`LIST_LIMIT`] noms.
pub fn employee_list_message<S: AsRef<str>>(names: &[S]) -> String {
    let mut out = String::from("👥 员工列表：\n\n");
    let shown: Vec<String> = names
        .iter()
        .take(LIST_LIMIT)
        .map(|n| format!("• {}", n.as_ref()))
        .collect();
    out.push_str(&shown.join("\n"));
    if names.len() > LIST_LIMIT {
        let _ = write!(out, "\n\n... 及其他 {} 位员工", names.len() - LIST_LIMIT);
    }
    out
}

pub fn help_message() -> String {
    let mut out = String::from("🤖 班表查询 Bot 使用说明\n\n");
    out.push_str("📝 可用命令：\n");
    out.push_str("• 查询 [姓名] - 查询指定员工的班表\n");
    out.push_str("• 员工列表 - 显示所有员工\n");
    out.push_str("• 帮助 - 显示此帮助信息\n\n");
    out.push_str("📊 班别说明：\n");
    for (codes, category) in [
        ("N/N1/N2/N3", ShiftCategory::NightShift),
        ("M/M1/M2/M3", ShiftCategory::MorningShift),
        ("A/A1/A2", ShiftCategory::AfternoonShift),
        ("O", ShiftCategory::RestDay),
        ("P/AL/ML/PL", ShiftCategory::Leave),
        ("SL", ShiftCategory::SickLeave),
        ("BTD", ShiftCategory::BusinessTrip),
    ] {
        let _ = writeln!(out, "• {codes} = {} {}", label(category), emoji(category));
    }
    out.push_str("\n示例：\n查询 Jessica\n");
    out
}
