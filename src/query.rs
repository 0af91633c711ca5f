//! Aiguillage des messages texte reçus par le bot.

use crate::parser::{analyze_employee, list_employees, RosterError};
use crate::report::{
    employee_list_message, help_message, not_found_message, SummaryRenderer, TextSummary,
};
use crate::source::RosterSource;

const HELP_WORDS: [&str; 5] = ["帮助", "help", "说明", "?", "？"];
const LIST_WORDS: [&str; 3] = ["员工列表", "所有员工", "list"];
const QUERY_PREFIX: &str = "查询";

pub const LOAD_FAILED_MESSAGE: &str = "❌ 班表文件载入失败，请联系管理员";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    /// Nom recherché ; vide si l'utilisateur n'a tapé que le préfixe.
    Query(String),
    List,
    Greeting,
}

impl Command {
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if HELP_WORDS.contains(&text) {
            Command::Help
        } else if let Some(rest) = text.strip_prefix(QUERY_PREFIX) {
            Command::Query(rest.trim().to_string())
        } else if LIST_WORDS.contains(&text) {
            Command::List
        } else {
            Command::Greeting
        }
    }
}

fn greeting_message() -> String {
    let mut out = String::from("👋 你好！\n\n");
    out.push_str("我可以帮你查询班表信息。\n");
    out.push_str("输入「帮助」查看使用说明。\n");
    out.push_str("输入「查询 [姓名]」查询班表。");
    out
}

/// Réponse texte à un message entrant ; le tableau est rechargé à chaque appel.
///
/// Un tableau sans aucun employé est traité comme un échec de chargement.
pub fn respond(text: &str, source: &dyn RosterSource) -> String {
    let snapshot = match source.load() {
        Ok(s) if s.is_empty() => {
            tracing::warn!("roster loaded but holds no employee");
            return LOAD_FAILED_MESSAGE.to_string();
        }
        Ok(s) => s,
        Err(err) => {
            tracing::warn!(error = %err, "roster load failed");
            return LOAD_FAILED_MESSAGE.to_string();
        }
    };

    match Command::parse(text) {
        Command::Help => help_message(),
        Command::Query(name) if name.is_empty() => {
            "请输入要查询的姓名，例如：\n查询 Jessica".to_string()
        }
        Command::Query(name) => match analyze_employee(&name, &snapshot) {
            Ok(analysis) => TextSummary.render(&analysis),
            Err(RosterError::EmployeeNotFound(name)) => not_found_message(&name),
            Err(err) => format!("❌ {err}"),
        },
        Command::List => employee_list_message(&list_employees(&snapshot)),
        Command::Greeting => greeting_message(),
    }
}
