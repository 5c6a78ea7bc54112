//! Lookup tables the analyzer is built from.
//!
//! The built-in values describe a Shiny project-management app; a config file
//! can extend every table (see [`crate::config`]).

use std::collections::HashSet;

use super::blocks::BlockScanMode;
use super::effects::EffectClassifier;
use super::purpose::PurposeInferencer;

/// Language keywords and ubiquitous built-ins never reported as calls.
pub const KEYWORDS: &[&str] = &[
    "if",
    "for",
    "while",
    "repeat",
    "function",
    "switch",
    "return",
    "tryCatch",
    "local",
    "list",
    "c",
    "NULL",
    "TRUE",
    "FALSE",
    "paste",
    "paste0",
    "sprintf",
    "nrow",
    "ncol",
    "as.numeric",
    "as.character",
    "as.logical",
    "trimws",
    "which",
    "unique",
    "sort",
    "setNames",
    "class",
    "style",
    "data.frame",
    "reactive",
    "reactiveVal",
    "observeEvent",
    "observe",
    "req",
    "is.null",
    "is.na",
    "length",
];

/// Calls whose presence marks a side effect or a domain-significant action.
pub const IMPORTANT_CALLS: &[&str] = &[
    "dbExecute",
    "dbGetQuery",
    "dbDisconnect",
    "showModal",
    "removeModal",
    "showNotification",
    "send_project_creation_email",
    "send_project_cost_notification_email",
    "send_data_released_email",
    "load_projects",
    "load_admin_data",
    "validate_and_repair_database",
];

/// Trigger ids drawn in the diagram and listed in the core table.
pub const CORE_WORKFLOW_IDS: &[&str] = &[
    "new_project_btn",
    "create_project_btn",
    "edit_project_btn",
    "update_project_btn",
    "send_notification_btn",
    "delete_project_btn",
    "confirm_delete_btn",
    "update_status_btn",
    "confirm_status_update_btn",
    "manage_announcements_btn",
];

#[derive(Debug, Clone)]
pub struct AnalyzerTables {
    pub keywords: HashSet<String>,
    pub important_calls: HashSet<String>,
    pub core_workflow_ids: HashSet<String>,
    pub effects: EffectClassifier,
    pub purposes: PurposeInferencer,
    pub block_mode: BlockScanMode,
}

impl Default for AnalyzerTables {
    fn default() -> Self {
        Self {
            keywords: to_set(KEYWORDS),
            important_calls: to_set(IMPORTANT_CALLS),
            core_workflow_ids: to_set(CORE_WORKFLOW_IDS),
            effects: EffectClassifier::builtin(),
            purposes: PurposeInferencer::builtin(),
            block_mode: BlockScanMode::default(),
        }
    }
}

impl AnalyzerTables {
    pub fn is_keyword(&self, name: &str) -> bool {
        self.keywords.contains(name)
    }

    pub fn is_important(&self, name: &str) -> bool {
        self.important_calls.contains(name)
    }

    pub fn is_core(&self, trigger_id: &str) -> bool {
        self.core_workflow_ids.contains(trigger_id)
    }
}

fn to_set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_builtin_tables() {
        let tables = AnalyzerTables::default();
        assert!(tables.is_keyword("paste0"));
        assert!(tables.is_keyword("observeEvent"));
        assert!(!tables.is_keyword("dbExecute"));
        assert!(tables.is_important("dbExecute"));
        assert!(tables.is_core("new_project_btn"));
        assert!(!tables.is_core("login_btn"));
        assert_eq!(tables.block_mode, BlockScanMode::Naive);
    }

    #[test]
    fn every_effect_call_is_important() {
        let tables = AnalyzerTables::default();
        for (call, _) in tables.effects.entries() {
            assert!(tables.is_important(call), "{call} missing from allowlist");
        }
    }
}
