//! Purpose sentences for handlers.
//!
//! Resolution is a decision table, first match wins:
//! 1. exact trigger id,
//! 2. identifier shape (prefix / prefix+suffix / substrings), in table order,
//! 3. detected side effects (`WritesDb`, then `OpensModal`, then a generic line).
//!
//! Earlier rules shadow later ones: `delete_notification_btn` stops at
//! `delete_*_btn` and never reaches the send/notification substring rule.

use std::collections::{BTreeSet, HashMap};

use super::effects::EffectKind;

pub const FALLBACK_WRITES_DB: &str = "Processes input and writes changes to the database.";
pub const FALLBACK_OPENS_MODAL: &str = "Opens an interaction modal for user/admin action.";
pub const FALLBACK_GENERIC: &str = "Handle this UI event and update app state.";

const EXACT_RULES: &[(&str, &str)] = &[
    (
        "new_project_btn",
        "Open the Create Project modal and prefill lookup choices.",
    ),
    (
        "create_project_btn",
        "Validate form inputs, insert a new project, and send initial project email.",
    ),
    (
        "edit_project_btn",
        "Open the Edit Project modal for the selected project.",
    ),
    (
        "update_project_btn",
        "Save edits to selected project (including additional cost for admins).",
    ),
    (
        "send_notification_btn",
        "Send admin-triggered cost notification email for the selected project.",
    ),
    (
        "update_status_btn",
        "Open status update modal for selected project.",
    ),
    (
        "confirm_status_update_btn",
        "Persist new project status and trigger release email when applicable.",
    ),
    (
        "delete_project_btn",
        "Open delete confirmation for selected project.",
    ),
    (
        "confirm_delete_btn",
        "Delete selected project from the database.",
    ),
    ("manage_announcements_btn", "Open Landing Text admin panel."),
    (
        "validate_db_btn",
        "Run database validation checks and report issues.",
    ),
    (
        "restore_db_btn",
        "Start database restore flow from uploaded backup.",
    ),
    (
        "confirm_restore_btn",
        "Execute restore after confirmation and reopen app state.",
    ),
    (
        "login_btn",
        "Authenticate local login and initialize session state.",
    ),
    (
        "logout_btn",
        "End local session or show LDAP end-session guidance.",
    ),
    (
        "register_btn",
        "Validate registration fields and create a new user.",
    ),
];

/// Shape of a trigger identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdPattern {
    Prefix(&'static str),
    PrefixSuffix(&'static str, &'static str),
    ContainsAll(&'static [&'static str]),
}

impl IdPattern {
    pub fn matches(&self, id: &str) -> bool {
        match self {
            IdPattern::Prefix(prefix) => id.starts_with(prefix),
            IdPattern::PrefixSuffix(prefix, suffix) => {
                id.starts_with(prefix) && id.ends_with(suffix)
            }
            IdPattern::ContainsAll(parts) => parts.iter().all(|part| id.contains(part)),
        }
    }
}

const PATTERN_RULES: &[(IdPattern, &str)] = &[
    (
        IdPattern::Prefix("manage_"),
        "Open admin management modal for this reference table.",
    ),
    (
        IdPattern::Prefix("add_"),
        "Validate new entry fields and insert a new row.",
    ),
    (
        IdPattern::PrefixSuffix("edit_", "_btn"),
        "Open edit modal for currently selected row.",
    ),
    (
        IdPattern::PrefixSuffix("update_", "_btn"),
        "Apply update from modal form to the selected row.",
    ),
    (
        IdPattern::PrefixSuffix("delete_", "_btn"),
        "Open delete confirmation dialog for selected row.",
    ),
    (
        IdPattern::PrefixSuffix("confirm_delete_", "_btn"),
        "Delete selected row after confirmation.",
    ),
    (
        IdPattern::ContainsAll(&["send", "notification"]),
        "Send notification to configured recipients.",
    ),
];

#[derive(Debug, Clone)]
pub struct PurposeInferencer {
    exact: HashMap<String, String>,
    patterns: Vec<(IdPattern, String)>,
}

impl Default for PurposeInferencer {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PurposeInferencer {
    pub fn builtin() -> Self {
        Self {
            exact: EXACT_RULES
                .iter()
                .map(|(id, sentence)| (id.to_string(), sentence.to_string()))
                .collect(),
            patterns: PATTERN_RULES
                .iter()
                .map(|(pattern, sentence)| (pattern.clone(), sentence.to_string()))
                .collect(),
        }
    }

    /// Registers (or replaces) the sentence for an exact trigger id.
    pub fn set_exact(&mut self, id: impl Into<String>, sentence: impl Into<String>) {
        self.exact.insert(id.into(), sentence.into());
    }

    pub fn exact_sentence(&self, id: &str) -> Option<&str> {
        self.exact.get(id).map(String::as_str)
    }

    /// Always returns a non-empty sentence. `label` and `key_calls` are part of
    /// the contract but no current rule consults them.
    pub fn infer(
        &self,
        trigger_id: &str,
        _label: &str,
        _key_calls: &[String],
        effects: &BTreeSet<EffectKind>,
    ) -> String {
        if let Some(sentence) = self.exact.get(trigger_id) {
            if !sentence.trim().is_empty() {
                return sentence.clone();
            }
        }

        if let Some((_, sentence)) = self
            .patterns
            .iter()
            .find(|(pattern, _)| pattern.matches(trigger_id))
        {
            return sentence.clone();
        }

        if effects.contains(&EffectKind::WritesDb) {
            FALLBACK_WRITES_DB.to_string()
        } else if effects.contains(&EffectKind::OpensModal) {
            FALLBACK_OPENS_MODAL.to_string()
        } else {
            FALLBACK_GENERIC.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effects(kinds: &[EffectKind]) -> BTreeSet<EffectKind> {
        kinds.iter().copied().collect()
    }

    #[test]
    fn exact_rule_wins_regardless_of_other_inputs() {
        let inferencer = PurposeInferencer::builtin();
        let sentence = inferencer.infer(
            "new_project_btn",
            "Something else",
            &["dbExecute".to_string()],
            &effects(&[EffectKind::WritesDb, EffectKind::SendsEmail]),
        );
        assert_eq!(
            sentence,
            "Open the Create Project modal and prefill lookup choices."
        );
    }

    #[test]
    fn every_exact_rule_is_returned_verbatim() {
        let inferencer = PurposeInferencer::builtin();
        for (id, sentence) in EXACT_RULES {
            assert_eq!(
                inferencer.infer(id, "", &[], &effects(&[EffectKind::OpensModal])),
                *sentence
            );
        }
    }

    #[test]
    fn manage_prefix_beats_effects() {
        let inferencer = PurposeInferencer::builtin();
        assert_eq!(
            inferencer.infer(
                "manage_users_btn",
                "",
                &[],
                &effects(&[EffectKind::WritesDb])
            ),
            "Open admin management modal for this reference table."
        );
    }

    #[test]
    fn shape_rules_follow_table_order() {
        let inferencer = PurposeInferencer::builtin();
        let none = BTreeSet::new();
        assert_eq!(
            inferencer.infer("add_lab_btn", "", &[], &none),
            "Validate new entry fields and insert a new row."
        );
        assert_eq!(
            inferencer.infer("edit_lab_btn", "", &[], &none),
            "Open edit modal for currently selected row."
        );
        assert_eq!(
            inferencer.infer("update_lab_btn", "", &[], &none),
            "Apply update from modal form to the selected row."
        );
        assert_eq!(
            inferencer.infer("delete_notification_btn", "", &[], &none),
            "Open delete confirmation dialog for selected row."
        );
        assert_eq!(
            inferencer.infer("confirm_delete_lab_btn", "", &[], &none),
            "Delete selected row after confirmation."
        );
        assert_eq!(
            inferencer.infer("resend_notification_link", "", &[], &none),
            "Send notification to configured recipients."
        );
    }

    #[test]
    fn edit_without_btn_suffix_falls_through() {
        let inferencer = PurposeInferencer::builtin();
        assert_eq!(
            inferencer.infer("edit_lab", "", &[], &effects(&[EffectKind::OpensModal])),
            FALLBACK_OPENS_MODAL
        );
    }

    #[test]
    fn effect_fallbacks() {
        let inferencer = PurposeInferencer::builtin();
        assert_eq!(
            inferencer.infer(
                "foo_bar_btn",
                "",
                &["dbExecute".to_string()],
                &effects(&[EffectKind::WritesDb, EffectKind::OpensModal])
            ),
            FALLBACK_WRITES_DB
        );
        assert_eq!(
            inferencer.infer("foo_bar_btn", "", &[], &effects(&[EffectKind::OpensModal])),
            FALLBACK_OPENS_MODAL
        );
        assert_eq!(
            inferencer.infer("foo_bar_btn", "", &[], &BTreeSet::new()),
            FALLBACK_GENERIC
        );
    }

    #[test]
    fn configured_sentence_replaces_builtin() {
        let mut inferencer = PurposeInferencer::builtin();
        inferencer.set_exact("login_btn", "Sign in via SSO.");
        inferencer.set_exact("archive_btn", "Archive the selected project.");
        let none = BTreeSet::new();
        assert_eq!(inferencer.infer("login_btn", "", &[], &none), "Sign in via SSO.");
        assert_eq!(
            inferencer.infer("archive_btn", "", &[], &none),
            "Archive the selected project."
        );
    }

    #[test]
    fn blank_configured_sentence_is_ignored() {
        let mut inferencer = PurposeInferencer::builtin();
        inferencer.set_exact("odd_btn", "   ");
        assert_eq!(
            inferencer.infer("odd_btn", "", &[], &BTreeSet::new()),
            FALLBACK_GENERIC
        );
    }
}
