use std::collections::BTreeMap;

use super::regexes::regex_action_button;
use crate::types::TriggerControl;

/// Collects `actionButton("id", "Label")` declarations, first occurrence of
/// each id wins. Ids built at runtime (`ns("x")`, variables) are skipped.
pub fn collect_triggers(lines: &[&str]) -> BTreeMap<String, TriggerControl> {
    let mut triggers = BTreeMap::new();
    for (idx, line) in lines.iter().enumerate() {
        let Some(caps) = regex_action_button().captures(line) else {
            continue;
        };
        let id = caps[1].to_string();
        if triggers.contains_key(&id) {
            continue;
        }
        let label = caps
            .get(2)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();
        triggers.insert(
            id.clone(),
            TriggerControl {
                id,
                label,
                declared_at_line: idx + 1,
            },
        );
    }
    triggers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_each_declaration_with_its_line() {
        let src = [
            "ui <- fluidPage(",
            r#"  actionButton("save_btn", "Save"),"#,
            r#"  actionButton("cancel_btn", " Cancel "),"#,
            r#"  actionButton("help_btn")"#,
            ")",
        ];
        let triggers = collect_triggers(&src);
        assert_eq!(triggers.len(), 3);
        assert_eq!(triggers["save_btn"].declared_at_line, 2);
        assert_eq!(triggers["save_btn"].label, "Save");
        assert_eq!(triggers["cancel_btn"].label, "Cancel");
        assert_eq!(triggers["help_btn"].label, "");
        assert_eq!(triggers["help_btn"].declared_at_line, 4);
    }

    #[test]
    fn first_declaration_wins() {
        let src = [
            r#"actionButton("dup_btn", "First")"#,
            r#"actionButton("dup_btn", "Second")"#,
        ];
        let triggers = collect_triggers(&src);
        assert_eq!(triggers.len(), 1);
        assert_eq!(triggers["dup_btn"].label, "First");
        assert_eq!(triggers["dup_btn"].declared_at_line, 1);
    }

    #[test]
    fn dynamic_ids_are_skipped() {
        let src = [
            r#"actionButton(ns("inner_btn"), "Inner")"#,
            r#"actionButton(paste0("row_", i), "Row")"#,
            r#"actionButton(inputId = "named_btn", "Named")"#,
        ];
        assert!(collect_triggers(&src).is_empty());
    }

    #[test]
    fn non_literal_label_leaves_label_empty() {
        let src = [r#"actionButton("go_btn", label_text)"#];
        let triggers = collect_triggers(&src);
        assert_eq!(triggers["go_btn"].label, "");
    }
}
