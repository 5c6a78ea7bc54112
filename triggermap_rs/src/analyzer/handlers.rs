use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use super::blocks::{BlockScanMode, find_block_end};
use super::calls::{extract_calls, key_calls};
use super::extract::{extract_notification_messages, extract_other_inputs, extract_sql_targets};
use super::regexes::regex_observe_event;
use super::tables::AnalyzerTables;
use crate::types::{ButtonMeta, HandlerAnalysis, HandlerBlock, TriggerControl};

/// One block per `observeEvent(input$id, ...)` line, in source order.
pub fn collect_handler_blocks(lines: &[&str], mode: BlockScanMode) -> Vec<HandlerBlock> {
    let mut blocks = Vec::new();
    for (start_idx, line) in lines.iter().enumerate() {
        let Some(caps) = regex_observe_event().captures(line) else {
            continue;
        };
        let end_idx = find_block_end(lines, start_idx, mode);
        let raw_text = lines
            .get(start_idx..=end_idx)
            .map(|slice| slice.join("\n"))
            .unwrap_or_default();
        blocks.push(HandlerBlock {
            trigger_id: caps[1].to_string(),
            start_line: start_idx + 1,
            end_line: end_idx + 1,
            raw_text,
        });
    }
    blocks
}

pub fn analyze_handler(
    block: &HandlerBlock,
    triggers: &BTreeMap<String, TriggerControl>,
    custom_functions: &BTreeSet<String>,
    tables: &AnalyzerTables,
) -> HandlerAnalysis {
    let calls = extract_calls(&block.raw_text, tables);
    let key_calls = key_calls(&calls, custom_functions, tables);
    let side_effects = tables.effects.classify(&calls);
    let other_inputs = extract_other_inputs(&block.raw_text, &block.trigger_id);
    let sql_targets = extract_sql_targets(&block.raw_text);
    let notification_samples = extract_notification_messages(&block.raw_text);

    let button_meta = triggers.get(&block.trigger_id).map(|t| ButtonMeta {
        line: t.declared_at_line,
        label: t.label.clone(),
    });
    let label = button_meta.as_ref().map(|m| m.label.as_str()).unwrap_or("");
    let purpose = tables.purposes.infer(
        &block.trigger_id,
        label,
        key_calls.as_slice(),
        &side_effects,
    );

    debug!(
        trigger = %block.trigger_id,
        lines = %format!("{}-{}", block.start_line, block.end_line),
        calls = calls.len(),
        effects = side_effects.len(),
        bound = button_meta.is_some(),
        "analyzed handler"
    );

    HandlerAnalysis {
        trigger_id: block.trigger_id.clone(),
        button_meta,
        handler_line: block.start_line,
        handler_end_line: block.end_line,
        key_calls,
        side_effects,
        other_inputs,
        sql_targets,
        notification_samples,
        purpose,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::effects::EffectKind;

    const SRC: &str = r#"save_row <- function(con, row) {
  dbExecute(con, "INSERT INTO rows VALUES (?)", row)
}
observeEvent(input$add_row_btn, {
  row <- input$row_name
  save_row(con, row)
  showNotification("Row added")
})
observeEvent(input$ghost_btn, {
  removeModal()
})"#;

    #[test]
    fn collects_blocks_with_line_ranges() {
        let lines: Vec<&str> = SRC.lines().collect();
        let blocks = collect_handler_blocks(&lines, BlockScanMode::Naive);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].trigger_id, "add_row_btn");
        assert_eq!((blocks[0].start_line, blocks[0].end_line), (4, 8));
        assert!(blocks[0].raw_text.starts_with("observeEvent(input$add_row_btn"));
        assert!(blocks[0].raw_text.ends_with("})"));
        assert_eq!((blocks[1].start_line, blocks[1].end_line), (9, 11));
    }

    #[test]
    fn analyzes_bound_handler() {
        let lines: Vec<&str> = SRC.lines().collect();
        let tables = AnalyzerTables::default();
        let blocks = collect_handler_blocks(&lines, tables.block_mode);
        let mut triggers = BTreeMap::new();
        triggers.insert(
            "add_row_btn".to_string(),
            TriggerControl {
                id: "add_row_btn".to_string(),
                label: "Add row".to_string(),
                declared_at_line: 1,
            },
        );
        let custom: BTreeSet<String> = ["save_row".to_string()].into_iter().collect();

        let analysis = analyze_handler(&blocks[0], &triggers, &custom, &tables);
        assert_eq!(analysis.key_calls.as_slice(), ["save_row", "showNotification"]);
        assert_eq!(
            analysis.side_effects.iter().copied().collect::<Vec<_>>(),
            vec![EffectKind::ShowsNotification]
        );
        assert_eq!(analysis.other_inputs.as_slice(), ["row_name"]);
        assert!(analysis.sql_targets.is_empty());
        assert_eq!(analysis.notification_samples.as_slice(), ["Row added"]);
        assert_eq!(analysis.button_label(), "Add row");
        assert_eq!(
            analysis.purpose,
            "Validate new entry fields and insert a new row."
        );
    }

    #[test]
    fn unbound_handler_has_no_meta() {
        let lines: Vec<&str> = SRC.lines().collect();
        let tables = AnalyzerTables::default();
        let blocks = collect_handler_blocks(&lines, tables.block_mode);
        let analysis = analyze_handler(&blocks[1], &BTreeMap::new(), &BTreeSet::new(), &tables);
        assert!(analysis.button_meta.is_none());
        assert_eq!(analysis.button_line_display(), "-");
        assert!(analysis.side_effects.contains(&EffectKind::ClosesModal));
        assert_eq!(analysis.purpose, "Handle this UI event and update app state.");
    }
}
