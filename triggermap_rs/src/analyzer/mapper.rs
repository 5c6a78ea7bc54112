use tracing::info;

use super::calls::collect_custom_functions;
use super::handlers::{analyze_handler, collect_handler_blocks};
use super::regexes::regex_line_break;
use super::tables::AnalyzerTables;
use super::triggers::collect_triggers;
use crate::types::ButtonMap;

/// Runs the whole analysis over one source snapshot.
///
/// The mapper owns its lookup tables and holds no other state, so one
/// instance can map any number of sources.
#[derive(Debug, Clone, Default)]
pub struct ButtonMapper {
    tables: AnalyzerTables,
}

impl ButtonMapper {
    pub fn new(tables: AnalyzerTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &AnalyzerTables {
        &self.tables
    }

    pub fn map_source(&self, source: &str) -> ButtonMap {
        let mut lines: Vec<&str> = regex_line_break().split(source).collect();
        // a trailing terminator does not open another line
        if lines.last() == Some(&"") {
            lines.pop();
        }
        self.map_lines(&lines)
    }

    pub fn map_lines(&self, lines: &[&str]) -> ButtonMap {
        let triggers = collect_triggers(lines);
        let custom_functions = collect_custom_functions(lines);
        let handlers: Vec<_> = collect_handler_blocks(lines, self.tables.block_mode)
            .iter()
            .map(|block| analyze_handler(block, &triggers, &custom_functions, &self.tables))
            .collect();

        info!(
            lines = lines.len(),
            triggers = triggers.len(),
            custom_functions = custom_functions.len(),
            handlers = handlers.len(),
            "mapped source"
        );

        ButtonMap {
            triggers,
            custom_functions,
            handlers,
        }
    }
}
