//! Mermaid flowchart of the core workflow handlers.
//!
//! Only allowlisted trigger ids are drawn; the full app would be unreadable.

use std::collections::HashMap;

use super::effects::EffectKind;
use super::tables::AnalyzerTables;
use crate::types::HandlerAnalysis;

pub const MAX_DIAGRAM_CALLS: usize = 4;
pub const EMPTY_PLACEHOLDER: &str = r#"  A["No core handlers found"]"#;

const CLASS_DEFS: &[&str] = &[
    "  classDef btn fill:#e8f0fe,stroke:#356ac3,color:#1b3f7f,stroke-width:1px;",
    "  classDef evt fill:#f0f7e8,stroke:#5b8f29,color:#2f5c12,stroke-width:1px;",
    "  classDef fn fill:#fff3e6,stroke:#cc7a00,color:#7a4a00,stroke-width:1px;",
    "  classDef fx fill:#f5e9ff,stroke:#7b49b0,color:#4d2b73,stroke-width:1px;",
];

/// Maps every character outside `[A-Za-z0-9_]` to `_`.
pub fn safe_mermaid_id(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Builds the `graph LR` description for `handlers` (source order). Effect
/// nodes are emitted once, the first time any handler needs them.
pub fn build_mermaid(handlers: &[HandlerAnalysis], tables: &AnalyzerTables) -> String {
    let mut out: Vec<String> = Vec::new();
    out.push("graph LR".to_string());
    out.extend(CLASS_DEFS.iter().map(|line| line.to_string()));

    let mut effect_nodes: HashMap<EffectKind, String> = HashMap::new();
    let mut drawn = 0usize;

    for handler in handlers.iter().filter(|h| tables.is_core(&h.trigger_id)) {
        drawn += 1;
        let btn_id = safe_mermaid_id(&format!("btn_{}", handler.trigger_id));
        let evt_id = safe_mermaid_id(&format!(
            "evt_{}_{}",
            handler.trigger_id, handler.handler_line
        ));
        out.push(format!(
            r#"  {btn_id}["{}"] --> {evt_id}["observeEvent @ {}"]"#,
            handler.trigger_id, handler.handler_line
        ));
        out.push(format!("  class {btn_id} btn;"));
        out.push(format!("  class {evt_id} evt;"));

        for call in handler.key_calls.iter().take(MAX_DIAGRAM_CALLS) {
            let fn_id = safe_mermaid_id(&format!("fn_{}_{}", handler.trigger_id, call));
            out.push(format!(r#"  {evt_id} --> {fn_id}["{call}()"]"#));
            out.push(format!("  class {fn_id} fn;"));
        }

        for effect in &handler.side_effects {
            let fx_id = match effect_nodes.get(effect) {
                Some(id) => id.clone(),
                None => {
                    let id = safe_mermaid_id(&format!("fx_{}", effect.label()));
                    out.push(format!(r#"  {id}["{}"]"#, effect.label()));
                    out.push(format!("  class {id} fx;"));
                    effect_nodes.insert(*effect, id.clone());
                    id
                }
            };
            out.push(format!("  {evt_id} --> {fx_id}"));
        }
    }

    if drawn == 0 {
        out.push(EMPTY_PLACEHOLDER.to_string());
    }
    out.join("\n")
}
