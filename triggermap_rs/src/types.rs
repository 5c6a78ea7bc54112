use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::analyzer::effects::EffectKind;
use crate::analyzer::ordered::OrderedSet;

/// A declared `actionButton(...)` control. Lines are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerControl {
    pub id: String,
    pub label: String,
    pub declared_at_line: usize,
}

/// Code region of one `observeEvent(input$id, ...)` binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerBlock {
    pub trigger_id: String,
    pub start_line: usize,
    pub end_line: usize,
    #[serde(skip)]
    pub raw_text: String,
}

/// Declaration metadata copied onto a handler when its trigger was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonMeta {
    pub line: usize,
    pub label: String,
}

/// What one handler block calls, reads and changes, plus its purpose sentence.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerAnalysis {
    pub trigger_id: String,
    pub button_meta: Option<ButtonMeta>,
    pub handler_line: usize,
    pub handler_end_line: usize,
    pub key_calls: OrderedSet,
    pub side_effects: BTreeSet<EffectKind>,
    pub other_inputs: OrderedSet,
    pub sql_targets: OrderedSet,
    pub notification_samples: OrderedSet,
    pub purpose: String,
}

impl HandlerAnalysis {
    pub fn button_label(&self) -> &str {
        self.button_meta
            .as_ref()
            .map(|meta| meta.label.as_str())
            .unwrap_or("")
    }

    /// Declaration line as rendered in tables (`-` when undeclared).
    pub fn button_line_display(&self) -> String {
        self.button_meta
            .as_ref()
            .map(|meta| meta.line.to_string())
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn is_bound(&self) -> bool {
        self.button_meta.is_some()
    }
}

/// Everything one pass over an application source produced.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonMap {
    pub triggers: BTreeMap<String, TriggerControl>,
    pub custom_functions: BTreeSet<String>,
    /// Handlers in source order.
    pub handlers: Vec<HandlerAnalysis>,
}

impl ButtonMap {
    /// Trigger ids that have at least one handler bound to their declaration.
    pub fn bound_trigger_ids(&self) -> BTreeSet<&str> {
        self.handlers
            .iter()
            .filter(|h| h.is_bound())
            .map(|h| h.trigger_id.as_str())
            .collect()
    }

    /// Declared triggers without any handler, sorted by id.
    pub fn unbound_triggers(&self) -> Vec<&TriggerControl> {
        let bound = self.bound_trigger_ids();
        self.triggers
            .values()
            .filter(|t| !bound.contains(t.id.as_str()))
            .collect()
    }

    /// Handlers ordered by `(handler_line, trigger_id)`.
    pub fn sorted_handlers(&self) -> Vec<&HandlerAnalysis> {
        let mut sorted: Vec<&HandlerAnalysis> = self.handlers.iter().collect();
        sorted.sort_by(|a, b| {
            a.handler_line
                .cmp(&b.handler_line)
                .then_with(|| a.trigger_id.cmp(&b.trigger_id))
        });
        sorted
    }
}
