use serde::Serialize;

use crate::types::{ButtonMap, HandlerAnalysis, TriggerControl};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    source: &'a str,
    trigger_count: usize,
    handler_count: usize,
    bound_trigger_count: usize,
    triggers: Vec<&'a TriggerControl>,
    handlers: Vec<&'a HandlerAnalysis>,
    unbound_triggers: Vec<&'a TriggerControl>,
}

/// Pretty JSON view of a map; handlers sorted like the report tables.
pub fn render_json(map: &ButtonMap, source: &str) -> serde_json::Result<String> {
    let report = JsonReport {
        source,
        trigger_count: map.triggers.len(),
        handler_count: map.handlers.len(),
        bound_trigger_count: map.bound_trigger_ids().len(),
        triggers: map.triggers.values().collect(),
        handlers: map.sorted_handlers(),
        unbound_triggers: map.unbound_triggers(),
    };
    let mut json = serde_json::to_string_pretty(&report)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::mapper::ButtonMapper;

    #[test]
    fn json_carries_counts_and_effect_names() {
        let src = r#"actionButton("save_btn", "Save")
actionButton("idle_btn", "Idle")
observeEvent(input$save_btn, {
  dbExecute(con, "UPDATE projects SET a = 1")
})"#;
        let map = ButtonMapper::default().map_source(src);
        let json = render_json(&map, "app.R").expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");

        assert_eq!(value["triggerCount"], 2);
        assert_eq!(value["handlerCount"], 1);
        assert_eq!(value["boundTriggerCount"], 1);
        assert_eq!(value["handlers"][0]["sideEffects"][0], "writes_db");
        assert_eq!(value["handlers"][0]["sqlTargets"][0], "UPDATE projects");
        assert_eq!(value["handlers"][0]["buttonMeta"]["label"], "Save");
        assert_eq!(value["unboundTriggers"][0]["id"], "idle_btn");
    }
}
