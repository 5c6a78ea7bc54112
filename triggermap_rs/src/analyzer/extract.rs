//! Per-block extractors that run beside call extraction: referenced inputs,
//! SQL targets and literal notification texts.

use regex::Regex;

use super::ordered::OrderedSet;
use super::regexes::{
    regex_input_ref, regex_notification, regex_sql_delete, regex_sql_insert, regex_sql_select,
    regex_sql_update, regex_whitespace_run,
};

pub const MAX_NOTIFICATION_SAMPLES: usize = 2;

/// `input$<id>` references other than the block's own trigger.
pub fn extract_other_inputs(block: &str, trigger_id: &str) -> OrderedSet {
    regex_input_ref()
        .captures_iter(block)
        .map(|caps| caps[1].to_string())
        .filter(|id| id != trigger_id)
        .collect()
}

/// `"SELECT projects"`, `"INSERT audit"`, ... grouped by verb in
/// SELECT/INSERT/UPDATE/DELETE order.
pub fn extract_sql_targets(block: &str) -> OrderedSet {
    let patterns: [(&Regex, &str); 4] = [
        (regex_sql_select(), "SELECT"),
        (regex_sql_insert(), "INSERT"),
        (regex_sql_update(), "UPDATE"),
        (regex_sql_delete(), "DELETE"),
    ];
    let mut targets = OrderedSet::new();
    for (re, verb) in patterns {
        for caps in re.captures_iter(block) {
            targets.insert(format!("{verb} {}", caps[1].trim()));
        }
    }
    targets
}

/// Up to two distinct literal messages passed to `showNotification(...)`.
pub fn extract_notification_messages(block: &str) -> OrderedSet {
    let mut messages = OrderedSet::new();
    for caps in regex_notification().captures_iter(block) {
        let Some(raw) = caps.get(1).or_else(|| caps.get(2)) else {
            continue;
        };
        let message = regex_whitespace_run().replace_all(raw.as_str(), " ");
        let message = message.trim();
        if !message.is_empty() {
            messages.insert(message);
        }
    }
    messages.truncate(MAX_NOTIFICATION_SAMPLES);
    messages
}
