use std::collections::BTreeSet;

use super::ordered::OrderedSet;
use super::regexes::{regex_function_call, regex_function_def};
use super::tables::AnalyzerTables;

pub const MAX_KEY_CALLS: usize = 10;

/// Names assigned a function anywhere in the source (`name <- function(`).
pub fn collect_custom_functions(lines: &[&str]) -> BTreeSet<String> {
    lines
        .iter()
        .filter_map(|line| regex_function_def().captures(line))
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Every `name(` in `block`, first-seen order, stoplisted names removed.
pub fn extract_calls(block: &str, tables: &AnalyzerTables) -> OrderedSet {
    regex_function_call()
        .captures_iter(block)
        .map(|caps| caps[1].to_string())
        .filter(|name| !tables.is_keyword(name))
        .collect()
}

/// Calls to functions defined in the analysed source.
pub fn custom_function_calls<'a>(
    calls: &'a OrderedSet,
    custom_functions: &BTreeSet<String>,
) -> Vec<&'a String> {
    calls
        .iter()
        .filter(|call| call.as_str() != "observeEvent" && custom_functions.contains(*call))
        .collect()
}

/// Calls on the important-calls allowlist.
pub fn important_calls<'a>(calls: &'a OrderedSet, tables: &AnalyzerTables) -> Vec<&'a String> {
    calls
        .iter()
        .filter(|call| tables.is_important(call))
        .collect()
}

/// Custom-function calls followed by important calls, de-duplicated and
/// capped at [`MAX_KEY_CALLS`].
pub fn key_calls(
    calls: &OrderedSet,
    custom_functions: &BTreeSet<String>,
    tables: &AnalyzerTables,
) -> OrderedSet {
    let mut keys: OrderedSet = custom_function_calls(calls, custom_functions)
        .into_iter()
        .chain(important_calls(calls, tables))
        .cloned()
        .collect();
    keys.truncate(MAX_KEY_CALLS);
    keys
}
