use std::sync::OnceLock;

use regex::Regex;

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex literal")
}

pub(crate) fn regex_action_button() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // actionButton("id") / actionButton("id", "Label", ...)
    RE.get_or_init(|| regex(r#"actionButton\(\s*"([A-Za-z0-9_]+)"\s*(?:,\s*"([^"]*)")?"#))
}

pub(crate) fn regex_observe_event() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"observeEvent\(\s*input\$([A-Za-z0-9_]+)\s*,"#))
}

pub(crate) fn regex_function_def() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"^\s*([A-Za-z][A-Za-z0-9_.]*)\s*<-\s*function\s*\("#))
}

pub(crate) fn regex_function_call() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"\b([A-Za-z][A-Za-z0-9_.]*)\s*\("#))
}

pub(crate) fn regex_input_ref() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"\binput\$([A-Za-z0-9_]+)\b"#))
}

pub(crate) fn regex_sql_select() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"(?is)\bSELECT\b.*?\bFROM\s+([A-Za-z_][A-Za-z0-9_.]*)"#))
}

pub(crate) fn regex_sql_insert() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"(?is)\bINSERT\s+INTO\s+([A-Za-z_][A-Za-z0-9_.]*)"#))
}

pub(crate) fn regex_sql_update() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"(?is)\bUPDATE\s+([A-Za-z_][A-Za-z0-9_.]*)"#))
}

pub(crate) fn regex_sql_delete() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"(?is)\bDELETE\s+FROM\s+([A-Za-z_][A-Za-z0-9_.]*)"#))
}

pub(crate) fn regex_notification() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // No backreferences in `regex`: one alternative per quote style.
    RE.get_or_init(|| regex(r#"(?s)showNotification\(\s*(?:"(.*?)"|'(.*?)')"#))
}

pub(crate) fn regex_whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"\s+"#))
}

pub(crate) fn regex_line_break() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // CRLF, lone CR and LF all end a line
    RE.get_or_init(|| regex(r#"\r\n|\r|\n"#))
}
