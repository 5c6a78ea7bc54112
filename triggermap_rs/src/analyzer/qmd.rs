//! Quarto (`.qmd`) report: front matter, overview, Mermaid diagram and the
//! cross-referenced handler tables.
//!
//! Output depends only on the [`ButtonMap`], the tables and [`ReportMeta`];
//! leave `generated_at` unset to get byte-identical reports for identical input.

use std::path::Path;

use super::effects::format_effects;
use super::mermaid::build_mermaid;
use super::ordered::OrderedSet;
use super::tables::AnalyzerTables;
use crate::types::{ButtonMap, HandlerAnalysis};

const EXPLORER_HTML: &str = include_str!("assets/explorer.html");
const TOOLBAR_HTML: &str = include_str!("assets/toolbar.html");

const SUMMARY_MAX_INPUTS: usize = 5;
const CORE_MAX_INPUTS: usize = 6;
const CORE_MAX_CALLS: usize = 4;
const CORE_MAX_SQL: usize = 4;

/// Where the report came from and where it goes.
#[derive(Debug, Clone, Default)]
pub struct ReportMeta {
    pub source_path: String,
    pub output_path: String,
    /// Rendered as a "Generated" line when present.
    pub generated_at: Option<String>,
}

impl ReportMeta {
    pub fn new(source: &Path, output: &Path) -> Self {
        Self {
            source_path: source.display().to_string(),
            output_path: output.display().to_string(),
            generated_at: None,
        }
    }

    fn source_name(&self) -> String {
        Path::new(&self.source_path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source_path.clone())
    }
}

fn push(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn push_block(out: &mut String, block: &str) {
    for line in block.lines() {
        push(out, line);
    }
}

/// Keeps free text from splitting a Markdown table cell.
fn escape_cell(raw: &str) -> String {
    raw.replace('|', "\\|")
}

fn or_dash(raw: &str) -> String {
    if raw.is_empty() {
        "-".to_string()
    } else {
        escape_cell(raw)
    }
}

fn code_list<'a, I>(items: I, suffix: &str) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    let rendered: Vec<String> = items
        .into_iter()
        .map(|item| format!("`{item}{suffix}`"))
        .collect();
    if rendered.is_empty() {
        "-".to_string()
    } else {
        rendered.join(", ")
    }
}

fn capped(set: &OrderedSet, limit: usize) -> impl Iterator<Item = &String> {
    set.iter().take(limit)
}

fn render_front_matter(out: &mut String, meta: &ReportMeta) {
    push(out, "---");
    push(
        out,
        &format!("title: \"Button to Function Map ({})\"", meta.source_name()),
    );
    push(out, "execute:");
    push(out, "  echo: false");
    push(out, "  warning: false");
    push(out, "format:");
    push(out, "  html:");
    push(out, "    mermaid-format: svg");
    push(out, "---");
    push(out, "");
}

fn render_overview(out: &mut String, map: &ButtonMap, meta: &ReportMeta) {
    push(out, "# Overview");
    push(out, "");
    push(out, &format!("- Source file: `{}`", meta.source_path));
    if let Some(generated_at) = &meta.generated_at {
        push(out, &format!("- Generated: `{generated_at}`"));
    }
    push(
        out,
        &format!(
            "- Total `actionButton()` controls detected: **{}**",
            map.triggers.len()
        ),
    );
    push(
        out,
        &format!(
            "- Total `observeEvent(input$...)` handlers detected: **{}**",
            map.handlers.len()
        ),
    );
    push(
        out,
        &format!(
            "- Buttons with direct handler mapping: **{}**",
            map.bound_trigger_ids().len()
        ),
    );
    push(out, "");
    push(
        out,
        "`Main Impacts` means what the handler changes, for example: reads/writes DB, sends email, opens/closes modal, shows notifications, refreshes UI data.",
    );
    push(out, "");
    push(out, "## Regenerate");
    push(out, "");
    push(out, "```bash");
    push(
        out,
        &format!(
            "triggermap --app {} --out {}",
            meta.source_path, meta.output_path
        ),
    );
    push(out, "```");
    push(out, "");
}

fn render_explorer(out: &mut String, mermaid: &str) {
    push(out, "## Explorer (Split View)");
    push(out, "");
    push(out, "```{=html}");
    push_block(out, EXPLORER_HTML);
    push(out, "```");
    push(out, "");
    push(out, ":::: {.columns}");
    push(out, "::: {.column width=\"40%\"}");
    push(out, "### Diagram");
    push(out, "");
    push(out, "```{=html}");
    push_block(out, TOOLBAR_HTML);
    push(out, "```");
    push(out, "");
    push(out, "```{mermaid}");
    push(out, "%%| fig-width: 22");
    push(out, "%%| fig-height: 28");
    push_block(out, mermaid);
    push(out, "```");
    push(out, "");
    push(out, "```{=html}");
    push(out, "</div>");
    push(out, "```");
    push(out, ":::");
}

fn render_summary_table(out: &mut String, handlers: &[&HandlerAnalysis]) {
    push(out, "::: {.column width=\"60%\"}");
    push(out, "### Handler Summary");
    push(out, "");
    push(out, "```{=html}");
    push(out, "<div class=\"summary-table-wrap\">");
    push(out, "```");
    push(out, "");
    push(out, "| Button ID | Purpose | Uses Inputs | Main Impacts |");
    push(out, "|---|---|---|---|");
    for h in handlers {
        push(
            out,
            &format!(
                "| `{}` | {} | {} | {} |",
                h.trigger_id,
                escape_cell(&h.purpose),
                code_list(capped(&h.other_inputs, SUMMARY_MAX_INPUTS), ""),
                format_effects(&h.side_effects)
            ),
        );
    }
    push(out, "");
    push(out, "```{=html}");
    push(out, "</div>");
    push(out, "```");
    push(out, "");
}

fn render_core_table(out: &mut String, handlers: &[&HandlerAnalysis], tables: &AnalyzerTables) {
    push(out, "### Core Buttons");
    push(out, "");
    push(
        out,
        "| Button ID | Label | Responsibility | Data/Inputs used | Key calls | DB targets |",
    );
    push(out, "|---|---|---|---|---|---|");
    for h in handlers.iter().filter(|h| tables.is_core(&h.trigger_id)) {
        push(
            out,
            &format!(
                "| `{}` | {} | {} | {} | {} | {} |",
                h.trigger_id,
                or_dash(h.button_label()),
                escape_cell(&h.purpose),
                code_list(capped(&h.other_inputs, CORE_MAX_INPUTS), ""),
                code_list(capped(&h.key_calls, CORE_MAX_CALLS), "()"),
                code_list(capped(&h.sql_targets, CORE_MAX_SQL), "")
            ),
        );
    }
    push(out, "");
}

fn render_notification_table(out: &mut String, handlers: &[&HandlerAnalysis]) {
    push(out, "### Notification Text (Detected)");
    push(out, "");
    push(out, "| Button ID | Notification message sample(s) |");
    push(out, "|---|---|");
    let with_messages: Vec<&&HandlerAnalysis> = handlers
        .iter()
        .filter(|h| !h.notification_samples.is_empty())
        .collect();
    if with_messages.is_empty() {
        push(
            out,
            "| - | No direct literal `showNotification()` text detected in handlers. |",
        );
    } else {
        for h in with_messages {
            let messages: Vec<String> = h
                .notification_samples
                .iter()
                .map(|m| escape_cell(m))
                .collect();
            push(
                out,
                &format!("| `{}` | {} |", h.trigger_id, messages.join("<br>")),
            );
        }
    }
    push(out, ":::");
    push(out, "::::");
    push(out, "");
}

fn render_full_table(out: &mut String, handlers: &[&HandlerAnalysis]) {
    push(out, "## Full Mapping Table");
    push(out, "");
    push(
        out,
        "| Button ID | Label | Purpose | Button line | Handler line | Handler block | Uses inputs | Key function calls | Impacts | SQL targets |",
    );
    push(out, "|---|---|---|---:|---:|---|---|---|---|---|");
    for h in handlers {
        push(
            out,
            &format!(
                "| `{}` | {} | {} | {} | {} | `{}-{}` | {} | {} | {} | {} |",
                h.trigger_id,
                or_dash(h.button_label()),
                escape_cell(&h.purpose),
                h.button_line_display(),
                h.handler_line,
                h.handler_line,
                h.handler_end_line,
                code_list(&h.other_inputs, ""),
                code_list(&h.key_calls, "()"),
                format_effects(&h.side_effects),
                code_list(&h.sql_targets, "")
            ),
        );
    }
    push(out, "");
}

fn render_unbound(out: &mut String, map: &ButtonMap) {
    push(
        out,
        "## Buttons Without Direct observeEvent(input$...) Handler",
    );
    push(out, "");
    let unbound = map.unbound_triggers();
    if unbound.is_empty() {
        push(out, "- None");
        return;
    }
    for trigger in unbound {
        let label = if trigger.label.is_empty() {
            "-"
        } else {
            trigger.label.as_str()
        };
        push(
            out,
            &format!(
                "- `{}` (line {}, label: `{}`)",
                trigger.id, trigger.declared_at_line, label
            ),
        );
    }
}

/// Renders the whole report as one string, ready for a single write.
pub fn render_qmd(map: &ButtonMap, tables: &AnalyzerTables, meta: &ReportMeta) -> String {
    let sorted = map.sorted_handlers();
    let mermaid = build_mermaid(&map.handlers, tables);

    let mut out = String::with_capacity(16 * 1024);
    render_front_matter(&mut out, meta);
    render_overview(&mut out, map, meta);
    render_explorer(&mut out, &mermaid);
    render_summary_table(&mut out, &sorted);
    render_core_table(&mut out, &sorted, tables);
    render_notification_table(&mut out, &sorted);
    render_full_table(&mut out, &sorted);
    render_unbound(&mut out, map);
    out
}
