//! Read one source file, map it, write one report.

use std::path::{Path, PathBuf};

use time::OffsetDateTime;
use time::format_description;
use tracing::{debug, info};

use super::json::render_json;
use super::mapper::ButtonMapper;
use super::qmd::{ReportMeta, render_qmd};
use super::tables::AnalyzerTables;
use crate::error::{MapError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Qmd,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Qmd => "qmd",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub app: PathBuf,
    pub out: PathBuf,
    pub format: OutputFormat,
    pub tables: AnalyzerTables,
    /// Adds a "Generated" timestamp; the report is then no longer
    /// reproducible byte for byte.
    pub stamp: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output: PathBuf,
    pub triggers: usize,
    pub handlers: usize,
    pub bound_triggers: usize,
    pub unbound_triggers: usize,
}

/// `<dir>/<stem>-button-function-map.<ext>` next to the source.
pub fn default_output_path(app: &Path, format: OutputFormat) -> PathBuf {
    let stem = app
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "app".to_string());
    let name = format!("{stem}-button-function-map.{}", format.extension());
    match app.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

fn local_timestamp() -> Option<String> {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let format =
        format_description::parse_borrowed::<2>("[year]-[month]-[day] [hour]:[minute]").ok()?;
    now.format(&format).ok()
}

pub fn run_button_map(opts: &RunOptions) -> Result<RunSummary> {
    let source = std::fs::read_to_string(&opts.app).map_err(|source| MapError::ReadSource {
        path: opts.app.clone(),
        source,
    })?;
    debug!(path = %opts.app.display(), bytes = source.len(), "read source");

    let mapper = ButtonMapper::new(opts.tables.clone());
    let map = mapper.map_source(&source);

    let rendered = match opts.format {
        OutputFormat::Qmd => {
            let mut meta = ReportMeta::new(&opts.app, &opts.out);
            if opts.stamp {
                meta.generated_at = local_timestamp();
            }
            render_qmd(&map, mapper.tables(), &meta)
        }
        OutputFormat::Json => render_json(&map, &opts.app.display().to_string())?,
    };

    std::fs::write(&opts.out, rendered).map_err(|source| MapError::WriteReport {
        path: opts.out.clone(),
        source,
    })?;
    info!(path = %opts.out.display(), "wrote report");

    Ok(RunSummary {
        output: opts.out.clone(),
        triggers: map.triggers.len(),
        handlers: map.handlers.len(),
        bound_triggers: map.bound_trigger_ids().len(),
        unbound_triggers: map.unbound_triggers().len(),
    })
}
