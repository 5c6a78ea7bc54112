//! Command-line surface of the `triggermap` binary.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::debug;

use crate::analyzer::blocks::BlockScanMode;
use crate::analyzer::runner::{
    OutputFormat, RunOptions, RunSummary, default_output_path, run_button_map,
};
use crate::colors::{ColorMode, Painter};
use crate::config::TriggermapConfig;

#[derive(Parser, Debug)]
#[command(name = "triggermap")]
#[command(about = "Map Shiny action buttons to their observeEvent handlers, calls and side effects")]
#[command(version)]
pub struct Args {
    /// Application source to analyse (e.g. app.R)
    #[arg(long, value_name = "PATH")]
    pub app: PathBuf,

    /// Report path (default: <app stem>-button-function-map.<ext> next to the source)
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = FormatArg::Qmd)]
    pub format: FormatArg,

    /// Config file (default: .triggermap/config.toml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Add a "Generated" timestamp to the report
    #[arg(long)]
    pub stamp: bool,

    /// Brace matching strategy for handler blocks (overrides config)
    #[arg(long, value_enum)]
    pub block_mode: Option<BlockModeArg>,

    /// Colorize status output
    #[arg(long, value_enum, default_value_t = ColorArg::Auto)]
    pub color: ColorArg,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Qmd,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Qmd => OutputFormat::Qmd,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BlockModeArg {
    Naive,
    LiteralAware,
}

impl From<BlockModeArg> for BlockScanMode {
    fn from(arg: BlockModeArg) -> Self {
        match arg {
            BlockModeArg::Naive => BlockScanMode::Naive,
            BlockModeArg::LiteralAware => BlockScanMode::LiteralAware,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorMode::Auto,
            ColorArg::Always => ColorMode::Always,
            ColorArg::Never => ColorMode::Never,
        }
    }
}

/// Installs the stderr log subscriber; `RUST_LOG` wins over `--log-level`.
pub fn init_tracing(log_level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap_or_default()),
        )
        .init();
}

fn load_config(explicit: Option<&Path>) -> Result<TriggermapConfig> {
    match explicit {
        Some(path) => Ok(TriggermapConfig::load_from_path(path)?),
        None => {
            let cwd = std::env::current_dir().context("cannot determine working directory")?;
            Ok(TriggermapConfig::load(&cwd))
        }
    }
}

/// Resolves config and paths into [`RunOptions`].
pub fn build_options(args: &Args) -> Result<RunOptions> {
    let config = load_config(args.config.as_deref())?;
    let mut tables = config.to_tables();
    if let Some(mode) = args.block_mode {
        tables.block_mode = mode.into();
    }
    let format: OutputFormat = args.format.into();
    let out = args
        .out
        .clone()
        .unwrap_or_else(|| default_output_path(&args.app, format));
    debug!(app = %args.app.display(), out = %out.display(), ?format, "resolved options");

    Ok(RunOptions {
        app: args.app.clone(),
        out,
        format,
        tables,
        stamp: args.stamp,
    })
}

pub fn run(args: &Args) -> Result<RunSummary> {
    let options = build_options(args)?;
    let summary = run_button_map(&options)
        .with_context(|| format!("mapping {} failed", options.app.display()))?;
    Ok(summary)
}

pub fn print_summary(summary: &RunSummary, painter: Painter) {
    println!(
        "{}",
        painter.status_ok(&format!("Wrote {}", painter.path(&summary.output.display().to_string())))
    );
    println!(
        "{}",
        painter.status_info(&format!(
            "actionButton count: {}",
            painter.number(summary.triggers)
        ))
    );
    println!(
        "{}",
        painter.status_info(&format!(
            "observeEvent(input$...) count: {}",
            painter.number(summary.handlers)
        ))
    );
    if summary.unbound_triggers > 0 {
        println!(
            "{}",
            painter.status_warn(&format!(
                "buttons without handler: {}",
                painter.number(summary.unbound_triggers)
            ))
        );
    }
}
