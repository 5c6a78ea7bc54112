pub mod blocks;
pub mod calls;
pub mod effects;
pub mod extract;
pub mod handlers;
pub mod json;
pub mod mapper;
pub mod mermaid;
pub mod ordered;
pub mod purpose;
pub mod qmd;
mod regexes;
pub mod runner;
pub mod tables;
pub mod triggers;

pub use effects::EffectKind;
pub use mapper::ButtonMapper;
pub use ordered::OrderedSet;
pub use runner::{OutputFormat, RunOptions, RunSummary, run_button_map};
pub use tables::AnalyzerTables;
