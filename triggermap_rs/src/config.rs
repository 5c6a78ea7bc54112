//! Configuration file support for triggermap.
//!
//! Loads optional `.triggermap/config.toml` from the working directory, or an
//! explicit file passed with `--config`. Every table only extends the built-in
//! defaults.

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::analyzer::blocks::BlockScanMode;
use crate::analyzer::effects::EffectKind;
use crate::analyzer::tables::AnalyzerTables;
use crate::error::MapError;

pub const CONFIG_DIR: &str = ".triggermap";
pub const CONFIG_FILE: &str = "config.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct TriggermapConfig {
    pub scan: ScanConfig,
    pub tables: TablesConfig,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// `naive` (default) or `literal_aware`.
    pub block_mode: Option<BlockScanMode>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct TablesConfig {
    /// Extra names never reported as calls.
    pub extra_keywords: Vec<String>,
    /// Extra names always kept as key calls.
    pub extra_important_calls: Vec<String>,
    /// Extra trigger ids drawn in the diagram and the core table.
    pub extra_core_workflow_ids: Vec<String>,
    pub effects: Vec<EffectEntry>,
    pub purposes: Vec<PurposeEntry>,
}

/// `call = "audit_log"`, `effect = "writes_db"`
#[derive(Debug, Clone, Deserialize)]
pub struct EffectEntry {
    pub call: String,
    pub effect: EffectKind,
}

/// Exact-id purpose sentence; replaces a built-in sentence for the same id.
#[derive(Debug, Clone, Deserialize)]
pub struct PurposeEntry {
    pub id: String,
    pub sentence: String,
}

impl TriggermapConfig {
    /// Load config from `.triggermap/config.toml` under `root`.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_DIR).join(CONFIG_FILE);
        if !config_path.exists() {
            return Self::default();
        }
        match Self::load_from_path(&config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}; using built-in tables");
                Self::default()
            }
        }
    }

    /// Load config from a specific path. Unlike [`load`](Self::load), a
    /// missing or malformed file is an error.
    pub fn load_from_path(path: &Path) -> Result<Self, MapError> {
        let content = std::fs::read_to_string(path).map_err(|e| MapError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| MapError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Built-in tables extended with this config.
    pub fn to_tables(&self) -> AnalyzerTables {
        let mut tables = AnalyzerTables::default();
        self.apply(&mut tables);
        tables
    }

    pub fn apply(&self, tables: &mut AnalyzerTables) {
        if let Some(mode) = self.scan.block_mode {
            tables.block_mode = mode;
        }
        tables
            .keywords
            .extend(self.tables.extra_keywords.iter().cloned());
        tables
            .important_calls
            .extend(self.tables.extra_important_calls.iter().cloned());
        tables
            .core_workflow_ids
            .extend(self.tables.extra_core_workflow_ids.iter().cloned());
        for entry in &self.tables.effects {
            tables.effects.add(entry.call.clone(), entry.effect);
            // effect calls are key calls too
            tables.important_calls.insert(entry.call.clone());
        }
        for entry in &self.tables.purposes {
            tables.purposes.set_exact(entry.id.clone(), entry.sentence.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = TriggermapConfig::default();
        assert!(config.scan.block_mode.is_none());
        assert!(config.tables.extra_keywords.is_empty());
        assert!(config.tables.effects.is_empty());
        let tables = config.to_tables();
        assert_eq!(tables.block_mode, BlockScanMode::Naive);
        assert_eq!(
            tables.keywords.len(),
            AnalyzerTables::default().keywords.len()
        );
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = TriggermapConfig::load(temp.path());
        assert!(config.tables.purposes.is_empty());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let config_dir = temp.path().join(CONFIG_DIR);
        std::fs::create_dir_all(&config_dir).expect("create .triggermap");

        let config_path = config_dir.join(CONFIG_FILE);
        let mut file = std::fs::File::create(&config_path).expect("create config");
        writeln!(
            file,
            r#"
[scan]
block_mode = "literal_aware"

[tables]
extra_keywords = ["glue"]
extra_important_calls = ["archive_project"]
extra_core_workflow_ids = ["archive_project_btn"]

[[tables.effects]]
call = "audit_log"
effect = "writes_db"

[[tables.purposes]]
id = "archive_project_btn"
sentence = "Archive the selected project."
"#
        )
        .expect("write config");

        let config = TriggermapConfig::load(temp.path());
        assert_eq!(config.scan.block_mode, Some(BlockScanMode::LiteralAware));
        assert_eq!(config.tables.effects.len(), 1);
        assert_eq!(config.tables.effects[0].effect, EffectKind::WritesDb);

        let tables = config.to_tables();
        assert_eq!(tables.block_mode, BlockScanMode::LiteralAware);
        assert!(tables.is_keyword("glue"));
        assert!(tables.is_important("archive_project"));
        assert!(tables.is_important("audit_log"));
        assert!(tables.is_core("archive_project_btn"));
        assert!(tables.is_core("new_project_btn"));
        assert_eq!(
            tables.purposes.exact_sentence("archive_project_btn"),
            Some("Archive the selected project.")
        );
    }

    #[test]
    fn test_invalid_config_falls_back_to_default() {
        let temp = TempDir::new().expect("temp dir");
        let config_dir = temp.path().join(CONFIG_DIR);
        std::fs::create_dir_all(&config_dir).expect("create .triggermap");
        std::fs::write(
            config_dir.join(CONFIG_FILE),
            "[[tables.effects]]\ncall = \"x\"\neffect = \"teleports\"\n",
        )
        .expect("write config");

        let config = TriggermapConfig::load(temp.path());
        assert!(config.tables.effects.is_empty());
    }

    #[test]
    fn test_explicit_path_errors_are_reported() {
        let temp = TempDir::new().expect("temp dir");
        let missing = temp.path().join("nope.toml");
        let err = TriggermapConfig::load_from_path(&missing).expect_err("missing file");
        assert!(matches!(err, MapError::Config { .. }));

        let bad = temp.path().join("bad.toml");
        std::fs::write(&bad, "scan = 3").expect("write");
        assert!(TriggermapConfig::load_from_path(&bad).is_err());
    }
}
