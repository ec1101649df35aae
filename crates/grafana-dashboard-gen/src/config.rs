// Numan Thabit 2025
use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Destination of the generated dashboard when nothing else is configured.
pub const DEFAULT_OUTPUT_PATH: &str = "../grafana/dashboards/definitions/cpu-usage-dashboard.json";
/// Datasource plugin type referenced by the panel and its targets.
pub const DEFAULT_DATASOURCE_TYPE: &str = "prometheus";
/// Datasource uid referenced by the panel and its targets.
pub const DEFAULT_DATASOURCE_UID: &str = "DS_PROMETHEUS_UID";

/// Generator settings: where the document goes and which datasource it queries.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// File the dashboard JSON is written to.
    pub output_path: PathBuf,
    /// Datasource reference embedded in the panel and every target.
    pub datasource: DatasourceConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            datasource: DatasourceConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Read a TOML config file. Missing keys fall back to the defaults.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file at {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("failed to parse {} as TOML", path.display()))?;
        Ok(config)
    }

    /// Ensure the settings can produce a usable artifact.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            !self.output_path.as_os_str().is_empty(),
            "output_path must not be empty"
        );
        anyhow::ensure!(
            self.output_path.file_name().is_some(),
            "output_path must name a file, got {}",
            self.output_path.display()
        );
        anyhow::ensure!(
            !self.datasource.kind.trim().is_empty(),
            "datasource type must not be empty"
        );
        anyhow::ensure!(
            !self.datasource.uid.trim().is_empty(),
            "datasource uid must not be empty"
        );
        Ok(())
    }
}

/// Datasource `type` and `uid` pair as it appears in the document.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DatasourceConfig {
    /// Plugin type, serialized as `type`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Datasource uid as provisioned in Grafana.
    pub uid: String,
}

impl Default for DatasourceConfig {
    fn default() -> Self {
        Self {
            kind: DEFAULT_DATASOURCE_TYPE.to_string(),
            uid: DEFAULT_DATASOURCE_UID.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp config");
        file.write_all(contents.as_bytes()).expect("write temp config");
        file.flush().expect("flush temp config");
        file
    }

    #[test]
    fn default_config_matches_constants() {
        let cfg = GeneratorConfig::default();
        assert_eq!(cfg.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert_eq!(cfg.datasource.kind, "prometheus");
        assert_eq!(cfg.datasource.uid, "DS_PROMETHEUS_UID");
        cfg.validate().expect("default config should validate");
    }

    #[test]
    fn load_fills_missing_keys_from_defaults() {
        let file = write_config(
            r#"
[datasource]
uid = "DS_X"
"#,
        );
        let cfg = GeneratorConfig::load(file.path()).expect("load partial config");
        assert_eq!(cfg.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert_eq!(cfg.datasource.kind, "prometheus");
        assert_eq!(cfg.datasource.uid, "DS_X");
    }

    #[test]
    fn load_reads_every_key() {
        let file = write_config(
            r#"
output_path = "out/dashboard.json"

[datasource]
type = "mimir"
uid = "DS_MIMIR"
"#,
        );
        let cfg = GeneratorConfig::load(file.path()).expect("load full config");
        assert_eq!(cfg.output_path, PathBuf::from("out/dashboard.json"));
        assert_eq!(cfg.datasource.kind, "mimir");
        assert_eq!(cfg.datasource.uid, "DS_MIMIR");
    }

    #[test]
    fn load_rejects_unknown_keys() {
        let file = write_config("output = \"typo.json\"\n");
        let err = GeneratorConfig::load(file.path()).expect_err("unknown key must fail");
        assert!(err.to_string().contains("as TOML"));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("absent.toml");
        let err = GeneratorConfig::load(&missing).expect_err("missing file must fail");
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn validate_rejects_empty_uid() {
        let mut cfg = GeneratorConfig::default();
        cfg.datasource.uid = "  ".to_string();
        let err = cfg.validate().expect_err("blank uid must fail");
        assert!(err.to_string().contains("datasource uid"));
    }

    #[test]
    fn validate_rejects_empty_output_path() {
        let mut cfg = GeneratorConfig::default();
        cfg.output_path = PathBuf::new();
        let err = cfg.validate().expect_err("empty path must fail");
        assert!(err.to_string().contains("output_path must not be empty"));
    }

    #[test]
    fn validate_rejects_directory_like_path() {
        let mut cfg = GeneratorConfig::default();
        cfg.output_path = PathBuf::from("..");
        let err = cfg.validate().expect_err("path without file name must fail");
        assert!(err.to_string().contains("must name a file"));
    }
}
