//! Comparison settings loaded from TOML.

use std::path::Path;

use anyhow::Context;
use dsd_diff::{Differ, Tolerance, DEFAULT_MAX_DEPTH};
use serde::{Deserialize, Serialize};

/// DICOM JSON wrapper fields that carry no meaning of their own in a path.
const DEFAULT_SKIP_SEGMENTS: [&str; 3] = ["Value", "InlineBinary", "Alphabetic"];

/// Settings for a comparison run.
///
/// ```toml
/// exclude = ["00080018", "00200013"]
/// skip_segments = ["Value"]
/// max_depth = 256
///
/// [tolerance]
/// relative = 1e-4
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiffConfig {
    /// Field names skipped at any depth.
    pub exclude: Vec<String>,
    /// Path segments dropped when rendering paths.
    pub skip_segments: Vec<String>,
    pub tolerance: Tolerance,
    pub max_depth: usize,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            skip_segments: DEFAULT_SKIP_SEGMENTS.iter().map(|s| s.to_string()).collect(),
            tolerance: Tolerance::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DiffConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Add exclusions given on the command line.
    pub fn with_exclusions(mut self, extra: impl IntoIterator<Item = String>) -> Self {
        self.exclude.extend(extra);
        self
    }

    pub fn to_differ(&self) -> Differ {
        Differ::new()
            .exclude_all(self.exclude.iter().cloned())
            .tolerance(self.tolerance)
            .max_depth(self.max_depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = DiffConfig::default();
        assert!(c.exclude.is_empty());
        assert_eq!(c.skip_segments, vec!["Value", "InlineBinary", "Alphabetic"]);
        assert_eq!(c.tolerance, Tolerance::default());
        assert_eq!(c.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(DiffConfig::from_toml("").unwrap(), DiffConfig::default());
    }

    #[test]
    fn partial_toml() {
        let c = DiffConfig::from_toml(
            r#"
            exclude = ["00080018"]
            skip_segments = []

            [tolerance]
            relative = 1e-4
            "#,
        )
        .unwrap();
        assert_eq!(c.exclude, vec!["00080018"]);
        assert!(c.skip_segments.is_empty());
        assert_eq!(c.tolerance.relative, 1e-4);
        assert_eq!(c.tolerance.absolute, 1e-6);
        assert_eq!(c.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(DiffConfig::from_toml("exclusions = []").is_err());
    }

    #[test]
    fn cli_exclusions_extend_file() {
        let c = DiffConfig::from_toml(r#"exclude = ["a"]"#)
            .unwrap()
            .with_exclusions(vec!["b".to_string()]);
        let differ = c.to_differ();
        assert!(differ.exclusions().contains("a"));
        assert!(differ.exclusions().contains("b"));
    }

    #[test]
    fn load_missing_file_fails_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = DiffConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("missing.toml"));
    }
}
