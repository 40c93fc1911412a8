//! Configuration for grapho
//!
//! Stored as TOML (`grapho.toml` by default). Every field has a default, so
//! a partial or empty file is valid. Command-line flags take precedence.

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::Result;

pub use types::{GraphoConfig, MstConfig, SearchConfig, CONFIG_FILE_NAME, CONFIG_FORMAT_VERSION};

impl GraphoConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: GraphoConfig = toml::from_str(&content)?;

        if config.version > CONFIG_FORMAT_VERSION {
            bail_invalid!(
                "config version",
                format!(
                    "{} (newest supported is {})",
                    config.version, CONFIG_FORMAT_VERSION
                )
            );
        }

        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphoError;
    use crate::graph::{MstAlgorithm, SearchAlgorithm};
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = GraphoConfig::default();
        assert_eq!(config.version, CONFIG_FORMAT_VERSION);
        assert_eq!(config.search.algorithm, SearchAlgorithm::Dijkstra);
        assert_eq!(config.mst.algorithm, MstAlgorithm::Prim);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let config = GraphoConfig {
            search: SearchConfig {
                algorithm: SearchAlgorithm::AStar,
            },
            mst: MstConfig {
                algorithm: MstAlgorithm::Kruskal,
            },
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = GraphoConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[search]\nalgorithm = \"bfs\"\n").unwrap();

        let loaded = GraphoConfig::load(&path).unwrap();
        assert_eq!(loaded.search.algorithm, SearchAlgorithm::BreadthFirst);
        assert_eq!(loaded.mst.algorithm, MstAlgorithm::Prim);
        assert_eq!(loaded.version, CONFIG_FORMAT_VERSION);
    }

    #[test]
    fn test_unknown_algorithm_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[mst]\nalgorithm = \"boruvka\"\n").unwrap();

        assert!(matches!(
            GraphoConfig::load(&path),
            Err(GraphoError::Toml(_))
        ));
    }

    #[test]
    fn test_newer_version_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "version = 99\n").unwrap();

        assert!(matches!(
            GraphoConfig::load(&path),
            Err(GraphoError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempdir().unwrap();
        let config = GraphoConfig::load_or_default(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, GraphoConfig::default());
    }
}
